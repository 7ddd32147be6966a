pub mod leasedb;
pub mod paymentdb;
pub mod propertydb;
pub mod tenantdb;

use std::str::FromStr;

use chrono::NaiveDate;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow},
    FromRow, Pool, QueryBuilder, Sqlite,
};

use crate::error::Error;

#[derive(Debug, Clone)]
pub struct DBClient {
    pub(crate) pool: Pool<Sqlite>,
}

impl DBClient {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        DBClient { pool }
    }

    /// Creates the four tables when they do not exist yet. Foreign keys are
    /// declared with `ON DELETE CASCADE`; the repository still cascades
    /// explicitly inside its own transactions.
    pub async fn init_db(&self) -> Result<(), sqlx::Error> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        Ok(())
    }
}

/// Opens a SQLite pool with foreign-key enforcement on. The store assumes at
/// most one active writer, so the pool holds a single connection.
pub async fn connect(database_url: &str) -> Result<Pool<Sqlite>, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);
    SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
}

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS properties (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        address TEXT NOT NULL UNIQUE,
        monthly_rent INTEGER NOT NULL,
        is_available BOOLEAN NOT NULL DEFAULT 1,
        property_type TEXT,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS tenants (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        contact_info TEXT NOT NULL UNIQUE,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS leases (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        property_id INTEGER NOT NULL REFERENCES properties(id) ON DELETE CASCADE,
        tenant_id INTEGER NOT NULL REFERENCES tenants(id) ON DELETE CASCADE,
        start_date TEXT NOT NULL,
        end_date TEXT,
        status TEXT NOT NULL DEFAULT 'active',
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS payments (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        lease_id INTEGER NOT NULL REFERENCES leases(id) ON DELETE CASCADE,
        amount TEXT NOT NULL,
        date_paid TEXT NOT NULL,
        method TEXT,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
    "#,
];

/// A value usable in attribute search, covering every column type the four
/// tables carry.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Int(i64),
    Text(String),
    Bool(bool),
    Date(NaiveDate),
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Int(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<NaiveDate> for AttrValue {
    fn from(value: NaiveDate) -> Self {
        AttrValue::Date(value)
    }
}

/// Exact-equality search over a whitelisted set of columns. A column name
/// outside the whitelist is an [`Error::UnknownAttribute`]; no matches is an
/// empty vec, not an error. Results come back in storage (insertion) order.
pub(crate) async fn find_by_attribute<T>(
    pool: &Pool<Sqlite>,
    table: &str,
    columns: &[&str],
    attrs: &[(&str, AttrValue)],
) -> Result<Vec<T>, Error>
where
    T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
{
    for (name, _) in attrs {
        if !columns.contains(name) {
            return Err(Error::UnknownAttribute((*name).to_string()));
        }
    }

    let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new(format!("SELECT * FROM {}", table));
    if !attrs.is_empty() {
        qb.push(" WHERE ");
        let mut conditions = qb.separated(" AND ");
        for (name, value) in attrs {
            conditions.push(format!("{} = ", name));
            match value {
                AttrValue::Int(v) => conditions.push_bind_unseparated(*v),
                AttrValue::Text(v) => conditions.push_bind_unseparated(v.clone()),
                AttrValue::Bool(v) => conditions.push_bind_unseparated(*v),
                AttrValue::Date(v) => conditions.push_bind_unseparated(*v),
            };
        }
    }
    qb.push(" ORDER BY id");

    let rows = qb.build_query_as::<T>().fetch_all(pool).await?;
    Ok(rows)
}
