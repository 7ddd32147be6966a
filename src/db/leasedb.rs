use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use validator::Validate;

use crate::db::{find_by_attribute, AttrValue, DBClient};
use crate::dtos::leasedtos::CreateLeaseDto;
use crate::error::Error;
use crate::models::leasemodel::{Lease, LeaseStatus};

const LEASE_COLUMNS: &[&str] = &[
    "id",
    "property_id",
    "tenant_id",
    "start_date",
    "end_date",
    "status",
];

#[async_trait]
pub trait LeaseExt {
    /// The referenced property and tenant must already exist; the schema's
    /// foreign keys reject a dangling reference as a storage error. The menu
    /// layer checks existence first for a friendlier message.
    async fn create_lease(&self, data: CreateLeaseDto) -> Result<Lease, Error>;

    async fn get_lease_by_id(&self, lease_id: i64) -> Result<Option<Lease>, Error>;

    async fn get_all_leases(&self) -> Result<Vec<Lease>, Error>;

    async fn get_leases_for_property(&self, property_id: i64) -> Result<Vec<Lease>, Error>;

    async fn get_leases_for_tenant(&self, tenant_id: i64) -> Result<Vec<Lease>, Error>;

    async fn find_leases_by_attribute(
        &self,
        attrs: &[(&str, AttrValue)],
    ) -> Result<Vec<Lease>, Error>;

    async fn update_lease(&self, lease: &Lease) -> Result<Lease, Error>;

    /// Transitions the lease to `ended` with the given end date, subject to
    /// the ordering invariant. The row is untouched on failure.
    async fn end_lease(&self, lease_id: i64, end_date: NaiveDate) -> Result<Lease, Error>;

    /// Removes the lease and its payments in one transaction.
    async fn delete_lease(&self, lease_id: i64) -> Result<(), Error>;
}

#[async_trait]
impl LeaseExt for DBClient {
    async fn create_lease(&self, data: CreateLeaseDto) -> Result<Lease, Error> {
        data.validate()?;

        let now = Utc::now();
        let lease = sqlx::query_as::<_, Lease>(
            r#"
            INSERT INTO leases (property_id, tenant_id, start_date, end_date, status, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(data.property_id)
        .bind(data.tenant_id)
        .bind(data.start_date)
        .bind(data.end_date)
        .bind(data.status.unwrap_or(LeaseStatus::Active))
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(lease)
    }

    async fn get_lease_by_id(&self, lease_id: i64) -> Result<Option<Lease>, Error> {
        let lease = sqlx::query_as::<_, Lease>("SELECT * FROM leases WHERE id = ?")
            .bind(lease_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(lease)
    }

    async fn get_all_leases(&self) -> Result<Vec<Lease>, Error> {
        let leases = sqlx::query_as::<_, Lease>("SELECT * FROM leases ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(leases)
    }

    async fn get_leases_for_property(&self, property_id: i64) -> Result<Vec<Lease>, Error> {
        let leases =
            sqlx::query_as::<_, Lease>("SELECT * FROM leases WHERE property_id = ? ORDER BY id")
                .bind(property_id)
                .fetch_all(&self.pool)
                .await?;

        Ok(leases)
    }

    async fn get_leases_for_tenant(&self, tenant_id: i64) -> Result<Vec<Lease>, Error> {
        let leases =
            sqlx::query_as::<_, Lease>("SELECT * FROM leases WHERE tenant_id = ? ORDER BY id")
                .bind(tenant_id)
                .fetch_all(&self.pool)
                .await?;

        Ok(leases)
    }

    async fn find_leases_by_attribute(
        &self,
        attrs: &[(&str, AttrValue)],
    ) -> Result<Vec<Lease>, Error> {
        find_by_attribute(&self.pool, "leases", LEASE_COLUMNS, attrs).await
    }

    async fn update_lease(&self, lease: &Lease) -> Result<Lease, Error> {
        let lease = sqlx::query_as::<_, Lease>(
            r#"
            UPDATE leases
            SET property_id = ?, tenant_id = ?, start_date = ?, end_date = ?, status = ?, updated_at = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(lease.property_id())
        .bind(lease.tenant_id())
        .bind(lease.start_date())
        .bind(lease.end_date())
        .bind(lease.status())
        .bind(Utc::now())
        .bind(lease.id())
        .fetch_one(&self.pool)
        .await?;

        Ok(lease)
    }

    async fn end_lease(&self, lease_id: i64, end_date: NaiveDate) -> Result<Lease, Error> {
        let mut lease = self
            .get_lease_by_id(lease_id)
            .await?
            .ok_or(Error::Storage(sqlx::Error::RowNotFound))?;

        // all invariant checks happen in memory before anything is written
        lease.end(end_date)?;

        let lease = sqlx::query_as::<_, Lease>(
            r#"
            UPDATE leases
            SET end_date = ?, status = ?, updated_at = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(lease.end_date())
        .bind(lease.status())
        .bind(Utc::now())
        .bind(lease.id())
        .fetch_one(&self.pool)
        .await?;

        Ok(lease)
    }

    async fn delete_lease(&self, lease_id: i64) -> Result<(), Error> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM payments WHERE lease_id = ?")
            .bind(lease_id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM leases WHERE id = ?")
            .bind(lease_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(
            lease_id,
            rows = result.rows_affected(),
            "deleted lease with payments"
        );
        Ok(())
    }
}
