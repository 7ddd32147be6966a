use async_trait::async_trait;
use chrono::Utc;
use validator::Validate;

use crate::db::{find_by_attribute, AttrValue, DBClient};
use crate::dtos::propertydtos::CreatePropertyDto;
use crate::error::{map_unique_violation, Error, ErrorMessage};
use crate::models::propertymodel::{Property, DEFAULT_PROPERTY_TYPE};

/// Columns exposed to attribute search.
const PROPERTY_COLUMNS: &[&str] = &["id", "address", "monthly_rent", "is_available", "property_type"];

#[async_trait]
pub trait PropertyExt {
    async fn create_property(&self, data: CreatePropertyDto) -> Result<Property, Error>;

    async fn get_property_by_id(&self, property_id: i64) -> Result<Option<Property>, Error>;

    async fn get_all_properties(&self) -> Result<Vec<Property>, Error>;

    async fn find_properties_by_attribute(
        &self,
        attrs: &[(&str, AttrValue)],
    ) -> Result<Vec<Property>, Error>;

    /// Persists the current (setter-validated) field values, refreshing
    /// `updated_at`.
    async fn update_property(&self, property: &Property) -> Result<Property, Error>;

    /// Removes the property, its leases, and their payments in one
    /// transaction.
    async fn delete_property(&self, property_id: i64) -> Result<(), Error>;
}

#[async_trait]
impl PropertyExt for DBClient {
    async fn create_property(&self, data: CreatePropertyDto) -> Result<Property, Error> {
        data.validate()?;

        let property_type = match &data.property_type {
            Some(t) => t.trim().to_string(),
            None => DEFAULT_PROPERTY_TYPE.to_string(),
        };
        let now = Utc::now();

        let property = sqlx::query_as::<_, Property>(
            r#"
            INSERT INTO properties (address, monthly_rent, is_available, property_type, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(data.address.trim())
        .bind(data.monthly_rent)
        .bind(data.is_available.unwrap_or(true))
        .bind(property_type)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, ErrorMessage::DuplicateAddress))?;

        Ok(property)
    }

    async fn get_property_by_id(&self, property_id: i64) -> Result<Option<Property>, Error> {
        let property = sqlx::query_as::<_, Property>("SELECT * FROM properties WHERE id = ?")
            .bind(property_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(property)
    }

    async fn get_all_properties(&self) -> Result<Vec<Property>, Error> {
        let properties = sqlx::query_as::<_, Property>("SELECT * FROM properties ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(properties)
    }

    async fn find_properties_by_attribute(
        &self,
        attrs: &[(&str, AttrValue)],
    ) -> Result<Vec<Property>, Error> {
        find_by_attribute(&self.pool, "properties", PROPERTY_COLUMNS, attrs).await
    }

    async fn update_property(&self, property: &Property) -> Result<Property, Error> {
        let property = sqlx::query_as::<_, Property>(
            r#"
            UPDATE properties
            SET address = ?, monthly_rent = ?, is_available = ?, property_type = ?, updated_at = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(property.address())
        .bind(property.monthly_rent())
        .bind(property.is_available())
        .bind(property.property_type())
        .bind(Utc::now())
        .bind(property.id())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, ErrorMessage::DuplicateAddress))?;

        Ok(property)
    }

    async fn delete_property(&self, property_id: i64) -> Result<(), Error> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "DELETE FROM payments WHERE lease_id IN (SELECT id FROM leases WHERE property_id = ?)",
        )
        .bind(property_id)
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM leases WHERE property_id = ?")
            .bind(property_id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM properties WHERE id = ?")
            .bind(property_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(
            property_id,
            rows = result.rows_affected(),
            "deleted property with dependents"
        );
        Ok(())
    }
}
