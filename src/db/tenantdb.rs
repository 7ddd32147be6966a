use async_trait::async_trait;
use chrono::Utc;
use validator::Validate;

use crate::db::{find_by_attribute, AttrValue, DBClient};
use crate::dtos::tenantdtos::CreateTenantDto;
use crate::error::{map_unique_violation, Error, ErrorMessage};
use crate::models::tenantmodel::Tenant;

const TENANT_COLUMNS: &[&str] = &["id", "name", "contact_info"];

#[async_trait]
pub trait TenantExt {
    async fn create_tenant(&self, data: CreateTenantDto) -> Result<Tenant, Error>;

    async fn get_tenant_by_id(&self, tenant_id: i64) -> Result<Option<Tenant>, Error>;

    async fn get_all_tenants(&self) -> Result<Vec<Tenant>, Error>;

    async fn find_tenants_by_attribute(
        &self,
        attrs: &[(&str, AttrValue)],
    ) -> Result<Vec<Tenant>, Error>;

    async fn update_tenant(&self, tenant: &Tenant) -> Result<Tenant, Error>;

    /// Removes the tenant, their leases, and the payments under those leases
    /// in one transaction.
    async fn delete_tenant(&self, tenant_id: i64) -> Result<(), Error>;
}

#[async_trait]
impl TenantExt for DBClient {
    async fn create_tenant(&self, data: CreateTenantDto) -> Result<Tenant, Error> {
        data.validate()?;

        let now = Utc::now();
        let tenant = sqlx::query_as::<_, Tenant>(
            r#"
            INSERT INTO tenants (name, contact_info, created_at, updated_at)
            VALUES (?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(data.name.trim())
        .bind(data.contact_info.trim())
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, ErrorMessage::DuplicateContactInfo))?;

        Ok(tenant)
    }

    async fn get_tenant_by_id(&self, tenant_id: i64) -> Result<Option<Tenant>, Error> {
        let tenant = sqlx::query_as::<_, Tenant>("SELECT * FROM tenants WHERE id = ?")
            .bind(tenant_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(tenant)
    }

    async fn get_all_tenants(&self) -> Result<Vec<Tenant>, Error> {
        let tenants = sqlx::query_as::<_, Tenant>("SELECT * FROM tenants ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(tenants)
    }

    async fn find_tenants_by_attribute(
        &self,
        attrs: &[(&str, AttrValue)],
    ) -> Result<Vec<Tenant>, Error> {
        find_by_attribute(&self.pool, "tenants", TENANT_COLUMNS, attrs).await
    }

    async fn update_tenant(&self, tenant: &Tenant) -> Result<Tenant, Error> {
        let tenant = sqlx::query_as::<_, Tenant>(
            r#"
            UPDATE tenants
            SET name = ?, contact_info = ?, updated_at = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(tenant.name())
        .bind(tenant.contact_info())
        .bind(Utc::now())
        .bind(tenant.id())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, ErrorMessage::DuplicateContactInfo))?;

        Ok(tenant)
    }

    async fn delete_tenant(&self, tenant_id: i64) -> Result<(), Error> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "DELETE FROM payments WHERE lease_id IN (SELECT id FROM leases WHERE tenant_id = ?)",
        )
        .bind(tenant_id)
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM leases WHERE tenant_id = ?")
            .bind(tenant_id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM tenants WHERE id = ?")
            .bind(tenant_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(
            tenant_id,
            rows = result.rows_affected(),
            "deleted tenant with dependents"
        );
        Ok(())
    }
}
