use async_trait::async_trait;
use chrono::Utc;
use validator::Validate;

use crate::db::{find_by_attribute, AttrValue, DBClient};
use crate::dtos::paymentdtos::CreatePaymentDto;
use crate::error::Error;
use crate::models::paymentmodel::Payment;
use crate::utils::decimal;

const PAYMENT_COLUMNS: &[&str] = &["id", "lease_id", "amount", "date_paid", "method"];

#[async_trait]
pub trait PaymentExt {
    /// The referenced lease must exist; dangling lease ids are rejected by
    /// the schema's foreign key as a storage error.
    async fn create_payment(&self, data: CreatePaymentDto) -> Result<Payment, Error>;

    async fn get_payment_by_id(&self, payment_id: i64) -> Result<Option<Payment>, Error>;

    async fn get_all_payments(&self) -> Result<Vec<Payment>, Error>;

    async fn get_payments_for_lease(&self, lease_id: i64) -> Result<Vec<Payment>, Error>;

    async fn find_payments_by_attribute(
        &self,
        attrs: &[(&str, AttrValue)],
    ) -> Result<Vec<Payment>, Error>;

    async fn update_payment(&self, payment: &Payment) -> Result<Payment, Error>;

    async fn delete_payment(&self, payment_id: i64) -> Result<(), Error>;
}

#[async_trait]
impl PaymentExt for DBClient {
    async fn create_payment(&self, data: CreatePaymentDto) -> Result<Payment, Error> {
        data.validate()?;

        let amount = decimal::to_storage_scale(&data.amount);
        let method = data.method.as_deref().map(str::trim);
        let now = Utc::now();

        let payment = sqlx::query_as::<_, Payment>(
            r#"
            INSERT INTO payments (lease_id, amount, date_paid, method, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(data.lease_id)
        .bind(amount.to_string())
        .bind(data.date_paid)
        .bind(method)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(payment)
    }

    async fn get_payment_by_id(&self, payment_id: i64) -> Result<Option<Payment>, Error> {
        let payment = sqlx::query_as::<_, Payment>("SELECT * FROM payments WHERE id = ?")
            .bind(payment_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(payment)
    }

    async fn get_all_payments(&self) -> Result<Vec<Payment>, Error> {
        let payments = sqlx::query_as::<_, Payment>("SELECT * FROM payments ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(payments)
    }

    async fn get_payments_for_lease(&self, lease_id: i64) -> Result<Vec<Payment>, Error> {
        let payments =
            sqlx::query_as::<_, Payment>("SELECT * FROM payments WHERE lease_id = ? ORDER BY id")
                .bind(lease_id)
                .fetch_all(&self.pool)
                .await?;

        Ok(payments)
    }

    async fn find_payments_by_attribute(
        &self,
        attrs: &[(&str, AttrValue)],
    ) -> Result<Vec<Payment>, Error> {
        find_by_attribute(&self.pool, "payments", PAYMENT_COLUMNS, attrs).await
    }

    async fn update_payment(&self, payment: &Payment) -> Result<Payment, Error> {
        let payment = sqlx::query_as::<_, Payment>(
            r#"
            UPDATE payments
            SET lease_id = ?, amount = ?, date_paid = ?, method = ?, updated_at = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(payment.lease_id())
        .bind(payment.amount().to_string())
        .bind(payment.date_paid())
        .bind(payment.method())
        .bind(Utc::now())
        .bind(payment.id())
        .fetch_one(&self.pool)
        .await?;

        Ok(payment)
    }

    async fn delete_payment(&self, payment_id: i64) -> Result<(), Error> {
        let result = sqlx::query("DELETE FROM payments WHERE id = ?")
            .bind(payment_id)
            .execute(&self.pool)
            .await?;

        tracing::debug!(payment_id, rows = result.rows_affected(), "deleted payment");
        Ok(())
    }
}
