use std::fmt;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{sqlite::SqliteRow, FromRow, Row};

use crate::error::{Error, ErrorMessage};
use crate::utils::validate;

/// A recorded rent payment. The amount is an exact decimal kept at two
/// decimal places; SQLite stores it as TEXT and it is re-parsed on load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    id: i64,
    lease_id: i64,
    amount: BigDecimal,
    date_paid: NaiveDate,
    method: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Payment {
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn lease_id(&self) -> i64 {
        self.lease_id
    }

    pub fn amount(&self) -> &BigDecimal {
        &self.amount
    }

    pub fn date_paid(&self) -> NaiveDate {
        self.date_paid
    }

    pub fn method(&self) -> Option<&str> {
        self.method.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn set_amount(&mut self, value: &BigDecimal) -> Result<(), Error> {
        self.amount = validate::positive_amount(value)?;
        Ok(())
    }

    pub fn set_date_paid(&mut self, value: NaiveDate) {
        self.date_paid = value;
    }

    pub fn set_method(&mut self, value: Option<&str>) -> Result<(), Error> {
        self.method = validate::optional_trimmed_min(value, 3, ErrorMessage::MethodTooShort)?;
        Ok(())
    }
}

impl FromRow<'_, SqliteRow> for Payment {
    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        let amount: String = row.try_get("amount")?;
        let amount = BigDecimal::from_str(&amount).map_err(|e| sqlx::Error::ColumnDecode {
            index: "amount".to_string(),
            source: Box::new(e),
        })?;
        Ok(Payment {
            id: row.try_get("id")?,
            lease_id: row.try_get("lease_id")?,
            amount,
            date_paid: row.try_get("date_paid")?,
            method: row.try_get("method")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

impl fmt::Display for Payment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Payment id={} lease_id={} amount={} date={} method={}>",
            self.id,
            self.lease_id,
            self.amount,
            self.date_paid,
            match &self.method {
                Some(m) => format!("'{}'", m),
                None => "none".to_string(),
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Payment {
        Payment {
            id: 11,
            lease_id: 3,
            amount: BigDecimal::from_str("15000.00").unwrap(),
            date_paid: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            method: Some("mpesa".to_string()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn amount_must_stay_positive() {
        let mut payment = sample();
        assert!(payment.set_amount(&BigDecimal::from(0)).is_err());
        assert!(payment.set_amount(&BigDecimal::from(-50)).is_err());
        assert_eq!(payment.amount().to_string(), "15000.00");
    }

    #[test]
    fn amount_is_normalized_to_two_places() {
        let mut payment = sample();
        payment
            .set_amount(&BigDecimal::from_str("1200.5").unwrap())
            .unwrap();
        assert_eq!(payment.amount().to_string(), "1200.50");
    }

    #[test]
    fn method_is_optional_but_validated() {
        let mut payment = sample();
        payment.set_method(None).unwrap();
        assert_eq!(payment.method(), None);
        assert!(payment.set_method(Some("mp")).is_err());
        payment.set_method(Some(" bank ")).unwrap();
        assert_eq!(payment.method(), Some("bank"));
    }

    #[test]
    fn display_summary() {
        assert_eq!(
            sample().to_string(),
            "<Payment id=11 lease_id=3 amount=15000.00 date=2024-02-01 method='mpesa'>"
        );
    }
}
