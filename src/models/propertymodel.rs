use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{sqlite::SqliteRow, FromRow, Row};

use crate::error::{Error, ErrorMessage};
use crate::utils::validate;

/// Applied at creation when no property_type is supplied.
pub const DEFAULT_PROPERTY_TYPE: &str = "apartment";

/// A rentable unit. Fields are private: every mutation goes through a setter
/// that re-validates, so a loaded row can never drift out of its constraints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    id: i64,
    address: String,
    monthly_rent: i64,
    is_available: bool,
    property_type: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Property {
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn monthly_rent(&self) -> i64 {
        self.monthly_rent
    }

    pub fn is_available(&self) -> bool {
        self.is_available
    }

    pub fn property_type(&self) -> Option<&str> {
        self.property_type.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn set_address(&mut self, value: &str) -> Result<(), Error> {
        self.address = validate::trimmed_min(value, 5, ErrorMessage::AddressTooShort)?;
        Ok(())
    }

    pub fn set_monthly_rent(&mut self, value: i64) -> Result<(), Error> {
        self.monthly_rent = validate::positive_int(value, ErrorMessage::RentNotPositive)?;
        Ok(())
    }

    pub fn set_is_available(&mut self, value: bool) {
        self.is_available = value;
    }

    pub fn set_property_type(&mut self, value: Option<&str>) -> Result<(), Error> {
        self.property_type =
            validate::optional_trimmed_min(value, 3, ErrorMessage::PropertyTypeTooShort)?;
        Ok(())
    }
}

impl FromRow<'_, SqliteRow> for Property {
    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Property {
            id: row.try_get("id")?,
            address: row.try_get("address")?,
            monthly_rent: row.try_get("monthly_rent")?,
            is_available: row.try_get("is_available")?,
            property_type: row.try_get("property_type")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Property id={} address='{}' rent={} available={} type={}>",
            self.id,
            self.address,
            self.monthly_rent,
            self.is_available,
            match &self.property_type {
                Some(t) => format!("'{}'", t),
                None => "none".to_string(),
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Property {
        Property {
            id: 1,
            address: "123 Main Street".to_string(),
            monthly_rent: 15000,
            is_available: true,
            property_type: Some(DEFAULT_PROPERTY_TYPE.to_string()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn set_address_trims_and_validates() {
        let mut property = sample();
        property.set_address("  45 Oak Avenue  ").unwrap();
        assert_eq!(property.address(), "45 Oak Avenue");

        assert!(property.set_address("abc").is_err());
        // failed assignment retains the prior value
        assert_eq!(property.address(), "45 Oak Avenue");
    }

    #[test]
    fn set_monthly_rent_rejects_non_positive() {
        let mut property = sample();
        assert!(property.set_monthly_rent(0).is_err());
        assert!(property.set_monthly_rent(-200).is_err());
        assert_eq!(property.monthly_rent(), 15000);
    }

    #[test]
    fn property_type_is_optional_but_validated() {
        let mut property = sample();
        property.set_property_type(None).unwrap();
        assert_eq!(property.property_type(), None);

        assert!(property.set_property_type(Some("ab")).is_err());
        property.set_property_type(Some(" duplex ")).unwrap();
        assert_eq!(property.property_type(), Some("duplex"));
    }

    #[test]
    fn display_summary_includes_key_fields() {
        let rendered = sample().to_string();
        assert_eq!(
            rendered,
            "<Property id=1 address='123 Main Street' rent=15000 available=true type='apartment'>"
        );
    }
}
