use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{sqlite::SqliteRow, FromRow, Row};

use crate::error::{Error, ErrorMessage};
use crate::utils::validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tenant {
    id: i64,
    name: String,
    contact_info: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Tenant {
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contact_info(&self) -> &str {
        &self.contact_info
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn set_name(&mut self, value: &str) -> Result<(), Error> {
        self.name = validate::trimmed_min(value, 2, ErrorMessage::NameTooShort)?;
        Ok(())
    }

    pub fn set_contact_info(&mut self, value: &str) -> Result<(), Error> {
        self.contact_info = validate::trimmed_min(value, 7, ErrorMessage::ContactInfoTooShort)?;
        Ok(())
    }
}

impl FromRow<'_, SqliteRow> for Tenant {
    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Tenant {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            contact_info: row.try_get("contact_info")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

impl fmt::Display for Tenant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Tenant id={} name='{}' contact='{}'>",
            self.id, self.name, self.contact_info
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Tenant {
        Tenant {
            id: 7,
            name: "Jane Doe".to_string(),
            contact_info: "jane@example.com".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn name_requires_two_characters_after_trim() {
        let mut tenant = sample();
        assert!(tenant.set_name(" a ").is_err());
        assert_eq!(tenant.name(), "Jane Doe");

        tenant.set_name("  Bo  ").unwrap();
        assert_eq!(tenant.name(), "Bo");
    }

    #[test]
    fn contact_info_requires_seven_characters() {
        let mut tenant = sample();
        assert!(tenant.set_contact_info("555-12").is_err());
        assert_eq!(tenant.contact_info(), "jane@example.com");

        tenant.set_contact_info(" 0712345678 ").unwrap();
        assert_eq!(tenant.contact_info(), "0712345678");
    }

    #[test]
    fn display_summary() {
        assert_eq!(
            sample().to_string(),
            "<Tenant id=7 name='Jane Doe' contact='jane@example.com'>"
        );
    }
}
