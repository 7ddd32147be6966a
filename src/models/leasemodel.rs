use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{sqlite::SqliteRow, FromRow, Row};

use crate::error::{Error, ErrorMessage};
use crate::utils::validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LeaseStatus {
    Active,
    Ended,
}

impl LeaseStatus {
    pub fn to_str(&self) -> &'static str {
        match self {
            LeaseStatus::Active => "active",
            LeaseStatus::Ended => "ended",
        }
    }
}

impl fmt::Display for LeaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for LeaseStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "active" => Ok(LeaseStatus::Active),
            "ended" => Ok(LeaseStatus::Ended),
            other => Err(Error::Validation(format!(
                "status must be 'active' or 'ended', got '{}'",
                other
            ))),
        }
    }
}

/// Ties a [`Property`](crate::models::propertymodel::Property) to a
/// [`Tenant`](crate::models::tenantmodel::Tenant) for a period of time.
/// The ordering invariant (end strictly after start) is re-checked on every
/// assignment, not only at creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lease {
    id: i64,
    property_id: i64,
    tenant_id: i64,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    status: LeaseStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Lease {
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn property_id(&self) -> i64 {
        self.property_id
    }

    pub fn tenant_id(&self) -> i64 {
        self.tenant_id
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    pub fn status(&self) -> LeaseStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn set_start_date(&mut self, value: NaiveDate) {
        self.start_date = value;
    }

    pub fn set_end_date(&mut self, value: Option<NaiveDate>) -> Result<(), Error> {
        if let Some(end) = value {
            validate::end_after_start(self.start_date, end)?;
        }
        self.end_date = value;
        Ok(())
    }

    pub fn set_status(&mut self, value: LeaseStatus) {
        self.status = value;
    }

    /// Transitions `active -> ended`, recording the end date. Fails when the
    /// lease has already ended or the date violates the ordering invariant;
    /// on failure nothing changes.
    pub fn end(&mut self, end_date: NaiveDate) -> Result<(), Error> {
        if self.status == LeaseStatus::Ended {
            return Err(Error::validation(ErrorMessage::LeaseAlreadyEnded));
        }
        validate::end_after_start(self.start_date, end_date)?;
        self.end_date = Some(end_date);
        self.status = LeaseStatus::Ended;
        Ok(())
    }
}

impl FromRow<'_, SqliteRow> for Lease {
    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Lease {
            id: row.try_get("id")?,
            property_id: row.try_get("property_id")?,
            tenant_id: row.try_get("tenant_id")?,
            start_date: row.try_get("start_date")?,
            end_date: row.try_get("end_date")?,
            status: row.try_get("status")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

impl fmt::Display for Lease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Lease id={} property_id={} tenant_id={} start={} end={} status='{}'>",
            self.id,
            self.property_id,
            self.tenant_id,
            self.start_date,
            match &self.end_date {
                Some(d) => d.to_string(),
                None => "none".to_string(),
            },
            self.status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Lease {
        Lease {
            id: 3,
            property_id: 1,
            tenant_id: 2,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: None,
            status: LeaseStatus::Active,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn end_date_must_follow_start_date() {
        let mut lease = sample();
        let before = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        assert!(lease.set_end_date(Some(before)).is_err());
        assert!(lease.set_end_date(Some(lease.start_date())).is_err());
        assert_eq!(lease.end_date(), None);

        let after = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        lease.set_end_date(Some(after)).unwrap();
        assert_eq!(lease.end_date(), Some(after));
    }

    #[test]
    fn end_transitions_status_once() {
        let mut lease = sample();
        let end = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        lease.end(end).unwrap();
        assert_eq!(lease.status(), LeaseStatus::Ended);
        assert_eq!(lease.end_date(), Some(end));

        let err = lease.end(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());
        assert!(err.is_err());
    }

    #[test]
    fn end_with_bad_date_leaves_lease_untouched() {
        let mut lease = sample();
        assert!(lease
            .end(NaiveDate::from_ymd_opt(2023, 12, 31).unwrap())
            .is_err());
        assert_eq!(lease.status(), LeaseStatus::Active);
        assert_eq!(lease.end_date(), None);
    }

    #[test]
    fn status_parses_from_text() {
        assert_eq!(LeaseStatus::from_str(" active ").unwrap(), LeaseStatus::Active);
        assert_eq!(LeaseStatus::from_str("ended").unwrap(), LeaseStatus::Ended);
        assert!(LeaseStatus::from_str("paused").is_err());
    }
}
