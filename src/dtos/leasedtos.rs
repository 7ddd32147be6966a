use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::dtos::field_error;
use crate::error::ErrorMessage;
use crate::models::leasemodel::LeaseStatus;

#[derive(Debug, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_lease_dates"))]
pub struct CreateLeaseDto {
    pub property_id: i64,
    pub tenant_id: i64,
    pub start_date: NaiveDate,

    /// Must fall strictly after `start_date` when supplied.
    pub end_date: Option<NaiveDate>,

    /// Defaults to `active` when omitted.
    pub status: Option<LeaseStatus>,
}

fn validate_lease_dates(dto: &CreateLeaseDto) -> Result<(), ValidationError> {
    if let Some(end) = dto.end_date {
        if end <= dto.start_date {
            return Err(field_error("end_date", ErrorMessage::EndDateNotAfterStart));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(end_date: Option<NaiveDate>) -> CreateLeaseDto {
        CreateLeaseDto {
            property_id: 1,
            tenant_id: 1,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date,
            status: None,
        }
    }

    #[test]
    fn end_date_before_start_is_rejected() {
        assert!(dto(NaiveDate::from_ymd_opt(2023, 12, 31)).validate().is_err());
        assert!(dto(NaiveDate::from_ymd_opt(2024, 1, 1)).validate().is_err());
    }

    #[test]
    fn open_ended_and_ordered_leases_pass() {
        assert!(dto(None).validate().is_ok());
        assert!(dto(NaiveDate::from_ymd_opt(2024, 12, 31)).validate().is_ok());
    }
}
