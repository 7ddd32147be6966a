use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::dtos::field_error;
use crate::error::ErrorMessage;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreatePropertyDto {
    #[validate(custom = "validate_address")]
    pub address: String,

    #[validate(range(min = 1, message = "monthly_rent must be a positive integer"))]
    pub monthly_rent: i64,

    /// Defaults to `true` when omitted.
    pub is_available: Option<bool>,

    /// Defaults to `"apartment"` when omitted.
    #[validate(custom = "validate_property_type")]
    pub property_type: Option<String>,
}

fn validate_address(value: &str) -> Result<(), ValidationError> {
    if value.trim().chars().count() < 5 {
        return Err(field_error("address", ErrorMessage::AddressTooShort));
    }
    Ok(())
}

fn validate_property_type(value: &str) -> Result<(), ValidationError> {
    if value.trim().chars().count() < 3 {
        return Err(field_error(
            "property_type",
            ErrorMessage::PropertyTypeTooShort,
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_address_is_rejected() {
        let dto = CreatePropertyDto {
            address: "abc".to_string(),
            monthly_rent: 15000,
            is_available: None,
            property_type: None,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn padding_does_not_satisfy_the_minimum() {
        let dto = CreatePropertyDto {
            address: "  ab   ".to_string(),
            monthly_rent: 15000,
            is_available: None,
            property_type: None,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn valid_dto_passes() {
        let dto = CreatePropertyDto {
            address: "123 Main Street".to_string(),
            monthly_rent: 15000,
            is_available: Some(false),
            property_type: Some("duplex".to_string()),
        };
        assert!(dto.validate().is_ok());
    }
}
