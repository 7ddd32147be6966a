use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::dtos::field_error;
use crate::error::ErrorMessage;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateTenantDto {
    #[validate(custom = "validate_name")]
    pub name: String,

    #[validate(custom = "validate_contact_info")]
    pub contact_info: String,
}

fn validate_name(value: &str) -> Result<(), ValidationError> {
    if value.trim().chars().count() < 2 {
        return Err(field_error("name", ErrorMessage::NameTooShort));
    }
    Ok(())
}

fn validate_contact_info(value: &str) -> Result<(), ValidationError> {
    if value.trim().chars().count() < 7 {
        return Err(field_error("contact_info", ErrorMessage::ContactInfoTooShort));
    }
    Ok(())
}
