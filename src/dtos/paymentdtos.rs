use bigdecimal::{BigDecimal, Zero};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::dtos::field_error;
use crate::error::ErrorMessage;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreatePaymentDto {
    pub lease_id: i64,

    #[validate(custom = "validate_amount")]
    pub amount: BigDecimal,

    pub date_paid: NaiveDate,

    #[validate(custom = "validate_method")]
    pub method: Option<String>,
}

fn validate_amount(value: &BigDecimal) -> Result<(), ValidationError> {
    if value <= &BigDecimal::zero() {
        return Err(field_error("amount", ErrorMessage::AmountNotPositive));
    }
    Ok(())
}

fn validate_method(value: &str) -> Result<(), ValidationError> {
    if value.trim().chars().count() < 3 {
        return Err(field_error("method", ErrorMessage::MethodTooShort));
    }
    Ok(())
}
