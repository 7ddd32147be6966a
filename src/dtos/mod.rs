pub mod leasedtos;
pub mod paymentdtos;
pub mod propertydtos;
pub mod tenantdtos;

use std::borrow::Cow;

use validator::ValidationError;

use crate::error::ErrorMessage;

/// Builds a field error carrying one of the canonical validation messages.
pub(crate) fn field_error(code: &'static str, message: ErrorMessage) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message.to_str()));
    error
}
