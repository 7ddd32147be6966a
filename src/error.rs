use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorMessage {
    AddressTooShort,
    RentNotPositive,
    PropertyTypeTooShort,
    NameTooShort,
    ContactInfoTooShort,
    EndDateNotAfterStart,
    AmountNotPositive,
    AmountNotDecimal,
    MethodTooShort,
    LeaseAlreadyEnded,
    DuplicateAddress,
    DuplicateContactInfo,
}

impl std::fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str())
    }
}

impl ErrorMessage {
    pub fn to_str(&self) -> &'static str {
        match self {
            ErrorMessage::AddressTooShort => {
                "address must be a non-empty string of at least 5 characters"
            }
            ErrorMessage::RentNotPositive => "monthly_rent must be a positive integer",
            ErrorMessage::PropertyTypeTooShort => "property_type must be at least 3 characters",
            ErrorMessage::NameTooShort => "name must be a string with at least 2 characters",
            ErrorMessage::ContactInfoTooShort => "contact_info must be at least 7 characters",
            ErrorMessage::EndDateNotAfterStart => "end_date must be after start_date",
            ErrorMessage::AmountNotPositive => "payment amount must be positive",
            ErrorMessage::AmountNotDecimal => "amount must be a valid decimal number",
            ErrorMessage::MethodTooShort => "method must be at least 3 characters if provided",
            ErrorMessage::LeaseAlreadyEnded => "lease is already ended",
            ErrorMessage::DuplicateAddress => "a property with this address already exists",
            ErrorMessage::DuplicateContactInfo => "a tenant with this contact_info already exists",
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    /// A field value violates its constraint. Never silently corrected.
    #[error("{0}")]
    Validation(String),

    /// Attribute search was given a column name the entity does not have.
    #[error("unknown attribute `{0}`")]
    UnknownAttribute(String),

    /// Underlying persistence failure; the caller owns recovery.
    #[error(transparent)]
    Storage(#[from] sqlx::Error),
}

impl Error {
    pub fn validation(message: ErrorMessage) -> Self {
        Error::Validation(message.to_string())
    }
}

/// Propagates the first DTO validation failure as a single descriptive message.
impl From<ValidationErrors> for Error {
    fn from(errors: ValidationErrors) -> Self {
        let message = errors
            .errors()
            .iter()
            .filter_map(|(_, kind)| match kind {
                ValidationErrorsKind::Field(errs) => errs
                    .iter()
                    .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                    .next(),
                _ => None,
            })
            .next()
            .unwrap_or_else(|| errors.to_string());
        Error::Validation(message)
    }
}

/// Uniqueness is enforced by the store; surface constraint hits as validation
/// failures with a stable message instead of a raw driver error.
pub(crate) fn map_unique_violation(err: sqlx::Error, message: ErrorMessage) -> Error {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            Error::Validation(message.to_string())
        }
        _ => Error::Storage(err),
    }
}
