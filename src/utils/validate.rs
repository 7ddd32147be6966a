use bigdecimal::{BigDecimal, Zero};
use chrono::NaiveDate;

use crate::error::{Error, ErrorMessage};

/// Trims the value and rejects it when the trimmed form is shorter than `min`.
/// Returns the canonical (trimmed) form that gets stored.
pub fn trimmed_min(value: &str, min: usize, message: ErrorMessage) -> Result<String, Error> {
    let trimmed = value.trim();
    if trimmed.chars().count() < min {
        return Err(Error::validation(message));
    }
    Ok(trimmed.to_owned())
}

/// Same as [`trimmed_min`] for optional fields; `None` passes through.
pub fn optional_trimmed_min(
    value: Option<&str>,
    min: usize,
    message: ErrorMessage,
) -> Result<Option<String>, Error> {
    value.map(|v| trimmed_min(v, min, message)).transpose()
}

pub fn positive_int(value: i64, message: ErrorMessage) -> Result<i64, Error> {
    if value <= 0 {
        return Err(Error::validation(message));
    }
    Ok(value)
}

/// Rejects non-positive amounts and normalizes to the storage precision.
pub fn positive_amount(value: &BigDecimal) -> Result<BigDecimal, Error> {
    if value <= &BigDecimal::zero() {
        return Err(Error::validation(ErrorMessage::AmountNotPositive));
    }
    Ok(crate::utils::decimal::to_storage_scale(value))
}

/// Lease ordering invariant: an end date must fall strictly after the start.
pub fn end_after_start(start_date: NaiveDate, end_date: NaiveDate) -> Result<(), Error> {
    if end_date <= start_date {
        return Err(Error::validation(ErrorMessage::EndDateNotAfterStart));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn trimmed_min_normalizes() {
        let value = trimmed_min("  123 Main Street  ", 5, ErrorMessage::AddressTooShort).unwrap();
        assert_eq!(value, "123 Main Street");
    }

    #[test]
    fn trimmed_min_rejects_whitespace_padding() {
        let err = trimmed_min("  ab  ", 5, ErrorMessage::AddressTooShort).unwrap_err();
        assert_eq!(err.to_string(), ErrorMessage::AddressTooShort.to_str());
    }

    #[test]
    fn end_date_must_be_strictly_after_start() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(end_after_start(start, start).is_err());
        assert!(end_after_start(start, NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()).is_err());
        assert!(end_after_start(start, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()).is_ok());
    }

    #[test]
    fn amount_must_be_positive() {
        assert!(positive_amount(&BigDecimal::from_str("0").unwrap()).is_err());
        assert!(positive_amount(&BigDecimal::from_str("-50").unwrap()).is_err());
        let normalized = positive_amount(&BigDecimal::from_str("15000").unwrap()).unwrap();
        assert_eq!(normalized.to_string(), "15000.00");
    }
}
