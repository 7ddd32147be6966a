use std::str::FromStr;

use bigdecimal::{rounding::RoundingMode, BigDecimal};

use crate::error::{Error, ErrorMessage};

/// Payments are stored with two decimal places of precision.
const STORAGE_SCALE: i64 = 2;

/// Parses caller-supplied text into an exact decimal, e.g. "15000" or "15000.50".
pub fn parse_amount(raw: &str) -> Result<BigDecimal, Error> {
    BigDecimal::from_str(raw.trim())
        .map_err(|_| Error::validation(ErrorMessage::AmountNotDecimal))
}

/// Normalizes a decimal to the storage precision (half-up).
pub fn to_storage_scale(value: &BigDecimal) -> BigDecimal {
    value.with_scale_round(STORAGE_SCALE, RoundingMode::HalfUp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_amount_accepts_integers_and_decimals() {
        assert_eq!(parse_amount("15000").unwrap(), BigDecimal::from(15000));
        assert_eq!(
            parse_amount(" 15000.50 ").unwrap(),
            BigDecimal::from_str("15000.50").unwrap()
        );
        assert!(parse_amount("fifteen").is_err());
    }

    #[test]
    fn storage_scale_is_two_places() {
        let value = BigDecimal::from_str("99.999").unwrap();
        assert_eq!(to_storage_scale(&value).to_string(), "100.00");
    }
}
