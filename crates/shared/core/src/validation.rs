//! Input validation
//!
//! Pre-conditions a caller applies before trusting the engine's output. The
//! engine itself stays permissive; these checks live beside it, not inside it.

use crate::error::AmountError;

/// A price is usable when it is finite and strictly positive
pub fn is_valid_price(price: f64) -> bool {
    price.is_finite() && price > 0.0
}

/// A quantity is usable when it is finite and strictly positive
pub fn is_valid_quantity(quantity: f64) -> bool {
    quantity.is_finite() && quantity > 0.0
}

/// Parse raw user text into a number
///
/// Surrounding whitespace is ignored. The number itself is not range-checked.
pub fn parse_amount(raw: &str) -> Result<f64, AmountError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AmountError::Empty);
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| AmountError::Malformed(trimmed.to_string()))
}

/// Parse and check a price entered as text
pub fn validate_price(raw: &str) -> Result<f64, AmountError> {
    check_positive(parse_amount(raw)?)
}

/// Parse and check a quantity entered as text
pub fn validate_quantity(raw: &str) -> Result<f64, AmountError> {
    check_positive(parse_amount(raw)?)
}

fn check_positive(value: f64) -> Result<f64, AmountError> {
    if !value.is_finite() {
        return Err(AmountError::NonFinite);
    }
    if value <= 0.0 {
        return Err(AmountError::NotPositive(value));
    }
    Ok(value)
}
