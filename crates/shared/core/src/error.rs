//! Domain errors for unit parsing and amount validation

use thiserror::Error;

/// Errors raised when text or a wider unit cannot become a unit value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnitError {
    #[error("Unknown gold unit: {0}")]
    Unknown(String),

    #[error("Ounce is not a valid holding unit")]
    OunceHolding,
}

/// Errors raised by the input validation layer (never by the engine)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AmountError {
    #[error("Amount is empty")]
    Empty,

    #[error("Amount is not a number: {0}")]
    Malformed(String),

    #[error("Amount is not finite")]
    NonFinite,

    #[error("Amount must be greater than zero, got {0}")]
    NotPositive(f64),
}
