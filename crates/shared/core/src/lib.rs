//! Meas Core Domain
//!
//! Pure domain types for the Meas gold calculator.
//! This crate contains no async, no I/O, and is 100% unit testable.
//!
//! ## Units
//!
//! ```text
//! 1 ounce   = 8.23 xi
//! 1 domlang = DOMLANG_TO_XI xi   (10 by default, see ConversionTable)
//! ```
//!
//! Every price and quantity is normalized to xi before any arithmetic happens.

pub mod conversion;
pub mod error;
pub mod market;
pub mod outcome;
pub mod units;
pub mod validation;
pub mod values;

// Re-export commonly used types at crate root
pub use conversion::{
    ConversionResult, ConversionTable, DOMLANG_TO_XI, OUNCE_TO_XI, calculate_profit_and_roi,
    format_number, normalize_price_to_xi, normalize_quantity_to_xi,
};
pub use error::{AmountError, UnitError};
pub use market::is_market_open;
pub use outcome::{PnlState, PriceTrend};
pub use units::{GoldUnit, QuantityUnit};
pub use validation::{
    is_valid_price, is_valid_quantity, parse_amount, validate_price, validate_quantity,
};
pub use values::{Holding, PricePoint, PriceQuote, Timestamp};
