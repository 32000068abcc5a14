//! Meas Ports
//!
//! Port definitions (traits) for the Meas gold calculator.
//! These define the boundaries between domain logic and infrastructure:
//! time, market prices and key-value persistence.

mod clock;
mod error;
mod price_source;
mod store;

pub use clock::Clock;
pub use error::{FetchError, FetchResult, StoreError, StoreResult};
pub use price_source::PriceSource;
pub use store::KeyValueStore;
