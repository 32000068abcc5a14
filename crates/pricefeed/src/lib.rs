//! Meas Price Feed
//!
//! Supplies the `(price, unit)` pair that pre-fills the "current price" field.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────┐
//!   │ CachedPriceFeed  │  market-hours aware TTL cache (KeyValueStore + Clock)
//!   └────────┬─────────┘
//!            │ PriceSource
//!    ┌───────┴────────┐
//!    ▼                ▼
//! GoldApiClient   MockPriceSource
//!  (reqwest)      (seeded random walk)
//! ```

pub mod cache;
pub mod gold_api;
pub mod mock;

pub use cache::{CACHE_KEY, CachePolicy, CachedPriceFeed, CachedQuote};
pub use gold_api::{GoldApiClient, GoldApiConfig, RestError};
pub use mock::{MockPriceConfig, MockPriceSource};

pub use meas_ports::{FetchError, FetchResult, PriceSource};
