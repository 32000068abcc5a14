use async_trait::async_trait;
use meas_core::PriceQuote;

use crate::error::FetchResult;

/// Port for anything that can supply the current gold price
///
/// Implementations: the remote gold price API, an offline random walk, and
/// the caching decorator that wraps either of them.
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Fetch the latest quote
    async fn latest_price(&self) -> FetchResult<PriceQuote>;

    /// Source name for logging
    fn name(&self) -> &str {
        "PriceSource"
    }
}
