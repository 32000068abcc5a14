//! Market-hours aware price cache
//!
//! While the market trades, a cached quote is served until it is older than
//! the freshness window. While the market is closed the price cannot move, so
//! any cached quote is served, even when a refresh is forced.

use async_trait::async_trait;
use chrono::Duration;
use meas_core::{PriceQuote, Timestamp, is_market_open};
use meas_ports::{Clock, FetchResult, KeyValueStore, PriceSource};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Store key holding the serialized [`CachedQuote`]
pub const CACHE_KEY: &str = "gold_price_cache";

/// Freshness rules for the cache
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachePolicy {
    /// How long a quote stays fresh while the market is open
    pub open_ttl: Duration,
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self {
            open_ttl: Duration::hours(1),
        }
    }
}

/// A quote plus the moment it was fetched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedQuote {
    pub quote: PriceQuote,
    pub fetched_at: Timestamp,
}

impl CachedQuote {
    pub fn age(&self, now: Timestamp) -> Duration {
        now - self.fetched_at
    }
}

/// Caching decorator over any [`PriceSource`]
pub struct CachedPriceFeed {
    source: Arc<dyn PriceSource>,
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    policy: CachePolicy,
    /// Serializes refreshes so concurrent callers share one fetch
    refresh: Mutex<()>,
}

impl CachedPriceFeed {
    pub fn new(
        source: Arc<dyn PriceSource>,
        store: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            source,
            store,
            clock,
            policy: CachePolicy::default(),
            refresh: Mutex::new(()),
        }
    }

    pub fn with_policy(mut self, policy: CachePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> CachePolicy {
        self.policy
    }

    pub fn market_open(&self) -> bool {
        is_market_open(self.clock.now())
    }

    /// The stored quote, if one is present and readable
    pub fn cached(&self) -> Option<CachedQuote> {
        let raw = match self.store.get(CACHE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                log::warn!("Price cache unreadable: {}", e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::warn!("Discarding malformed price cache: {}", e);
                None
            }
        }
    }

    /// Latest quote, from the cache when the policy allows it
    pub async fn latest(&self, force_refresh: bool) -> FetchResult<PriceQuote> {
        let requested_at = self.clock.now();
        if let Some(entry) = self.cached() {
            if self.is_servable(&entry, requested_at, force_refresh) {
                log::debug!("Serving cached price from {}", entry.fetched_at);
                return Ok(entry.quote);
            }
        }

        let _guard = self.refresh.lock().await;

        // Another caller may have refreshed while this one waited
        if let Some(entry) = self.cached() {
            if entry.fetched_at > requested_at
                || self.is_servable(&entry, self.clock.now(), force_refresh)
            {
                return Ok(entry.quote);
            }
        }

        let quote = self.source.latest_price().await?;
        let entry = CachedQuote {
            quote: quote.clone(),
            fetched_at: self.clock.now(),
        };
        log::info!(
            "Fetched gold price {:.2} per {} from {}",
            quote.price,
            quote.unit,
            self.source.name()
        );
        self.write(&entry);

        Ok(quote)
    }

    fn is_servable(&self, entry: &CachedQuote, now: Timestamp, force_refresh: bool) -> bool {
        if !is_market_open(now) {
            return true;
        }
        !force_refresh && entry.age(now) < self.policy.open_ttl
    }

    fn write(&self, entry: &CachedQuote) {
        let result = serde_json::to_string(entry)
            .map_err(|e| e.to_string())
            .and_then(|json| self.store.set(CACHE_KEY, &json).map_err(|e| e.to_string()));

        if let Err(e) = result {
            log::warn!("Failed to store price cache: {}", e);
        }
    }
}

#[async_trait]
impl PriceSource for CachedPriceFeed {
    async fn latest_price(&self) -> FetchResult<PriceQuote> {
        self.latest(false).await
    }

    fn name(&self) -> &str {
        "cached"
    }
}
