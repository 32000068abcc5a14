//! Offline price source
//!
//! A seeded random walk standing in for the remote API when there is no
//! network, or when a deterministic price is wanted.

use async_trait::async_trait;
use meas_core::{GoldUnit, PriceQuote};
use meas_ports::{Clock, FetchResult, PriceSource};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

/// Configuration for the mock source
#[derive(Debug, Clone)]
pub struct MockPriceConfig {
    /// Starting price per `unit`
    pub initial_price: f64,
    pub unit: GoldUnit,
    /// Largest relative move per call (0.002 = 0.2%)
    pub volatility: f64,
    /// Random seed (for reproducibility)
    pub seed: Option<u64>,
}

impl Default for MockPriceConfig {
    fn default() -> Self {
        Self {
            initial_price: 2650.0,
            unit: GoldUnit::Ounce,
            volatility: 0.002,
            seed: None,
        }
    }
}

impl MockPriceConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// No movement at all: every call returns `initial_price`
    pub fn fixed(price: f64, unit: GoldUnit) -> Self {
        Self {
            initial_price: price,
            unit,
            volatility: 0.0,
            seed: Some(0),
        }
    }
}

struct WalkState {
    price: f64,
    rng: StdRng,
}

/// Random-walk price source; never fails
pub struct MockPriceSource {
    config: MockPriceConfig,
    state: Mutex<WalkState>,
    clock: Arc<dyn Clock>,
}

impl MockPriceSource {
    pub fn new(config: MockPriceConfig, clock: Arc<dyn Clock>) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let state = WalkState {
            price: config.initial_price,
            rng,
        };

        Self {
            config,
            state: Mutex::new(state),
            clock,
        }
    }

    fn step(&self) -> f64 {
        let mut state = self.state.lock();
        if self.config.volatility > 0.0 {
            let change_pct: f64 = state.rng.gen_range(-1.0..1.0);
            state.price *= 1.0 + self.config.volatility * change_pct;
        }
        state.price
    }
}

#[async_trait]
impl PriceSource for MockPriceSource {
    async fn latest_price(&self) -> FetchResult<PriceQuote> {
        let price = self.step();
        log::debug!("Mock price {:.2} per {}", price, self.config.unit);
        Ok(PriceQuote::new(price, self.config.unit, self.clock.now()))
    }

    fn name(&self) -> &str {
        "mock"
    }
}
