use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::units::{GoldUnit, QuantityUnit};

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;

/// A price quoted per one unit of gold
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub amount: f64,
    pub unit: GoldUnit,
}

impl PricePoint {
    pub fn new(amount: f64, unit: GoldUnit) -> Self {
        Self { amount, unit }
    }

    pub fn per_xi(amount: f64) -> Self {
        Self::new(amount, GoldUnit::Xi)
    }
}

/// A quantity of gold held
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub amount: f64,
    pub unit: QuantityUnit,
}

impl Holding {
    pub fn new(amount: f64, unit: QuantityUnit) -> Self {
        Self { amount, unit }
    }

    /// A single xi, used when only per-unit figures are wanted
    pub fn one_xi() -> Self {
        Self::new(1.0, QuantityUnit::Xi)
    }
}

/// Market price as delivered by a price source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Price per `unit`
    pub price: f64,
    pub unit: GoldUnit,
    /// When the source last updated the price
    pub updated_at: Timestamp,
}

impl PriceQuote {
    pub fn new(price: f64, unit: GoldUnit, updated_at: Timestamp) -> Self {
        Self {
            price,
            unit,
            updated_at,
        }
    }

    pub fn as_price_point(&self) -> PricePoint {
        PricePoint::new(self.price, self.unit)
    }
}
