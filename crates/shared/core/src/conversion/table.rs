use serde::{Deserialize, Serialize};

use super::engine::ConversionResult;
use super::{DOMLANG_TO_XI, OUNCE_TO_XI};
use crate::units::{GoldUnit, QuantityUnit};
use crate::values::{Holding, PricePoint};

/// Conversion factors between the supported units and xi
///
/// Holds no state beyond the two factors; every method is a pure function of
/// its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionTable {
    /// Xi per troy ounce
    pub ounce_to_xi: f64,
    /// Xi per domlang
    pub domlang_to_xi: f64,
}

impl Default for ConversionTable {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl ConversionTable {
    pub const STANDARD: ConversionTable = ConversionTable {
        ounce_to_xi: OUNCE_TO_XI,
        domlang_to_xi: DOMLANG_TO_XI,
    };

    pub fn with_domlang_to_xi(mut self, factor: f64) -> Self {
        self.domlang_to_xi = factor;
        self
    }

    /// Xi contained in one `unit`
    pub fn xi_per(&self, unit: GoldUnit) -> f64 {
        match unit {
            GoldUnit::Xi => 1.0,
            GoldUnit::Domlang => self.domlang_to_xi,
            GoldUnit::Ounce => self.ounce_to_xi,
        }
    }

    /// Price per `unit` → price per xi
    pub fn price_to_xi(&self, amount: f64, unit: GoldUnit) -> f64 {
        match unit {
            GoldUnit::Xi => amount,
            GoldUnit::Domlang => amount / self.domlang_to_xi,
            GoldUnit::Ounce => amount / self.ounce_to_xi,
        }
    }

    /// Price per xi → price per `unit`
    pub fn price_from_xi(&self, price_xi: f64, unit: GoldUnit) -> f64 {
        match unit {
            GoldUnit::Xi => price_xi,
            _ => price_xi * self.xi_per(unit),
        }
    }

    /// Quantity in `unit` → quantity in xi
    ///
    /// Scales the opposite way to prices: a price per domlang shrinks when
    /// expressed per xi, a count of domlang grows when expressed in xi.
    pub fn quantity_to_xi(&self, amount: f64, unit: QuantityUnit) -> f64 {
        match unit {
            QuantityUnit::Xi => amount,
            QuantityUnit::Domlang => amount * self.domlang_to_xi,
        }
    }

    /// Quantity in xi → quantity in `unit`
    pub fn quantity_from_xi(&self, quantity_xi: f64, unit: QuantityUnit) -> f64 {
        match unit {
            QuantityUnit::Xi => quantity_xi,
            QuantityUnit::Domlang => quantity_xi / self.domlang_to_xi,
        }
    }

    /// Normalize both prices and the holding, then derive profit and ROI
    pub fn calculate(
        &self,
        buy: PricePoint,
        current: PricePoint,
        holding: Holding,
    ) -> ConversionResult {
        let buy_xi = self.price_to_xi(buy.amount, buy.unit);
        let current_xi = self.price_to_xi(current.amount, current.unit);
        let quantity_xi = self.quantity_to_xi(holding.amount, holding.unit);

        ConversionResult::from_normalized(buy_xi, current_xi, quantity_xi)
    }

    /// Per-unit figures only: the holding is a single xi
    pub fn calculate_per_unit(&self, buy: PricePoint, current: PricePoint) -> ConversionResult {
        self.calculate(buy, current, Holding::one_xi())
    }
}
