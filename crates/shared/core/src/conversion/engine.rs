use serde::{Deserialize, Serialize};

use crate::outcome::PnlState;

/// Output of the engine; every figure is expressed per xi or in xi
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    /// Buy price per xi
    pub buy_xi: f64,
    /// Current price per xi
    pub current_xi: f64,
    pub profit_per_xi: f64,
    /// Percentage return; 0 when the buy price is exactly 0
    pub roi_percentage: f64,
    /// Holding in xi
    pub quantity_xi: f64,
    pub total_buy_value: f64,
    pub total_current_value: f64,
    pub total_profit: f64,
}

impl ConversionResult {
    pub(crate) fn from_normalized(buy_xi: f64, current_xi: f64, quantity_xi: f64) -> Self {
        let profit_per_xi = current_xi - buy_xi;
        // Undefined ROI is reported as 0, not NaN
        let roi_percentage = if buy_xi == 0.0 {
            0.0
        } else {
            (profit_per_xi / buy_xi) * 100.0
        };
        let total_buy_value = buy_xi * quantity_xi;
        let total_current_value = current_xi * quantity_xi;

        Self {
            buy_xi,
            current_xi,
            profit_per_xi,
            roi_percentage,
            quantity_xi,
            total_buy_value,
            total_current_value,
            total_profit: total_current_value - total_buy_value,
        }
    }

    /// Whether the holding is up, down or flat overall
    pub fn pnl_state(&self) -> PnlState {
        PnlState::from_profit(self.total_profit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_break_even() {
        for (price, qty) in [(1.0, 1.0), (250.5, 3.0), (1e6, 0.25)] {
            let result = ConversionResult::from_normalized(price, price, qty);
            assert_eq!(result.profit_per_xi, 0.0);
            assert_eq!(result.roi_percentage, 0.0);
            assert_eq!(result.total_profit, 0.0);
            assert_eq!(result.pnl_state(), PnlState::Neutral);
        }
    }

    #[test]
    fn test_negative_zero_buy_price_still_guards_roi() {
        let result = ConversionResult::from_normalized(-0.0, 50.0, 1.0);
        assert_eq!(result.roi_percentage, 0.0);
    }

    #[test]
    fn test_loss_state() {
        let result = ConversionResult::from_normalized(200.0, 150.0, 2.0);
        assert_eq!(result.total_profit, -100.0);
        assert_eq!(result.roi_percentage, -25.0);
        assert_eq!(result.pnl_state(), PnlState::Loss);
    }

    #[test]
    fn test_serializes_with_camel_case_fields() {
        let result = ConversionResult::from_normalized(100.0, 110.0, 5.0);
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["buyXi"], 100.0);
        assert_eq!(json["roiPercentage"], 10.0);
        assert_eq!(json["totalProfit"], 50.0);
    }
}
