//! Conversion & ROI Engine
//!
//! Stateless arithmetic that normalizes prices and quantities to xi and derives
//! profit and return on investment. The engine is total over `f64`: it never
//! rejects input, so NaN, infinities and negative values flow through the
//! arithmetic untouched. Callers validate first (see [`crate::validation`]).

mod engine;
mod format;
mod table;

pub use engine::ConversionResult;
pub use format::format_number;
pub use table::ConversionTable;

use crate::units::{GoldUnit, QuantityUnit};
use crate::values::{Holding, PricePoint};

/// Xi per troy ounce
pub const OUNCE_TO_XI: f64 = 8.23;

/// Xi per domlang
///
/// Revisions of the calculator disagree on this factor: some use 10, others 4.
/// 10 is the default because the reference scenarios are computed with it; the
/// product owner has not confirmed either value. Override it through
/// [`ConversionTable::with_domlang_to_xi`] rather than editing this constant.
pub const DOMLANG_TO_XI: f64 = 10.0;

/// Convert a price per `unit` into a price per xi, using the default table
pub fn normalize_price_to_xi(amount: f64, unit: GoldUnit) -> f64 {
    ConversionTable::STANDARD.price_to_xi(amount, unit)
}

/// Convert a quantity counted in `unit` into a quantity of xi, using the default table
pub fn normalize_quantity_to_xi(amount: f64, unit: QuantityUnit) -> f64 {
    ConversionTable::STANDARD.quantity_to_xi(amount, unit)
}

/// Profit and ROI of a holding bought at `buy_price` and now worth `current_price`
pub fn calculate_profit_and_roi(
    buy_price: f64,
    buy_unit: GoldUnit,
    current_price: f64,
    current_unit: GoldUnit,
    quantity: f64,
    quantity_unit: QuantityUnit,
) -> ConversionResult {
    ConversionTable::STANDARD.calculate(
        PricePoint::new(buy_price, buy_unit),
        PricePoint::new(current_price, current_unit),
        Holding::new(quantity, quantity_unit),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_xi_price_is_identity() {
        for p in [0.0, 1.5, 100.0, -3.0, 1e12] {
            assert_eq!(normalize_price_to_xi(p, GoldUnit::Xi), p);
        }
    }

    #[test]
    fn test_domlang_price_divides_by_factor() {
        assert_eq!(normalize_price_to_xi(2000.0, GoldUnit::Domlang), 200.0);
    }

    #[test]
    fn test_ounce_price_divides_by_factor() {
        // 1 ounce at 1646 means 200 per xi
        assert_relative_eq!(
            normalize_price_to_xi(1646.0, GoldUnit::Ounce),
            200.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_quantity_scales_up() {
        assert_eq!(normalize_quantity_to_xi(5.0, QuantityUnit::Xi), 5.0);
        assert_eq!(normalize_quantity_to_xi(2.0, QuantityUnit::Domlang), 20.0);
    }

    #[test]
    fn test_same_units_scenario() {
        let result =
            calculate_profit_and_roi(100.0, GoldUnit::Xi, 110.0, GoldUnit::Xi, 5.0, QuantityUnit::Xi);

        assert_eq!(result.buy_xi, 100.0);
        assert_eq!(result.current_xi, 110.0);
        assert_eq!(result.quantity_xi, 5.0);
        assert_eq!(result.profit_per_xi, 10.0);
        assert_eq!(result.roi_percentage, 10.0);
        assert_eq!(result.total_buy_value, 500.0);
        assert_eq!(result.total_current_value, 550.0);
        assert_eq!(result.total_profit, 50.0);
    }

    #[test]
    fn test_cross_unit_scenario() {
        // 2000 per domlang = 200 per xi, 2 domlang = 20 xi
        let result = calculate_profit_and_roi(
            2000.0,
            GoldUnit::Domlang,
            2200.0,
            GoldUnit::Domlang,
            2.0,
            QuantityUnit::Domlang,
        );

        assert_eq!(result.buy_xi, 200.0);
        assert_eq!(result.current_xi, 220.0);
        assert_eq!(result.quantity_xi, 20.0);
        assert_eq!(result.profit_per_xi, 20.0);
        assert_eq!(result.roi_percentage, 10.0);
        assert_eq!(result.total_buy_value, 4000.0);
        assert_eq!(result.total_current_value, 4400.0);
        assert_eq!(result.total_profit, 400.0);
    }

    #[test]
    fn test_zero_buy_price_yields_zero_roi() {
        let result =
            calculate_profit_and_roi(0.0, GoldUnit::Xi, 100.0, GoldUnit::Xi, 5.0, QuantityUnit::Xi);

        assert_eq!(result.roi_percentage, 0.0);
        assert_eq!(result.profit_per_xi, 100.0);
        assert_eq!(result.total_profit, 500.0);
    }
}
