use meas_core::{is_valid_price, is_valid_quantity};
use meas_i18n::TranslationKey;

/// Onboarding wizard steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Step {
    #[default]
    BuyPrice,
    Quantity,
    CurrentPrice,
    Result,
}

impl Step {
    /// Order the wizard walks through
    pub const WIZARD_ORDER: [Step; 4] = [
        Step::BuyPrice,
        Step::Quantity,
        Step::CurrentPrice,
        Step::Result,
    ];

    pub fn index(&self) -> usize {
        match self {
            Step::BuyPrice => 0,
            Step::Quantity => 1,
            Step::CurrentPrice => 2,
            Step::Result => 3,
        }
    }

    pub fn following(&self) -> Option<Step> {
        Self::WIZARD_ORDER.get(self.index() + 1).copied()
    }

    pub fn preceding(&self) -> Option<Step> {
        self.index()
            .checked_sub(1)
            .and_then(|i| Self::WIZARD_ORDER.get(i).copied())
    }

    /// Tab label
    pub fn label_key(&self) -> TranslationKey {
        match self {
            Step::BuyPrice => TranslationKey::BuyPriceLabel,
            Step::Quantity => TranslationKey::QuantityLabel,
            Step::CurrentPrice => TranslationKey::PriceLabel,
            Step::Result => TranslationKey::Result,
        }
    }

    /// Floating tip pointing the user at this step
    pub fn tip_key(&self) -> TranslationKey {
        match self {
            Step::BuyPrice => TranslationKey::TipBuyPrice,
            Step::Quantity => TranslationKey::TipQuantity,
            Step::CurrentPrice => TranslationKey::TipCurrentPrice,
            Step::Result => TranslationKey::TipResult,
        }
    }
}

/// First input still missing, checked buy price → current price → quantity
///
/// Unparsed fields are passed as NaN. Returns [`Step::Result`] once all three
/// are finite and positive. Note the check order differs from the wizard
/// order: the tip asks for both prices before the quantity.
pub fn first_incomplete_step(buy_price: f64, current_price: f64, quantity: f64) -> Step {
    if !is_valid_price(buy_price) {
        return Step::BuyPrice;
    }
    if !is_valid_price(current_price) {
        return Step::CurrentPrice;
    }
    if !is_valid_quantity(quantity) {
        return Step::Quantity;
    }
    Step::Result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wizard_order_navigation() {
        assert_eq!(Step::BuyPrice.following(), Some(Step::Quantity));
        assert_eq!(Step::Quantity.following(), Some(Step::CurrentPrice));
        assert_eq!(Step::CurrentPrice.following(), Some(Step::Result));
        assert_eq!(Step::Result.following(), None);

        assert_eq!(Step::BuyPrice.preceding(), None);
        assert_eq!(Step::Result.preceding(), Some(Step::CurrentPrice));
    }

    #[test]
    fn test_first_incomplete_step() {
        assert_eq!(first_incomplete_step(f64::NAN, 1.0, 1.0), Step::BuyPrice);
        assert_eq!(first_incomplete_step(0.0, 1.0, 1.0), Step::BuyPrice);
        assert_eq!(first_incomplete_step(100.0, f64::NAN, f64::NAN), Step::CurrentPrice);
        assert_eq!(first_incomplete_step(100.0, 110.0, -1.0), Step::Quantity);
        assert_eq!(first_incomplete_step(100.0, 110.0, f64::INFINITY), Step::Quantity);
        assert_eq!(first_incomplete_step(100.0, 110.0, 5.0), Step::Result);
    }

    #[test]
    fn test_tip_keys() {
        assert_eq!(Step::Quantity.tip_key(), TranslationKey::TipQuantity);
        assert_eq!(Step::Result.label_key(), TranslationKey::Result);
    }
}
