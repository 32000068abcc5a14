//! Wizard navigation
//!
//! Forward movement is gated on the active step holding a valid value;
//! backward movement never is.

use crate::form::FormState;
use crate::step::Step;
use meas_i18n::TranslationKey;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WizardNavigator {
    active: Step,
}

impl WizardNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(step: Step) -> Self {
        Self { active: step }
    }

    pub fn active(&self) -> Step {
        self.active
    }

    /// Whether the active step's field holds a finite positive number
    pub fn step_is_complete(step: Step, form: &FormState) -> bool {
        match step {
            Step::BuyPrice => form.buy_value().is_some(),
            Step::Quantity => form.quantity_value().is_some(),
            Step::CurrentPrice => form.current_value().is_some(),
            Step::Result => false,
        }
    }

    pub fn is_next_disabled(&self, form: &FormState) -> bool {
        self.active.following().is_none() || !Self::step_is_complete(self.active, form)
    }

    /// Label for the forward button
    pub fn next_label_key(&self) -> TranslationKey {
        match self.active {
            Step::CurrentPrice => TranslationKey::Finish,
            _ => TranslationKey::Next,
        }
    }

    /// Advance one step; returns whether the step changed
    pub fn next(&mut self, form: &FormState) -> bool {
        if self.is_next_disabled(form) {
            return false;
        }
        match self.active.following() {
            Some(step) => {
                self.active = step;
                true
            }
            None => false,
        }
    }

    /// Step back one step; no-op on the first step
    pub fn back(&mut self) -> bool {
        match self.active.preceding() {
            Some(step) => {
                self.active = step;
                true
            }
            None => false,
        }
    }

    /// Tab click: any earlier step is reachable, a later one only through a
    /// single validated `next`
    pub fn jump_to(&mut self, target: Step, form: &FormState) -> bool {
        if target == self.active {
            return false;
        }
        if target.index() < self.active.index() {
            self.active = target;
            return true;
        }
        self.next(form)
    }

    /// Move straight to a step, bypassing validation
    pub(crate) fn force(&mut self, step: Step) {
        self.active = step;
    }

    pub fn reset(&mut self) {
        self.active = Step::BuyPrice;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(buy: &str, qty: &str, current: &str) -> FormState {
        FormState {
            buy_price: buy.to_string(),
            quantity: qty.to_string(),
            current_price: current.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_next_requires_valid_value() {
        let mut nav = WizardNavigator::new();

        assert!(nav.is_next_disabled(&form("", "", "")));
        assert!(!nav.next(&form("", "", "")));
        assert!(!nav.next(&form("0", "", "")));
        assert!(!nav.next(&form("-5", "", "")));
        assert!(!nav.next(&form("abc", "", "")));
        assert_eq!(nav.active(), Step::BuyPrice);

        assert!(nav.next(&form("100", "", "")));
        assert_eq!(nav.active(), Step::Quantity);
    }

    #[test]
    fn test_full_walk() {
        let filled = form("100", "5", "110");
        let mut nav = WizardNavigator::new();

        assert!(nav.next(&filled));
        assert!(nav.next(&filled));
        assert_eq!(nav.next_label_key(), TranslationKey::Finish);
        assert!(nav.next(&filled));
        assert_eq!(nav.active(), Step::Result);

        assert!(nav.is_next_disabled(&filled));
        assert!(!nav.next(&filled));
    }

    #[test]
    fn test_back_is_noop_on_first_step() {
        let mut nav = WizardNavigator::new();
        assert!(!nav.back());
        assert_eq!(nav.active(), Step::BuyPrice);

        let mut nav = WizardNavigator::at(Step::CurrentPrice);
        assert!(nav.back());
        assert_eq!(nav.active(), Step::Quantity);
    }

    #[test]
    fn test_jump_backward_is_free() {
        let mut nav = WizardNavigator::at(Step::Result);
        assert!(nav.jump_to(Step::BuyPrice, &FormState::default()));
        assert_eq!(nav.active(), Step::BuyPrice);
    }

    #[test]
    fn test_jump_forward_moves_one_validated_step() {
        let mut nav = WizardNavigator::new();
        let partial = form("100", "", "");

        assert!(nav.jump_to(Step::Result, &partial));
        assert_eq!(nav.active(), Step::Quantity);

        // Quantity is still empty
        assert!(!nav.jump_to(Step::Result, &partial));
        assert_eq!(nav.active(), Step::Quantity);
    }

    #[test]
    fn test_jump_to_active_step_is_noop() {
        let mut nav = WizardNavigator::new();
        assert!(!nav.jump_to(Step::BuyPrice, &form("100", "5", "110")));
        assert_eq!(nav.active(), Step::BuyPrice);
    }
}
