//! Calculator session
//!
//! Owns the persisted form and the wizard position, and derives the
//! conversion result from them on demand.

use crate::error::{SessionError, SessionResult};
use crate::form::FormState;
use crate::navigator::WizardNavigator;
use crate::step::{Step, first_incomplete_step};
use meas_core::{
    ConversionResult, ConversionTable, GoldUnit, PnlState, PriceQuote, PriceTrend, QuantityUnit,
    Timestamp, parse_amount,
};
use meas_ports::KeyValueStore;
use std::sync::Arc;

pub struct CalculatorSession {
    store: Arc<dyn KeyValueStore>,
    table: ConversionTable,
    form: FormState,
    navigator: WizardNavigator,
    onboarding: bool,
}

impl CalculatorSession {
    /// Restore the saved form; onboarding starts when the buy price or the
    /// quantity was never entered
    pub fn open(store: Arc<dyn KeyValueStore>, table: ConversionTable) -> SessionResult<Self> {
        let form = FormState::load(store.as_ref())?;
        let onboarding = form.buy_price.is_empty() || form.quantity.is_empty();
        log::debug!("Session opened (onboarding: {})", onboarding);

        // Returning users land on the first missing input, or the result
        let navigator = if onboarding {
            WizardNavigator::new()
        } else {
            let (buy, current, quantity) = form.readings();
            WizardNavigator::at(first_incomplete_step(buy, current, quantity))
        };

        Ok(Self {
            store,
            table,
            form,
            navigator,
            onboarding,
        })
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn table(&self) -> ConversionTable {
        self.table
    }

    pub fn active_step(&self) -> Step {
        self.navigator.active()
    }

    pub fn navigator(&self) -> &WizardNavigator {
        &self.navigator
    }

    pub fn is_onboarding(&self) -> bool {
        self.onboarding
    }

    // ------------------------------------------------------------------
    // Field setters; each one persists the whole form
    // ------------------------------------------------------------------

    pub fn set_buy_price(&mut self, raw: &str) -> SessionResult<()> {
        self.update(|form| form.buy_price = raw.trim().to_string())
    }

    pub fn set_buy_unit(&mut self, unit: GoldUnit) -> SessionResult<()> {
        self.update(|form| form.buy_unit = unit)
    }

    pub fn set_current_price(&mut self, raw: &str) -> SessionResult<()> {
        self.update(|form| form.current_price = raw.trim().to_string())
    }

    pub fn set_current_unit(&mut self, unit: GoldUnit) -> SessionResult<()> {
        self.update(|form| form.current_unit = unit)
    }

    pub fn set_quantity(&mut self, raw: &str) -> SessionResult<()> {
        self.update(|form| form.quantity = raw.trim().to_string())
    }

    pub fn set_quantity_unit(&mut self, unit: QuantityUnit) -> SessionResult<()> {
        self.update(|form| form.quantity_unit = unit)
    }

    /// Set the field shown on `step`
    pub fn set_step_value(&mut self, step: Step, raw: &str) -> SessionResult<()> {
        match step {
            Step::BuyPrice => self.set_buy_price(raw),
            Step::Quantity => self.set_quantity(raw),
            Step::CurrentPrice => self.set_current_price(raw),
            Step::Result => Err(SessionError::NoInputOnStep),
        }
    }

    fn update(&mut self, edit: impl FnOnce(&mut FormState)) -> SessionResult<()> {
        edit(&mut self.form);
        self.form.save(self.store.as_ref())?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    pub fn next(&mut self) -> bool {
        self.navigator.next(&self.form)
    }

    pub fn back(&mut self) -> bool {
        self.navigator.back()
    }

    pub fn jump_to(&mut self, step: Step) -> bool {
        self.navigator.jump_to(step, &self.form)
    }

    pub fn is_next_disabled(&self) -> bool {
        self.navigator.is_next_disabled(&self.form)
    }

    /// Leave onboarding; only allowed once the wizard reached the result
    pub fn finish_onboarding(&mut self) -> bool {
        if !self.onboarding || self.navigator.active() != Step::Result {
            return false;
        }
        self.onboarding = false;
        log::info!("Onboarding finished");
        true
    }

    /// Clear buy price and quantity and walk the wizard again
    pub fn start_new_calculation(&mut self) -> SessionResult<()> {
        self.update(|form| {
            form.buy_price.clear();
            form.quantity.clear();
        })?;
        self.navigator.reset();
        self.onboarding = true;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Derived values
    // ------------------------------------------------------------------

    /// Engine output; `None` until every input is a finite positive number
    pub fn result(&self) -> Option<ConversionResult> {
        let (buy, current, holding) = self.form.inputs()?;
        Some(self.table.calculate(buy, current, holding))
    }

    pub fn pnl_state(&self) -> PnlState {
        self.result()
            .map(|r| r.pnl_state())
            .unwrap_or_default()
    }

    /// Direction of the last market move, from the previous to the current price
    pub fn trend(&self) -> Option<PriceTrend> {
        if self.form.previous_price.is_empty() || self.form.current_price.is_empty() {
            return None;
        }
        let previous = parse_amount(&self.form.previous_price).ok()?;
        let current = parse_amount(&self.form.current_price).ok()?;
        PriceTrend::between(previous, current)
    }

    /// Step the tip should point at
    pub fn tip_step(&self) -> Step {
        let (buy, current, quantity) = self.form.readings();
        first_incomplete_step(buy, current, quantity)
    }

    /// Fill the current price from a market quote
    ///
    /// Once buy price and quantity are valid the wizard moves to the result.
    pub fn apply_quote(&mut self, quote: &PriceQuote, at: Timestamp) -> SessionResult<()> {
        self.store_quote(quote, at, false)?;

        if self.form.buy_value().is_some() && self.form.quantity_value().is_some() {
            self.navigator.force(Step::Result);
        }
        Ok(())
    }

    /// Replace the current price with a refreshed quote
    ///
    /// The replaced price is kept as the previous price when it differs, which
    /// drives [`trend`](Self::trend). The active step does not change.
    pub fn refresh_quote(&mut self, quote: &PriceQuote, at: Timestamp) -> SessionResult<()> {
        self.store_quote(quote, at, true)
    }

    fn store_quote(
        &mut self,
        quote: &PriceQuote,
        at: Timestamp,
        keep_previous: bool,
    ) -> SessionResult<()> {
        let price = quote.price.to_string();
        self.update(|form| {
            if keep_previous && !form.current_price.is_empty() && form.current_price != price {
                form.previous_price = form.current_price.clone();
            }
            form.current_price = price;
            form.current_unit = quote.unit;
            form.last_updated = Some(at);
        })
    }
}
