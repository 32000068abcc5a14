//! Persisted form fields
//!
//! Fields are kept as the raw text the user typed so a half-typed value
//! survives a restart exactly as it was left.

use chrono::{DateTime, Utc};
use meas_core::{
    GoldUnit, Holding, PricePoint, QuantityUnit, Timestamp, parse_amount, validate_price,
    validate_quantity,
};
use meas_ports::{KeyValueStore, StoreResult};
use std::str::FromStr;

/// Store keys, one per field
pub mod keys {
    pub const BUY_PRICE: &str = "gold_buy_price";
    pub const BUY_UNIT: &str = "gold_buy_unit";
    pub const CURRENT_PRICE: &str = "gold_current_price";
    pub const CURRENT_UNIT: &str = "gold_current_unit";
    pub const QUANTITY: &str = "gold_quantity";
    pub const QUANTITY_UNIT: &str = "gold_quantity_unit";
    pub const LAST_UPDATED: &str = "gold_last_updated";
    pub const PREVIOUS_PRICE: &str = "gold_previous_price";
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub buy_price: String,
    pub buy_unit: GoldUnit,
    pub current_price: String,
    pub current_unit: GoldUnit,
    pub quantity: String,
    pub quantity_unit: QuantityUnit,
    /// Current price before the last market update replaced it
    pub previous_price: String,
    /// When the current price last came from the market feed
    pub last_updated: Option<Timestamp>,
}

impl FormState {
    pub fn load(store: &dyn KeyValueStore) -> StoreResult<Self> {
        let text = |key: &str| -> StoreResult<String> { Ok(store.get(key)?.unwrap_or_default()) };

        Ok(Self {
            buy_price: text(keys::BUY_PRICE)?,
            buy_unit: parse_unit(keys::BUY_UNIT, store.get(keys::BUY_UNIT)?),
            current_price: text(keys::CURRENT_PRICE)?,
            current_unit: parse_unit(keys::CURRENT_UNIT, store.get(keys::CURRENT_UNIT)?),
            quantity: text(keys::QUANTITY)?,
            quantity_unit: parse_unit(keys::QUANTITY_UNIT, store.get(keys::QUANTITY_UNIT)?),
            previous_price: text(keys::PREVIOUS_PRICE)?,
            last_updated: store
                .get(keys::LAST_UPDATED)?
                .and_then(|raw| parse_timestamp(&raw)),
        })
    }

    pub fn save(&self, store: &dyn KeyValueStore) -> StoreResult<()> {
        store.set(keys::BUY_PRICE, &self.buy_price)?;
        store.set(keys::BUY_UNIT, self.buy_unit.as_str())?;
        store.set(keys::CURRENT_PRICE, &self.current_price)?;
        store.set(keys::CURRENT_UNIT, self.current_unit.as_str())?;
        store.set(keys::QUANTITY, &self.quantity)?;
        store.set(keys::QUANTITY_UNIT, self.quantity_unit.as_str())?;
        store.set(keys::PREVIOUS_PRICE, &self.previous_price)?;
        match self.last_updated {
            Some(at) => store.set(keys::LAST_UPDATED, &at.to_rfc3339())?,
            None => store.remove(keys::LAST_UPDATED)?,
        }
        Ok(())
    }

    /// Buy price when it is a finite positive number
    pub fn buy_value(&self) -> Option<f64> {
        validate_price(&self.buy_price).ok()
    }

    pub fn current_value(&self) -> Option<f64> {
        validate_price(&self.current_price).ok()
    }

    pub fn quantity_value(&self) -> Option<f64> {
        validate_quantity(&self.quantity).ok()
    }

    /// Raw numeric reading of each field, NaN where the text is not a number
    pub fn readings(&self) -> (f64, f64, f64) {
        let read = |raw: &str| parse_amount(raw).unwrap_or(f64::NAN);
        (
            read(&self.buy_price),
            read(&self.current_price),
            read(&self.quantity),
        )
    }

    /// Engine inputs, present only when every field validates
    pub fn inputs(&self) -> Option<(PricePoint, PricePoint, Holding)> {
        Some((
            PricePoint::new(self.buy_value()?, self.buy_unit),
            PricePoint::new(self.current_value()?, self.current_unit),
            Holding::new(self.quantity_value()?, self.quantity_unit),
        ))
    }
}

fn parse_unit<U>(key: &str, raw: Option<String>) -> U
where
    U: FromStr + Default,
    U::Err: std::fmt::Display,
{
    match raw {
        Some(raw) if !raw.is_empty() => raw.parse().unwrap_or_else(|e| {
            log::warn!("Ignoring stored {}: {}", key, e);
            U::default()
        }),
        _ => U::default(),
    }
}

fn parse_timestamp(raw: &str) -> Option<Timestamp> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| log::warn!("Ignoring stored {}: {}", keys::LAST_UPDATED, e))
        .ok()
}
