mod gold_unit;
mod quantity_unit;

pub use gold_unit::GoldUnit;
pub use quantity_unit::QuantityUnit;
