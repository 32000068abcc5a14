use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::QuantityUnit;
use crate::error::UnitError;

/// Unit a price is quoted per
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoldUnit {
    /// Base unit, every calculation is normalized to it
    #[default]
    Xi,
    /// Larger local unit, a fixed multiple of xi
    Domlang,
    /// Troy ounce, the unit international feeds quote in
    Ounce,
}

impl GoldUnit {
    /// All price units, in selector order
    pub const ALL: [GoldUnit; 3] = [GoldUnit::Xi, GoldUnit::Domlang, GoldUnit::Ounce];

    pub fn as_str(&self) -> &'static str {
        match self {
            GoldUnit::Xi => "xi",
            GoldUnit::Domlang => "domlang",
            GoldUnit::Ounce => "ounce",
        }
    }
}

impl fmt::Display for GoldUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GoldUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "xi" => Ok(GoldUnit::Xi),
            "domlang" => Ok(GoldUnit::Domlang),
            "ounce" | "oz" => Ok(GoldUnit::Ounce),
            _ => Err(UnitError::Unknown(s.to_string())),
        }
    }
}

impl From<QuantityUnit> for GoldUnit {
    fn from(unit: QuantityUnit) -> Self {
        match unit {
            QuantityUnit::Xi => GoldUnit::Xi,
            QuantityUnit::Domlang => GoldUnit::Domlang,
        }
    }
}
