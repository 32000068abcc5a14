use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::GoldUnit;
use crate::error::UnitError;

/// Unit a holding is counted in
///
/// Holdings are only ever tracked in xi or domlang, never in ounces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuantityUnit {
    #[default]
    Xi,
    Domlang,
}

impl QuantityUnit {
    pub const ALL: [QuantityUnit; 2] = [QuantityUnit::Xi, QuantityUnit::Domlang];

    pub fn as_str(&self) -> &'static str {
        GoldUnit::from(*self).as_str()
    }
}

impl fmt::Display for QuantityUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<GoldUnit> for QuantityUnit {
    type Error = UnitError;

    fn try_from(unit: GoldUnit) -> Result<Self, Self::Error> {
        match unit {
            GoldUnit::Xi => Ok(QuantityUnit::Xi),
            GoldUnit::Domlang => Ok(QuantityUnit::Domlang),
            GoldUnit::Ounce => Err(UnitError::OunceHolding),
        }
    }
}

impl FromStr for QuantityUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<GoldUnit>()?.try_into()
    }
}
