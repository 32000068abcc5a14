use serde::{Deserialize, Serialize};

/// Overall direction of a holding's profit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PnlState {
    Gain,
    Loss,
    #[default]
    Neutral,
}

impl PnlState {
    pub fn from_profit(total_profit: f64) -> Self {
        if total_profit > 0.0 {
            PnlState::Gain
        } else if total_profit < 0.0 {
            PnlState::Loss
        } else {
            PnlState::Neutral
        }
    }
}

/// Movement of the market price between two updates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceTrend {
    Up,
    Down,
}

impl PriceTrend {
    /// `None` when the prices are equal or either is NaN
    pub fn between(previous: f64, current: f64) -> Option<Self> {
        if current > previous {
            Some(PriceTrend::Up)
        } else if current < previous {
            Some(PriceTrend::Down)
        } else {
            None
        }
    }
}
