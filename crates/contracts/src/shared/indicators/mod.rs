use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Trend
// ---------------------------------------------------------------------------

/// Direction of change relative to the previous period (drives colour and arrow).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendDirection {
    Up,
    Down,
    Neutral,
}

impl TrendDirection {
    /// CSS modifier used by metric cards and operation rows.
    pub fn modifier(&self) -> &'static str {
        match self {
            TrendDirection::Up => "up",
            TrendDirection::Down => "down",
            TrendDirection::Neutral => "flat",
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            TrendDirection::Up => "\u{2191}",
            TrendDirection::Down => "\u{2193}",
            TrendDirection::Neutral => "",
        }
    }
}

/// Pre-formatted change label, e.g. `"+12%"` or `"-0.3%"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    pub value: String,
    pub direction: TrendDirection,
}

impl Trend {
    pub fn up(value: &str) -> Self {
        Self {
            value: value.to_string(),
            direction: TrendDirection::Up,
        }
    }

    pub fn down(value: &str) -> Self {
        Self {
            value: value.to_string(),
            direction: TrendDirection::Down,
        }
    }

    pub fn neutral(value: &str) -> Self {
        Self {
            value: value.to_string(),
            direction: TrendDirection::Neutral,
        }
    }
}

// ---------------------------------------------------------------------------
// Metric cards
// ---------------------------------------------------------------------------

/// How to format the numeric value on the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValueFormat {
    Money { currency: String },
    Number { decimals: u8 },
    Percent { decimals: u8 },
    Multiplier { decimals: u8 },
    Integer,
}

/// Accent colour of the card icon bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Accent {
    Blue,
    Orange,
    Green,
    Purple,
    Teal,
    Red,
    Gray,
}

impl Accent {
    pub fn modifier(&self) -> &'static str {
        match self {
            Accent::Blue => "blue",
            Accent::Orange => "orange",
            Accent::Green => "green",
            Accent::Purple => "purple",
            Accent::Teal => "teal",
            Accent::Red => "red",
            Accent::Gray => "gray",
        }
    }
}

/// One static metric card (label, icon, value, optional trend).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricCardData {
    pub label: String,
    pub icon: String,
    pub accent: Accent,
    pub value: f64,
    pub format: ValueFormat,
    pub trend: Option<Trend>,
}
