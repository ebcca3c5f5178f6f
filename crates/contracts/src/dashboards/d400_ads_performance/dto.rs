use crate::shared::error::ParseError;
use crate::shared::indicators::{Accent, MetricCardData, Trend, ValueFormat};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Top-level dashboard tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardTab {
    Summary,
    Marketing,
    Operations,
    Delivery,
}

impl DashboardTab {
    pub fn all() -> Vec<DashboardTab> {
        vec![
            DashboardTab::Summary,
            DashboardTab::Marketing,
            DashboardTab::Operations,
            DashboardTab::Delivery,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            DashboardTab::Summary => "summary",
            DashboardTab::Marketing => "marketing",
            DashboardTab::Operations => "operations",
            DashboardTab::Delivery => "delivery",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DashboardTab::Summary => "Summary",
            DashboardTab::Marketing => "Marketing Ads",
            DashboardTab::Operations => "Operations",
            DashboardTab::Delivery => "Delivery Discounts",
        }
    }

    /// Every tab except Operations shows the ads performance overview.
    pub fn shows_ads_overview(&self) -> bool {
        !matches!(self, DashboardTab::Operations)
    }
}

impl FromStr for DashboardTab {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DashboardTab::all()
            .into_iter()
            .find(|t| t.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::Tab(s.to_string()))
    }
}

/// "Performance Overview" block: two rows of four cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdsPerformanceOverview {
    pub top_row: Vec<MetricCardData>,
    pub bottom_row: Vec<MetricCardData>,
}

fn card(
    label: &str,
    icon: &str,
    accent: Accent,
    value: f64,
    format: ValueFormat,
    trend: Trend,
) -> MetricCardData {
    MetricCardData {
        label: label.to_string(),
        icon: icon.to_string(),
        accent,
        value,
        format,
        trend: Some(trend),
    }
}

impl AdsPerformanceOverview {
    /// Mock figures; there is no analytics backend.
    pub fn mock(currency: &str) -> Self {
        let money = || ValueFormat::Money {
            currency: currency.to_string(),
        };
        Self {
            top_row: vec![
                card("Currently Live Ads", "tag", Accent::Blue, 12.0, ValueFormat::Integer, Trend::up("+3")),
                card("Ads Spend", "dollar", Accent::Orange, 54_250.0, money(), Trend::up("+12%")),
                card("Marketing Revenue", "dollar", Accent::Green, 233_750.0, money(), Trend::up("+18%")),
                card("Marketing Orders", "cart", Accent::Purple, 892.0, ValueFormat::Integer, Trend::up("+24")),
            ],
            bottom_row: vec![
                card("ROAS", "bar-chart", Accent::Teal, 4.3, ValueFormat::Multiplier { decimals: 1 }, Trend::up("+0.5")),
                card("Conversion Rate", "percent", Accent::Red, 2.7, ValueFormat::Percent { decimals: 1 }, Trend::down("-0.3%")),
                card("New Customers", "users", Accent::Gray, 304.0, ValueFormat::Integer, Trend::up("+15%")),
                card("Avg CAC", "dollar", Accent::Orange, 178.45, money(), Trend::down("-8%")),
            ],
        }
    }

    pub fn cards(&self) -> impl Iterator<Item = &MetricCardData> {
        self.top_row.iter().chain(self.bottom_row.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::indicators::TrendDirection;

    #[test]
    fn test_tabs() {
        assert_eq!("operations".parse::<DashboardTab>(), Ok(DashboardTab::Operations));
        assert!("finance".parse::<DashboardTab>().is_err());
        assert!(DashboardTab::Delivery.shows_ads_overview());
        assert!(!DashboardTab::Operations.shows_ads_overview());
    }

    #[test]
    fn test_mock_overview() {
        let overview = AdsPerformanceOverview::mock("AED");
        assert_eq!(overview.top_row.len(), 4);
        assert_eq!(overview.bottom_row.len(), 4);
        let down: Vec<&str> = overview
            .cards()
            .filter(|c| c.trend.as_ref().map(|t| t.direction) == Some(TrendDirection::Down))
            .map(|c| c.label.as_str())
            .collect();
        assert_eq!(down, vec!["Conversion Rate", "Avg CAC"]);
    }
}
