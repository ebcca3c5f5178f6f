use crate::enums::PlatformId;
use crate::shared::error::ParseError;
use crate::shared::indicators::Trend;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Period switch in the Operations header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    Today,
    Week,
    Month,
    Quarter,
}

impl Timeframe {
    pub fn all() -> Vec<Timeframe> {
        vec![
            Timeframe::Today,
            Timeframe::Week,
            Timeframe::Month,
            Timeframe::Quarter,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            Timeframe::Today => "today",
            Timeframe::Week => "week",
            Timeframe::Month => "month",
            Timeframe::Quarter => "quarter",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Timeframe::Today => "Today",
            Timeframe::Week => "This Week",
            Timeframe::Month => "This Month",
            Timeframe::Quarter => "This Quarter",
        }
    }
}

impl FromStr for Timeframe {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Timeframe::all()
            .into_iter()
            .find(|t| t.code() == s.trim())
            .ok_or_else(|| ParseError::Timeframe(s.to_string()))
    }
}

/// Headline KPI tile with a progress bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiTile {
    pub label: String,
    pub icon: String,
    /// Shown as `"{value}%"`.
    pub value: f64,
    /// Progress bar fill, 0..=100. Differs from `value` for "lower is better" KPIs.
    pub progress: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub current: u32,
    pub total: u32,
}

impl Score {
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.current as f64 / self.total as f64 * 100.0
    }
}

/// Label in the middle of the donut gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PerformanceLevel {
    Poor,
    Good,
    Epic,
}

impl PerformanceLevel {
    pub fn from_percentage(pct: f64) -> Self {
        if pct < 70.0 {
            PerformanceLevel::Poor
        } else if pct < 90.0 {
            PerformanceLevel::Good
        } else {
            PerformanceLevel::Epic
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PerformanceLevel::Poor => "Poor",
            PerformanceLevel::Good => "Good",
            PerformanceLevel::Epic => "Epic",
        }
    }

    /// Ring colour of the gauge.
    pub fn color(&self) -> &'static str {
        match self {
            PerformanceLevel::Poor => "#ef4444",
            PerformanceLevel::Good => "#eab308",
            PerformanceLevel::Epic => "#16a34a",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationMetric {
    pub label: String,
    pub value: String,
    pub trend: Trend,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformMetrics {
    pub platform: PlatformId,
    pub score: Score,
    pub metrics: Vec<OperationMetric>,
}

impl PlatformMetrics {
    pub fn level(&self) -> PerformanceLevel {
        PerformanceLevel::from_percentage(self.score.percentage())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertStatus {
    Active,
    Resolved,
}

impl AlertStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AlertStatus::Active => "Active",
            AlertStatus::Resolved => "Resolved",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: u32,
    pub platform: PlatformId,
    pub issue: String,
    pub time: String,
    pub location: String,
    pub status: AlertStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationPerformance {
    pub location: String,
    /// Out of 100.
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationsOverview {
    pub kpis: Vec<KpiTile>,
    pub platforms: Vec<PlatformMetrics>,
    pub alerts: Vec<Alert>,
    pub locations: Vec<LocationPerformance>,
}

fn kpi(label: &str, icon: &str, value: f64, progress: f64) -> KpiTile {
    KpiTile {
        label: label.to_string(),
        icon: icon.to_string(),
        value,
        progress,
    }
}

fn metric(label: &str, value: &str, trend: Trend) -> OperationMetric {
    OperationMetric {
        label: label.to_string(),
        value: value.to_string(),
        trend,
    }
}

/// Five standard rows; `cancelled`, `prep` and `rejected` vary per platform.
fn platform(
    platform: PlatformId,
    current: u32,
    cancelled: (&str, Trend),
    prep: (&str, Trend),
    rejected: Trend,
) -> PlatformMetrics {
    PlatformMetrics {
        platform,
        score: Score { current, total: 16 },
        metrics: vec![
            metric("Order Delay", "0.00%", Trend::neutral("0.0%")),
            metric("Cancelled Order", cancelled.0, cancelled.1),
            metric("Avg Prep Time", prep.0, prep.1),
            metric("Rejected Order", "0.00%", rejected),
            metric("Inaccurate Order", "0.00%", Trend::neutral("0.0%")),
        ],
    }
}

fn alert(id: u32, platform: PlatformId, issue: &str, time: &str, location: &str, status: AlertStatus) -> Alert {
    Alert {
        id,
        platform,
        issue: issue.to_string(),
        time: time.to_string(),
        location: location.to_string(),
        status,
    }
}

static OPERATIONS_MOCK: Lazy<OperationsOverview> = Lazy::new(|| OperationsOverview {
    kpis: vec![
        kpi("Overall Score", "bar-chart", 93.7, 93.7),
        kpi("On-Time Delivery", "clock", 99.8, 99.8),
        kpi("Cancellation Rate", "x-circle", 0.5, 99.5),
        kpi("Order Accuracy", "clipboard", 99.9, 99.9),
    ],
    platforms: vec![
        platform(
            PlatformId::Talabat,
            16,
            ("0.00%", Trend::neutral("0.0%")),
            ("N/A", Trend::neutral("N/A")),
            Trend::neutral("0.0%"),
        ),
        platform(
            PlatformId::Noon,
            16,
            ("0.00%", Trend::neutral("0.0%")),
            ("N/A", Trend::neutral("0.0%")),
            Trend::down("-0.9%"),
        ),
        platform(
            PlatformId::Careem,
            15,
            ("2.00%", Trend::up("2.0%")),
            ("12.34 mins", Trend::up("2.64%")),
            Trend::neutral("0.0%"),
        ),
        platform(
            PlatformId::Deliveroo,
            16,
            ("0.00%", Trend::neutral("0.0%")),
            ("N/A", Trend::neutral("0.0%")),
            Trend::down("-0.9%"),
        ),
    ],
    alerts: vec![
        alert(1, PlatformId::Careem, "Cancelled Order", "1 hour ago", "Dubai Marina Branch", AlertStatus::Active),
        alert(2, PlatformId::Noon, "Rejected Order", "3 hours ago", "Downtown Dubai Branch", AlertStatus::Resolved),
        alert(3, PlatformId::Talabat, "Order Delay", "5 hours ago", "JBR Branch", AlertStatus::Resolved),
    ],
    locations: vec![
        LocationPerformance { location: "Dubai Marina".to_string(), score: 95 },
        LocationPerformance { location: "Downtown Dubai".to_string(), score: 92 },
        LocationPerformance { location: "JBR".to_string(), score: 89 },
        LocationPerformance { location: "Business Bay".to_string(), score: 87 },
    ],
});

impl OperationsOverview {
    /// Mock data, identical for every timeframe.
    pub fn mock() -> Self {
        OPERATIONS_MOCK.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_performance_levels() {
        assert_eq!(PerformanceLevel::from_percentage(100.0), PerformanceLevel::Epic);
        assert_eq!(PerformanceLevel::from_percentage(90.0), PerformanceLevel::Epic);
        assert_eq!(PerformanceLevel::from_percentage(89.9), PerformanceLevel::Good);
        assert_eq!(PerformanceLevel::from_percentage(70.0), PerformanceLevel::Good);
        assert_eq!(PerformanceLevel::from_percentage(69.9), PerformanceLevel::Poor);
    }

    #[test]
    fn test_score_percentage() {
        assert_eq!(Score { current: 8, total: 16 }.percentage(), 50.0);
        assert_eq!(Score { current: 3, total: 0 }.percentage(), 0.0);
    }

    #[test]
    fn test_mock_overview() {
        let overview = OperationsOverview::mock();
        assert_eq!(overview.platforms.len(), 4);
        let careem = overview
            .platforms
            .iter()
            .find(|p| p.platform == PlatformId::Careem)
            .unwrap();
        // 15/16 = 93.75%
        assert_eq!(careem.level(), PerformanceLevel::Epic);
        assert!(overview.platforms.iter().all(|p| p.metrics.len() == 5));
        assert_eq!(
            overview.alerts.iter().filter(|a| a.status == AlertStatus::Active).count(),
            1
        );
    }

    #[test]
    fn test_timeframe_from_str() {
        assert_eq!("quarter".parse::<Timeframe>(), Ok(Timeframe::Quarter));
        assert!("year".parse::<Timeframe>().is_err());
    }
}
