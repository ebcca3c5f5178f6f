mod dashboard;
mod platform_metrics_card;

pub use dashboard::OperationsDashboard;
pub use platform_metrics_card::PlatformMetricsCard;
