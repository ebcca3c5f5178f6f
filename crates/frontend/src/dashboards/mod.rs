pub mod d400_ads_performance;
pub mod d401_operations;

pub use d400_ads_performance::ui::AdsPerformanceDashboard;
pub use d401_operations::ui::OperationsDashboard;
