mod dashboard;

pub use dashboard::AdsPerformanceDashboard;
