pub mod d400_ads_performance;
pub mod d401_operations;
