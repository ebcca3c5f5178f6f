use thiserror::Error;

/// Ошибка разбора значения из строки (select value, query string, config).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown platform: {0}")]
    Platform(String),
    #[error("unknown area: {0}")]
    Area(String),
    #[error("unknown template: {0}")]
    Template(String),
    #[error("unknown campaign duration: {0}")]
    Duration(String),
    #[error("unknown traffic filter: {0}")]
    Filter(String),
    #[error("unknown dashboard tab: {0}")]
    Tab(String),
    #[error("unknown timeframe: {0}")]
    Timeframe(String),
    #[error("unknown wizard variant: {0}")]
    Variant(String),
}
