pub mod card_animated;
pub mod donut_gauge;
pub mod metric_card;
pub mod progress_bar;
pub mod tab_navigation;
pub mod ui;
