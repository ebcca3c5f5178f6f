pub mod area;
pub mod platform;

pub use area::{toggle_area, AreaId, AreaSet};
pub use platform::{select_all_platforms, toggle_platform, PlatformId, PlatformSet};
