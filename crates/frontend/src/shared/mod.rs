pub mod components;
pub mod config;
pub mod date_utils;
pub mod drawer_frame;
pub mod icons;
