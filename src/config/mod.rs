//! Configuration loading for the photo slider.
//!
//! All user-tunable settings are centralized here and loaded from
//! `conf/config.toml` if present. Any missing or invalid entries fall back to
//! sensible defaults so the slider can still launch.

mod defaults;
mod io;
mod models;
mod tables;

pub use io::load_config;
pub use models::{AppConfig, ThemeMode};
