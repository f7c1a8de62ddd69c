use serde::Deserialize;

/// High-level app configuration, flattened from the TOML tables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub theme: ThemeMode,
    pub slot_size: f32,
    pub border_width: f32,
    pub corner_radius: f32,
    pub window_width: f32,
    pub window_height: f32,
    pub peek_padding: f32,
    pub page_spacing: f32,
    pub scale_step: f32,
    pub beyond_bounds_pages: usize,
    pub animation_millis: u64,
    pub drag_slop: f32,
    pub settle_delay_millis: u64,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub key_next_page: String,
    pub key_prev_page: String,
    pub key_safe_quit: String,
    pub images: Vec<String>,
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            theme: ThemeMode::Night,
            slot_size: crate::config::defaults::default_slot_size(),
            border_width: crate::config::defaults::default_border_width(),
            corner_radius: crate::config::defaults::default_corner_radius(),
            window_width: crate::config::defaults::default_window_width(),
            window_height: crate::config::defaults::default_window_height(),
            peek_padding: crate::config::defaults::default_peek_padding(),
            page_spacing: crate::config::defaults::default_page_spacing(),
            scale_step: crate::config::defaults::default_scale_step(),
            beyond_bounds_pages: crate::config::defaults::default_beyond_bounds_pages(),
            animation_millis: crate::config::defaults::default_animation_millis(),
            drag_slop: crate::config::defaults::default_drag_slop(),
            settle_delay_millis: crate::config::defaults::default_settle_delay_millis(),
            request_timeout_secs: crate::config::defaults::default_request_timeout_secs(),
            user_agent: crate::config::defaults::default_user_agent(),
            key_next_page: crate::config::defaults::default_key_next_page(),
            key_prev_page: crate::config::defaults::default_key_prev_page(),
            key_safe_quit: crate::config::defaults::default_key_safe_quit(),
            images: Vec::new(),
            log_level: crate::config::defaults::default_log_level(),
        }
    }
}

/// Theme mode.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Day,
    Night,
}

impl Default for ThemeMode {
    fn default() -> Self {
        ThemeMode::Night
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ThemeMode::Day => "Day",
            ThemeMode::Night => "Night",
        };
        write!(f, "{}", label)
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
