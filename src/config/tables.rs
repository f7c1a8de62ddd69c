use super::defaults;
use super::models::{AppConfig, LogLevel, ThemeMode};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    appearance: AppearanceConfig,
    #[serde(default)]
    window: WindowConfig,
    #[serde(default)]
    carousel: CarouselConfig,
    #[serde(default)]
    gestures: GesturesConfig,
    #[serde(default)]
    network: NetworkConfig,
    #[serde(default)]
    shortcuts: ShortcutsConfig,
    #[serde(default)]
    gallery: GalleryConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            theme: tables.appearance.theme,
            slot_size: tables.appearance.slot_size,
            border_width: tables.appearance.border_width,
            corner_radius: tables.appearance.corner_radius,
            window_width: tables.window.width,
            window_height: tables.window.height,
            peek_padding: tables.carousel.peek_padding,
            page_spacing: tables.carousel.page_spacing,
            scale_step: tables.carousel.scale_step,
            beyond_bounds_pages: tables.carousel.beyond_bounds_pages,
            animation_millis: tables.carousel.animation_millis,
            drag_slop: tables.gestures.drag_slop,
            settle_delay_millis: tables.gestures.settle_delay_millis,
            request_timeout_secs: tables.network.request_timeout_secs,
            user_agent: tables.network.user_agent,
            key_next_page: tables.shortcuts.key_next_page,
            key_prev_page: tables.shortcuts.key_prev_page,
            key_safe_quit: tables.shortcuts.key_safe_quit,
            images: tables.gallery.images,
            log_level: tables.logging.log_level,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct AppearanceConfig {
    #[serde(default)]
    theme: ThemeMode,
    #[serde(default = "defaults::default_slot_size")]
    slot_size: f32,
    #[serde(default = "defaults::default_border_width")]
    border_width: f32,
    #[serde(default = "defaults::default_corner_radius")]
    corner_radius: f32,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        AppearanceConfig {
            theme: ThemeMode::default(),
            slot_size: defaults::default_slot_size(),
            border_width: defaults::default_border_width(),
            corner_radius: defaults::default_corner_radius(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct WindowConfig {
    #[serde(default = "defaults::default_window_width")]
    width: f32,
    #[serde(default = "defaults::default_window_height")]
    height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: defaults::default_window_width(),
            height: defaults::default_window_height(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct CarouselConfig {
    #[serde(default = "defaults::default_peek_padding")]
    peek_padding: f32,
    #[serde(default = "defaults::default_page_spacing")]
    page_spacing: f32,
    #[serde(default = "defaults::default_scale_step")]
    scale_step: f32,
    #[serde(default = "defaults::default_beyond_bounds_pages")]
    beyond_bounds_pages: usize,
    #[serde(default = "defaults::default_animation_millis")]
    animation_millis: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        CarouselConfig {
            peek_padding: defaults::default_peek_padding(),
            page_spacing: defaults::default_page_spacing(),
            scale_step: defaults::default_scale_step(),
            beyond_bounds_pages: defaults::default_beyond_bounds_pages(),
            animation_millis: defaults::default_animation_millis(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct GesturesConfig {
    #[serde(default = "defaults::default_drag_slop")]
    drag_slop: f32,
    #[serde(default = "defaults::default_settle_delay_millis")]
    settle_delay_millis: u64,
}

impl Default for GesturesConfig {
    fn default() -> Self {
        GesturesConfig {
            drag_slop: defaults::default_drag_slop(),
            settle_delay_millis: defaults::default_settle_delay_millis(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct NetworkConfig {
    #[serde(default = "defaults::default_request_timeout_secs")]
    request_timeout_secs: u64,
    #[serde(default = "defaults::default_user_agent")]
    user_agent: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        NetworkConfig {
            request_timeout_secs: defaults::default_request_timeout_secs(),
            user_agent: defaults::default_user_agent(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct ShortcutsConfig {
    #[serde(default = "defaults::default_key_next_page")]
    key_next_page: String,
    #[serde(default = "defaults::default_key_prev_page")]
    key_prev_page: String,
    #[serde(default = "defaults::default_key_safe_quit")]
    key_safe_quit: String,
}

impl Default for ShortcutsConfig {
    fn default() -> Self {
        ShortcutsConfig {
            key_next_page: defaults::default_key_next_page(),
            key_prev_page: defaults::default_key_prev_page(),
            key_safe_quit: defaults::default_key_safe_quit(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct GalleryConfig {
    #[serde(default)]
    images: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}
