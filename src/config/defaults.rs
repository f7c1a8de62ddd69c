pub(crate) fn default_slot_size() -> f32 {
    450.0
}

pub(crate) fn default_border_width() -> f32 {
    0.5
}

pub(crate) fn default_corner_radius() -> f32 {
    24.0
}

pub(crate) fn default_window_width() -> f32 {
    540.0
}

pub(crate) fn default_window_height() -> f32 {
    900.0
}

pub(crate) fn default_peek_padding() -> f32 {
    60.0
}

pub(crate) fn default_page_spacing() -> f32 {
    2.0
}

pub(crate) fn default_scale_step() -> f32 {
    0.2
}

pub(crate) fn default_beyond_bounds_pages() -> usize {
    1
}

pub(crate) fn default_animation_millis() -> u64 {
    320
}

pub(crate) fn default_drag_slop() -> f32 {
    8.0
}

pub(crate) fn default_settle_delay_millis() -> u64 {
    140
}

pub(crate) fn default_request_timeout_secs() -> u64 {
    30
}

pub(crate) fn default_user_agent() -> String {
    format!("photo-slider/{}", env!("CARGO_PKG_VERSION"))
}

pub(crate) fn default_key_next_page() -> String {
    "right".to_string()
}

pub(crate) fn default_key_prev_page() -> String {
    "left".to_string()
}

pub(crate) fn default_key_safe_quit() -> String {
    "q".to_string()
}

pub(crate) fn default_log_level() -> super::models::LogLevel {
    super::models::LogLevel::Info
}
