use iced::widget::scrollable::Id as ScrollId;
use once_cell::sync::Lazy;
use std::time::Duration;

pub(crate) static SLIDER_SCROLL_ID: Lazy<ScrollId> = Lazy::new(|| ScrollId::new("slider-strip"));
/// Tick cadence while anything on screen is moving.
pub(crate) const FRAME_INTERVAL: Duration = Duration::from_millis(16);
pub(crate) const SIGNAL_POLL_INTERVAL: Duration = Duration::from_millis(250);
/// Largest frame delta fed to the spinner after an idle period.
pub(crate) const MAX_FRAME_DELTA: Duration = Duration::from_millis(100);
pub(crate) const SPINNER_SIZE_PX: f32 = 40.0;
pub(crate) const SPINNER_RADIANS_PER_SEC: f32 = 5.0;
/// Scroll echoes closer than this to the last programmatic offset are ours.
pub(crate) const SCROLL_ECHO_TOLERANCE_PX: f32 = 0.5;
