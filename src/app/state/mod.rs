mod constants;
mod motion;
mod slots;

use crate::config::AppConfig;
use crate::gallery::Gallery;
use crate::gesture::DragRecognizer;
use crate::loader::{self, SlotRaster};
use crate::pager::{PageGeometry, Pager};
use iced::{Point, Task};
use std::time::Duration;
use tracing::{info, warn};

use super::messages::Message;

pub(crate) use constants::*;
pub(in crate::app) use motion::MotionState;
pub(in crate::app) use slots::{LoadPhase, SlotTable};

/// Slider view state. The page cursor lives in `pager`; everything that
/// moves it goes through the reducer.
pub struct App {
    pub(super) config: AppConfig,
    pub(super) gallery: Gallery,
    pub(super) pager: Pager,
    pub(super) geometry: PageGeometry,
    pub(super) viewport_height: f32,
    pub(super) slots: SlotTable,
    pub(super) motion: MotionState,
    pub(super) drag: DragRecognizer,
    /// Gesture that already produced a page step; later deltas from it are dropped.
    pub(super) stepped_gesture: Option<u64>,
    pub(super) cursor_position: Option<Point>,
    pub(super) http: reqwest::Client,
}

impl App {
    /// Mount the slider on `gallery` at page 0 and start fetching the
    /// initially visible slots.
    pub fn bootstrap(gallery: Gallery, config: AppConfig) -> (Self, Task<Message>) {
        if gallery.is_empty() {
            warn!("No images configured; the slider will be empty");
        }
        let http = loader::build_client(
            Duration::from_secs(config.request_timeout_secs),
            &config.user_agent,
        )
        .unwrap_or_else(|err| {
            warn!("{err:#}; using a default HTTP client");
            reqwest::Client::new()
        });

        let mut app = App {
            pager: Pager::new(gallery.len()),
            geometry: PageGeometry {
                viewport_width: config.window_width,
                peek_padding: config.peek_padding,
                page_spacing: config.page_spacing,
            },
            viewport_height: config.window_height,
            slots: SlotTable::default(),
            motion: MotionState::default(),
            drag: DragRecognizer::new(config.drag_slop),
            stepped_gesture: None,
            cursor_position: None,
            http,
            gallery,
            config,
        };
        info!(pages = app.pager.page_count(), "Slider mounted at first page");

        let mut effects = Vec::new();
        app.recompose_slots(&mut effects);
        let task = Task::batch(
            effects
                .into_iter()
                .map(|effect| app.run_effect(effect))
                .collect::<Vec<_>>(),
        );
        (app, task)
    }

    /// Edge length of an unscaled slot: the configured size, limited by the
    /// page width and the viewport height.
    pub(super) fn slot_side(&self) -> f32 {
        self.config
            .slot_size
            .min(self.geometry.page_width())
            .min(self.viewport_height)
            .max(0.0)
    }

    pub(super) fn slot_raster(&self) -> SlotRaster {
        let side_px = self.config.slot_size.round().max(1.0) as u32;
        SlotRaster {
            side_px,
            corner_ratio: self.config.corner_radius / side_px as f32,
        }
    }

    /// Page that step intents are measured from: the in-flight target if an
    /// animation is running, otherwise the page on screen.
    pub(super) fn navigation_base(&self) -> usize {
        self.motion
            .animation
            .as_ref()
            .map(|animation| animation.target())
            .unwrap_or_else(|| self.pager.current_page())
    }

    /// Whether the frame tick subscription must run.
    pub(super) fn needs_frames(&self) -> bool {
        self.motion.is_animating()
            || self.motion.user_scrolled_at.is_some()
            || self.slots.any_loading()
    }

    pub(super) fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.config.settle_delay_millis)
    }

    pub(super) fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.config.animation_millis)
    }
}
