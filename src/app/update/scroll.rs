use super::super::state::{App, MAX_FRAME_DELTA, SCROLL_ECHO_TOLERANCE_PX, SPINNER_RADIANS_PER_SEC};
use super::Effect;
use crate::pager::NavigationIntent;
use std::f32::consts::TAU;
use std::time::Instant;
use tracing::{debug, trace};

impl App {
    /// Offsets reported by the scroll surface. Echoes of our own scroll-to
    /// commands are dropped; anything else is the user scrolling directly and
    /// arms the settle timer.
    pub(super) fn handle_scrolled(
        &mut self,
        offset_x: f32,
        viewport_width: f32,
        viewport_height: f32,
        effects: &mut Vec<Effect>,
    ) {
        self.viewport_height = viewport_height;
        if (viewport_width - self.geometry.viewport_width).abs() >= SCROLL_ECHO_TOLERANCE_PX {
            self.resize_viewport(viewport_width, effects);
            return;
        }

        if self.motion.is_animating() {
            return;
        }
        if (offset_x - self.motion.expected_offset).abs() < SCROLL_ECHO_TOLERANCE_PX {
            return;
        }

        let position = self.geometry.position_for_offset(offset_x);
        trace!(offset_x, position, "User scrolled the strip");
        self.pager.set_position(position);
        self.motion.expected_offset = offset_x;
        self.motion.user_scrolled_at = Some(Instant::now());
    }

    /// New page width; keep the same page centred.
    pub(super) fn resize_viewport(&mut self, width: f32, effects: &mut Vec<Effect>) {
        if width <= 0.0 || (width - self.geometry.viewport_width).abs() < f32::EPSILON {
            return;
        }
        debug!(
            old = self.geometry.viewport_width,
            new = width,
            "Viewport width changed"
        );
        self.geometry.viewport_width = width;
        if !self.motion.is_animating() {
            let position = self.pager.position();
            self.set_position(position, effects);
        }
    }

    pub(super) fn handle_tick(&mut self, now: Instant, effects: &mut Vec<Effect>) {
        let elapsed = self
            .motion
            .last_tick
            .map(|last| now.saturating_duration_since(last).min(MAX_FRAME_DELTA))
            .unwrap_or_default();
        self.motion.last_tick = Some(now);
        self.motion.spinner_phase =
            (self.motion.spinner_phase + elapsed.as_secs_f32() * SPINNER_RADIANS_PER_SEC) % TAU;

        if let Some(animation) = self.motion.animation {
            if animation.is_finished(now) {
                self.motion.animation = None;
                self.set_position(animation.target() as f32, effects);
                debug!(page = animation.target(), "Page animation finished");
            } else {
                self.set_position(animation.position_at(now), effects);
            }
        }

        let Some(scrolled_at) = self.motion.user_scrolled_at else {
            return;
        };
        if self.drag.is_pressed() || now.saturating_duration_since(scrolled_at) < self.settle_delay()
        {
            return;
        }
        let page = self.pager.current_page();
        trace!(page, "Scrolling stopped; settling");
        self.apply_intent(NavigationIntent::SettleAt(page), effects);
    }
}
