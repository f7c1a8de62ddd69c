use crate::animation::PageAnimation;
use std::time::Instant;

/// Scroll-surface bookkeeping: the animation being driven, the last offset we
/// pushed to the surface, and when the user last scrolled it directly.
#[derive(Debug, Default)]
pub struct MotionState {
    pub(in crate::app) animation: Option<PageAnimation>,
    pub(in crate::app) expected_offset: f32,
    pub(in crate::app) user_scrolled_at: Option<Instant>,
    pub(in crate::app) last_tick: Option<Instant>,
    pub(in crate::app) spinner_phase: f32,
}

impl MotionState {
    pub(in crate::app) fn is_animating(&self) -> bool {
        self.animation.is_some()
    }
}
