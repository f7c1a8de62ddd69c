//! Eased scroll animation between page positions.

use std::time::{Duration, Instant};

/// One in-flight "scroll to page" animation.
///
/// A newer request replaces this one and starts from wherever this one had
/// got to, so no explicit cancellation is needed.
#[derive(Debug, Clone, Copy)]
pub struct PageAnimation {
    from: f32,
    target: usize,
    started_at: Instant,
    duration: Duration,
}

impl PageAnimation {
    pub fn new(from: f32, target: usize, started_at: Instant, duration: Duration) -> Self {
        Self {
            from,
            target,
            started_at,
            duration,
        }
    }

    pub fn target(&self) -> usize {
        self.target
    }

    fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub fn position_at(&self, now: Instant) -> f32 {
        let t = self.progress(now);
        if t >= 1.0 {
            return self.target as f32;
        }
        let to = self.target as f32;
        self.from + (to - self.from) * ease_in_out_cubic(t)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_origin_and_lands_on_target() {
        let start = Instant::now();
        let anim = PageAnimation::new(0.0, 2, start, Duration::from_millis(300));
        assert_eq!(anim.position_at(start), 0.0);
        assert!(!anim.is_finished(start));

        let end = start + Duration::from_millis(300);
        assert_eq!(anim.position_at(end), 2.0);
        assert!(anim.is_finished(end));
        assert_eq!(anim.position_at(end + Duration::from_secs(5)), 2.0);
    }

    #[test]
    fn midpoint_is_halfway_and_motion_is_monotonic() {
        let start = Instant::now();
        let anim = PageAnimation::new(3.0, 1, start, Duration::from_millis(400));
        let mid = anim.position_at(start + Duration::from_millis(200));
        assert!((mid - 2.0).abs() < 1e-4);

        let mut last = anim.position_at(start);
        for step in 1..=40 {
            let now = start + Duration::from_millis(step * 10);
            let pos = anim.position_at(now);
            assert!(pos <= last + 1e-6, "moved backwards at step {step}");
            last = pos;
        }
        assert_eq!(last, 1.0);
    }

    #[test]
    fn zero_duration_jumps_immediately() {
        let start = Instant::now();
        let anim = PageAnimation::new(0.4, 0, start, Duration::ZERO);
        assert!(anim.is_finished(start));
        assert_eq!(anim.position_at(start), 0.0);
    }
}
