//! Horizontal drag recognition over the whole window.
//!
//! Pointer and touch events feed the same recognizer. A press starts a new
//! gesture; once horizontal travel passes the slop the gesture engages and
//! every further move yields the horizontal delta since the previous one.
//! A gesture whose vertical travel wins at slop time is rejected.

use iced::Point;

/// Horizontal movement reported by an engaged drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragDelta {
    pub gesture: u64,
    pub dx: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Pressed,
    Engaged,
    Rejected,
}

#[derive(Debug, Clone)]
pub struct DragRecognizer {
    slop: f32,
    phase: Phase,
    origin: Point,
    last: Point,
    gesture: u64,
}

impl DragRecognizer {
    pub fn new(slop: f32) -> Self {
        Self {
            slop: slop.max(0.0),
            phase: Phase::Idle,
            origin: Point::ORIGIN,
            last: Point::ORIGIN,
            gesture: 0,
        }
    }

    /// Begin a gesture at `point` and return its id.
    pub fn press(&mut self, point: Point) -> u64 {
        self.gesture = self.gesture.wrapping_add(1);
        self.phase = Phase::Pressed;
        self.origin = point;
        self.last = point;
        self.gesture
    }

    pub fn moved(&mut self, point: Point) -> Option<DragDelta> {
        match self.phase {
            Phase::Idle | Phase::Rejected => None,
            Phase::Pressed => {
                let dx = point.x - self.origin.x;
                let dy = point.y - self.origin.y;
                if dx.abs() >= self.slop && dx.abs() >= dy.abs() && dx != 0.0 {
                    self.phase = Phase::Engaged;
                    self.last = point;
                    Some(DragDelta {
                        gesture: self.gesture,
                        dx,
                    })
                } else {
                    if dy.abs() > self.slop && dy.abs() > dx.abs() {
                        self.phase = Phase::Rejected;
                    }
                    None
                }
            }
            Phase::Engaged => {
                let dx = point.x - self.last.x;
                self.last = point;
                (dx != 0.0).then_some(DragDelta {
                    gesture: self.gesture,
                    dx,
                })
            }
        }
    }

    pub fn release(&mut self) {
        self.phase = Phase::Idle;
    }

    /// True while a pointer is down, engaged or not.
    pub fn is_pressed(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_motion_stays_below_slop() {
        let mut drag = DragRecognizer::new(8.0);
        drag.press(Point::new(100.0, 100.0));
        assert_eq!(drag.moved(Point::new(104.0, 101.0)), None);
        assert!(drag.is_pressed());
    }

    #[test]
    fn engages_past_slop_and_reports_incremental_deltas() {
        let mut drag = DragRecognizer::new(8.0);
        let id = drag.press(Point::new(100.0, 100.0));
        let first = drag.moved(Point::new(88.0, 102.0)).expect("engaged");
        assert_eq!(first, DragDelta { gesture: id, dx: -12.0 });
        let next = drag.moved(Point::new(80.0, 140.0)).expect("incremental");
        assert_eq!(next.dx, -8.0);
        assert_eq!(drag.moved(Point::new(80.0, 150.0)), None);
    }

    #[test]
    fn vertical_drag_is_rejected() {
        let mut drag = DragRecognizer::new(8.0);
        drag.press(Point::new(0.0, 0.0));
        assert_eq!(drag.moved(Point::new(2.0, 30.0)), None);
        assert_eq!(drag.moved(Point::new(60.0, 30.0)), None);
    }

    #[test]
    fn hover_without_press_is_ignored_and_ids_advance() {
        let mut drag = DragRecognizer::new(8.0);
        assert_eq!(drag.moved(Point::new(50.0, 0.0)), None);
        let first = drag.press(Point::ORIGIN);
        drag.release();
        assert!(!drag.is_pressed());
        let second = drag.press(Point::ORIGIN);
        assert_ne!(first, second);
    }
}
