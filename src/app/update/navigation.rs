use super::super::state::App;
use super::Effect;
use crate::animation::PageAnimation;
use crate::gesture::DragDelta;
use crate::pager::NavigationIntent;
use iced::Point;
use std::time::Instant;
use tracing::{debug, trace};

impl App {
    pub(super) fn handle_pointer_pressed(&mut self, position: Option<Point>) {
        if position.is_some() {
            self.cursor_position = position;
        }
        let Some(point) = self.cursor_position else {
            return;
        };
        let gesture = self.drag.press(point);
        trace!(gesture, x = point.x, y = point.y, "Pointer pressed");
    }

    pub(super) fn handle_pointer_moved(&mut self, position: Point, effects: &mut Vec<Effect>) {
        self.cursor_position = Some(position);
        if let Some(delta) = self.drag.moved(position) {
            self.handle_drag_delta(delta, effects);
        }
    }

    pub(super) fn handle_pointer_released(&mut self) {
        self.drag.release();
    }

    /// Left-to-right motion pages back, anything else pages forward. A
    /// gesture steps once; its later deltas are dropped.
    pub(super) fn handle_drag_delta(&mut self, delta: DragDelta, effects: &mut Vec<Effect>) {
        if self.stepped_gesture == Some(delta.gesture) {
            return;
        }
        self.stepped_gesture = Some(delta.gesture);

        let intent = if delta.dx > 0.0 {
            NavigationIntent::Previous
        } else {
            NavigationIntent::Next
        };
        trace!(gesture = delta.gesture, dx = delta.dx, ?intent, "Drag stepped");
        self.apply_intent(intent, effects);
    }

    /// Single entry point for every page change.
    pub(super) fn apply_intent(&mut self, intent: NavigationIntent, effects: &mut Vec<Effect>) {
        let base = self.navigation_base();
        let Some(target) = self.pager.resolve(intent, base) else {
            return;
        };
        self.motion.user_scrolled_at = None;

        let from = self.pager.position();
        if from == target as f32 {
            self.motion.animation = None;
            self.set_position(from, effects);
            return;
        }

        debug!(?intent, from, target, "Animating to page");
        self.motion.animation = Some(PageAnimation::new(
            from,
            target,
            Instant::now(),
            self.animation_duration(),
        ));
    }

    /// Move the page cursor and push the matching offset to the surface.
    pub(super) fn set_position(&mut self, position: f32, effects: &mut Vec<Effect>) {
        self.pager.set_position(position);
        let offset = self.geometry.offset_for_position(self.pager.position());
        self.motion.expected_offset = offset;
        effects.push(Effect::ScrollTo(offset));
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::messages::Message;
    use super::*;
    use crate::config::AppConfig;
    use crate::gallery::Gallery;
    use std::time::Duration;

    fn slider(pages: usize) -> App {
        let urls = (0..pages).map(|i| format!("https://example.invalid/{i}.jpg"));
        let (app, _) = App::bootstrap(Gallery::from_urls(urls), AppConfig::default());
        app
    }

    fn finish_animation(app: &mut App) {
        let later = Instant::now() + app.animation_duration() + Duration::from_millis(1);
        app.reduce(Message::Tick(later));
    }

    fn drag(app: &mut App, from_x: f32, to_x: f32) {
        app.reduce(Message::PointerPressed {
            position: Some(Point::new(from_x, 300.0)),
        });
        let steps = 4;
        for i in 1..=steps {
            let x = from_x + (to_x - from_x) * i as f32 / steps as f32;
            app.reduce(Message::PointerMoved(Point::new(x, 300.0)));
        }
        app.reduce(Message::PointerReleased);
    }

    #[test]
    fn right_to_left_drag_advances_one_page() {
        let mut app = slider(3);
        drag(&mut app, 400.0, 100.0);
        assert_eq!(app.navigation_base(), 1);
        finish_animation(&mut app);
        assert_eq!(app.pager.current_page(), 1);
        assert!(!app.motion.is_animating());
    }

    #[test]
    fn left_to_right_drag_at_first_page_stays_put() {
        let mut app = slider(3);
        drag(&mut app, 100.0, 400.0);
        finish_animation(&mut app);
        assert_eq!(app.pager.current_page(), 0);
    }

    #[test]
    fn three_rapid_drags_clamp_at_last_page() {
        let mut app = slider(3);
        let mut targets = Vec::new();
        for _ in 0..3 {
            drag(&mut app, 400.0, 100.0);
            targets.push(app.navigation_base());
        }
        assert_eq!(targets, vec![1, 2, 2]);
        finish_animation(&mut app);
        assert_eq!(app.pager.current_page(), 2);
    }

    #[test]
    fn one_gesture_steps_once() {
        let mut app = slider(5);
        app.reduce(Message::PointerPressed {
            position: Some(Point::new(400.0, 300.0)),
        });
        for x in [380.0, 300.0, 200.0, 100.0, 20.0] {
            app.reduce(Message::PointerMoved(Point::new(x, 300.0)));
        }
        app.reduce(Message::PointerReleased);
        assert_eq!(app.navigation_base(), 1);
    }

    #[test]
    fn vertical_drag_does_not_navigate() {
        let mut app = slider(3);
        app.reduce(Message::PointerPressed {
            position: Some(Point::new(200.0, 100.0)),
        });
        app.reduce(Message::PointerMoved(Point::new(205.0, 400.0)));
        app.reduce(Message::PointerReleased);
        assert!(!app.motion.is_animating());
        assert_eq!(app.navigation_base(), 0);
    }

    #[test]
    fn intents_keep_cursor_in_bounds() {
        let mut app = slider(4);
        let intents = [
            NavigationIntent::Previous,
            NavigationIntent::Next,
            NavigationIntent::Next,
            NavigationIntent::SettleAt(9),
            NavigationIntent::Next,
            NavigationIntent::Previous,
            NavigationIntent::SettleAt(0),
            NavigationIntent::Previous,
        ];
        for intent in intents {
            app.reduce(Message::Navigate(intent));
            assert!(app.navigation_base() <= 3);
            finish_animation(&mut app);
            assert!(app.pager.current_page() <= 3);
        }
        assert_eq!(app.pager.current_page(), 0);
    }

    #[test]
    fn settling_on_current_page_snaps_without_animation() {
        let mut app = slider(3);
        let effects = app.reduce(Message::Navigate(NavigationIntent::SettleAt(0)));
        assert!(!app.motion.is_animating());
        assert!(effects.contains(&Effect::ScrollTo(0.0)));
    }

    #[test]
    fn finished_animation_scrolls_to_page_offset() {
        let mut app = slider(3);
        app.reduce(Message::Navigate(NavigationIntent::Next));
        let later = Instant::now() + app.animation_duration() + Duration::from_millis(1);
        let effects = app.reduce(Message::Tick(later));
        let expected = app.geometry.offset_for_position(1.0);
        assert!(effects.contains(&Effect::ScrollTo(expected)));
        assert_eq!(app.motion.expected_offset, expected);
    }

    #[test]
    fn empty_gallery_ignores_navigation() {
        let mut app = slider(0);
        let effects = app.reduce(Message::Navigate(NavigationIntent::Next));
        assert!(effects.is_empty());
        assert_eq!(app.pager.current_page(), 0);
    }
}
