//! Paging model for the slider.
//!
//! Everything here is UI-free: the page cursor, the clamped resolution of
//! navigation intents, the parallax scale per slot, and the mapping between
//! scroll offsets (logical pixels) and fractional page positions.

use std::ops::RangeInclusive;

/// A navigation request published by any input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationIntent {
    Previous,
    Next,
    SettleAt(usize),
}

/// Page cursor over `page_count` pages.
///
/// `position` is the fractional page currently centred on screen. The
/// current page is the nearest whole page and `offset_fraction` is the
/// remaining sub-page progress, so `current_page + offset_fraction` always
/// reproduces the position.
#[derive(Debug, Clone)]
pub struct Pager {
    page_count: usize,
    position: f32,
}

impl Pager {
    pub fn new(page_count: usize) -> Self {
        Self {
            page_count,
            position: 0.0,
        }
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn last_page(&self) -> usize {
        self.page_count.saturating_sub(1)
    }

    pub fn clamp_page(&self, page: usize) -> usize {
        page.min(self.last_page())
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn current_page(&self) -> usize {
        self.clamp_page(self.position.round() as usize)
    }

    pub fn offset_fraction(&self) -> f32 {
        (self.position - self.current_page() as f32).clamp(-1.0, 1.0)
    }

    pub fn set_position(&mut self, position: f32) {
        self.position = if position.is_finite() {
            position.clamp(0.0, self.last_page() as f32)
        } else {
            0.0
        };
    }

    /// Target page for `intent`, stepping from `base`. `None` for an empty pager.
    pub fn resolve(&self, intent: NavigationIntent, base: usize) -> Option<usize> {
        if self.page_count == 0 {
            return None;
        }
        let base = self.clamp_page(base);
        let target = match intent {
            NavigationIntent::Previous => base.saturating_sub(1),
            NavigationIntent::Next => base.saturating_add(1),
            NavigationIntent::SettleAt(page) => page,
        };
        Some(self.clamp_page(target))
    }

    /// Signed distance between `slot` and the centred position, in pages.
    pub fn page_offset(&self, slot: usize) -> f32 {
        (self.current_page() as f32 - slot as f32) + self.offset_fraction()
    }

    /// Slots to compose: every page touched by the viewport plus `beyond`
    /// pages on either side.
    pub fn render_window(&self, beyond: usize) -> Option<RangeInclusive<usize>> {
        if self.page_count == 0 {
            return None;
        }
        let low = (self.position.floor() as usize).saturating_sub(beyond);
        let high = self.clamp_page((self.position.ceil() as usize).saturating_add(beyond));
        Some(low..=high)
    }
}

/// Uniform scale for a slot `page_offset` pages away from centre.
pub fn slot_scale(page_offset: f32, scale_step: f32) -> f32 {
    (1.0 - scale_step * page_offset.abs()).max(0.0)
}

/// Horizontal layout of the paged strip.
#[derive(Debug, Clone, Copy)]
pub struct PageGeometry {
    pub viewport_width: f32,
    pub peek_padding: f32,
    pub page_spacing: f32,
}

impl PageGeometry {
    pub fn page_width(&self) -> f32 {
        (self.viewport_width - 2.0 * self.peek_padding).max(1.0)
    }

    pub fn stride(&self) -> f32 {
        self.page_width() + self.page_spacing.max(0.0)
    }

    pub fn offset_for_position(&self, position: f32) -> f32 {
        position * self.stride()
    }

    pub fn position_for_offset(&self, offset: f32) -> f32 {
        offset / self.stride()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(pager: &Pager, intent: NavigationIntent, base: usize) -> usize {
        pager.resolve(intent, base).expect("non-empty pager")
    }

    #[test]
    fn steps_are_clamped_at_both_ends() {
        let pager = Pager::new(3);
        assert_eq!(step(&pager, NavigationIntent::Previous, 0), 0);
        assert_eq!(step(&pager, NavigationIntent::Next, 0), 1);
        assert_eq!(step(&pager, NavigationIntent::Next, 1), 2);
        assert_eq!(step(&pager, NavigationIntent::Next, 2), 2);
        assert_eq!(step(&pager, NavigationIntent::Previous, 2), 1);
        assert_eq!(step(&pager, NavigationIntent::SettleAt(9), 0), 2);
    }

    #[test]
    fn any_intent_sequence_stays_in_range() {
        for page_count in 1..=6 {
            let pager = Pager::new(page_count);
            let mut cursor = 0;
            for round in 0..64usize {
                let intent = match (round * 7 + page_count) % 5 {
                    0 | 1 => NavigationIntent::Next,
                    2 | 3 => NavigationIntent::Previous,
                    _ => NavigationIntent::SettleAt(round % 9),
                };
                cursor = step(&pager, intent, cursor);
                assert!(cursor < page_count, "cursor {cursor} escaped {page_count} pages");
            }
        }
    }

    #[test]
    fn empty_pager_resolves_nothing() {
        let pager = Pager::new(0);
        assert_eq!(pager.resolve(NavigationIntent::Next, 0), None);
        assert_eq!(pager.render_window(1), None);
        assert_eq!(pager.current_page(), 0);
    }

    #[test]
    fn centred_page_has_full_scale() {
        let pager = Pager::new(4);
        assert_eq!(pager.page_offset(0), 0.0);
        assert_eq!(slot_scale(pager.page_offset(0), 0.2), 1.0);
    }

    #[test]
    fn adjacent_pages_shrink_to_eighty_percent() {
        let mut pager = Pager::new(4);
        pager.set_position(1.0);
        assert_eq!(slot_scale(pager.page_offset(0), 0.2), 0.8);
        assert_eq!(slot_scale(pager.page_offset(2), 0.2), 0.8);
        assert!((slot_scale(pager.page_offset(3), 0.2) - 0.6).abs() < 1e-6);
    }

    #[test]
    fn fractional_position_splits_into_page_and_fraction() {
        let mut pager = Pager::new(5);
        pager.set_position(1.3);
        assert_eq!(pager.current_page(), 1);
        assert!((pager.offset_fraction() - 0.3).abs() < 1e-6);

        pager.set_position(1.7);
        assert_eq!(pager.current_page(), 2);
        assert!((pager.offset_fraction() + 0.3).abs() < 1e-6);
        assert!((pager.page_offset(1) - 0.7).abs() < 1e-6);
    }

    #[test]
    fn position_is_clamped_to_the_strip() {
        let mut pager = Pager::new(3);
        pager.set_position(-2.0);
        assert_eq!(pager.position(), 0.0);
        pager.set_position(7.5);
        assert_eq!(pager.position(), 2.0);
        pager.set_position(f32::NAN);
        assert_eq!(pager.position(), 0.0);
    }

    #[test]
    fn render_window_covers_neighbours() {
        let mut pager = Pager::new(9);
        assert_eq!(pager.render_window(0), Some(0..=0));
        assert_eq!(pager.render_window(1), Some(0..=1));
        pager.set_position(4.5);
        assert_eq!(pager.render_window(1), Some(3..=6));
        pager.set_position(8.0);
        assert_eq!(pager.render_window(2), Some(6..=8));
    }

    #[test]
    fn geometry_maps_offsets_to_positions() {
        let geometry = PageGeometry {
            viewport_width: 540.0,
            peek_padding: 60.0,
            page_spacing: 2.0,
        };
        assert_eq!(geometry.page_width(), 420.0);
        assert_eq!(geometry.stride(), 422.0);
        assert_eq!(geometry.offset_for_position(2.0), 844.0);
        assert_eq!(geometry.position_for_offset(211.0), 0.5);
    }
}
