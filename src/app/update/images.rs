use super::super::state::App;
use super::Effect;
use crate::loader::SlotImage;
use tracing::{debug, trace};

impl App {
    /// Bring the composed slot set in line with the render window and request
    /// an image for every slot that just entered it.
    pub(in crate::app) fn recompose_slots(&mut self, effects: &mut Vec<Effect>) {
        let window = self.pager.render_window(self.config.beyond_bounds_pages);
        for composed in self.slots.compose(window) {
            let Some(image) = self.gallery.get(composed.slot) else {
                continue;
            };
            trace!(
                slot = composed.slot,
                generation = composed.generation,
                "Slot composed"
            );
            effects.push(Effect::FetchImage {
                slot: composed.slot,
                generation: composed.generation,
                url: image.to_string(),
            });
        }
    }

    /// Success and failure both settle the slot; a failure only leaves it
    /// empty.
    pub(super) fn handle_image_settled(
        &mut self,
        slot: usize,
        generation: u64,
        result: Result<SlotImage, String>,
    ) {
        let (image, failure) = match result {
            Ok(image) => (Some(image), None),
            Err(err) => (None, Some(err)),
        };

        if !self.slots.settle(slot, generation, image) {
            trace!(slot, generation, "Dropped stale image completion");
            return;
        }

        match failure {
            Some(err) => match self.gallery.get(slot) {
                Some(image) => debug!(slot, url = %image, "Image failed to load: {err}"),
                None => debug!(slot, "Image failed to load: {err}"),
            },
            None => trace!(slot, "Image settled"),
        }
    }
}
