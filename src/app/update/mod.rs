mod core;
mod images;
mod navigation;
mod scroll;

/// Describes work that must be performed outside the pure reducer.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Effect {
    /// Move the strip to an absolute horizontal offset.
    ScrollTo(f32),
    FetchImage {
        slot: usize,
        generation: u64,
        url: String,
    },
    QuitSafely,
}
