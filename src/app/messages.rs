use crate::loader::SlotImage;
use crate::pager::NavigationIntent;
use iced::Point;
use iced::keyboard::{Key, Modifiers};
use std::time::Instant;

/// Messages emitted by the UI and the runtime.
#[derive(Debug, Clone)]
pub enum Message {
    /// Mouse presses carry no position; touch presses do.
    PointerPressed {
        position: Option<Point>,
    },
    PointerMoved(Point),
    PointerReleased,
    Navigate(NavigationIntent),
    Scrolled {
        offset_x: f32,
        viewport_width: f32,
        viewport_height: f32,
    },
    WindowResized {
        width: f32,
        height: f32,
    },
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
    ImageSettled {
        slot: usize,
        generation: u64,
        result: Result<SlotImage, String>,
    },
    Tick(Instant),
    PollSystemSignals,
    SafeQuit,
}
