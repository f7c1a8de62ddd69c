use super::super::super::messages::Message;
use super::super::super::state::{App, SLIDER_SCROLL_ID};
use super::super::Effect;
use crate::loader;
use iced::Event;
use iced::Task;
use iced::event;
use iced::keyboard;
use iced::mouse;
use iced::touch;
use iced::widget::scrollable::{self, AbsoluteOffset};
use iced::window;
use tracing::{info, trace};

impl App {
    pub(in crate::app) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::ScrollTo(x) => {
                scrollable::scroll_to(SLIDER_SCROLL_ID.clone(), AbsoluteOffset { x, y: 0.0 })
            }
            Effect::FetchImage {
                slot,
                generation,
                url,
            } => {
                let client = self.http.clone();
                let raster = self.slot_raster();
                let (task, handle) = Task::perform(
                    async move {
                        loader::fetch_slot_image(&client, &url, raster)
                            .await
                            .map_err(|err| format!("{err:#}"))
                    },
                    move |result| Message::ImageSettled {
                        slot,
                        generation,
                        result,
                    },
                )
                .abortable();
                if !self.slots.attach_fetch(slot, generation, handle) {
                    trace!(slot, generation, "Slot left the window before its fetch started");
                }
                task
            }
            Effect::QuitSafely => {
                info!(page = self.pager.current_page() + 1, "Closing slider");
                iced::exit()
            }
        }
    }
}

/// Pointer events are forwarded even when a widget captured them: the drag
/// recognizer covers the whole window, including the scroll surface.
pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::PointerMoved(position))
        }
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            Some(Message::PointerPressed { position: None })
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(Message::PointerReleased)
        }
        Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(Message::PointerPressed {
                position: Some(position),
            })
        }
        Event::Touch(touch::Event::FingerMoved { position, .. }) => {
            Some(Message::PointerMoved(position))
        }
        Event::Touch(touch::Event::FingerLifted { .. } | touch::Event::FingerLost { .. }) => {
            Some(Message::PointerReleased)
        }
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized {
            width: size.width,
            height: size.height,
        }),
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. })
            if status == event::Status::Ignored =>
        {
            Some(Message::KeyPressed { key, modifiers })
        }
        _ => None,
    }
}
