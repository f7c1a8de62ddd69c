use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use tracing::{debug, info};

impl App {
    pub(in crate::app) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::PointerPressed { position } => self.handle_pointer_pressed(position),
            Message::PointerMoved(position) => {
                self.handle_pointer_moved(position, &mut effects);
            }
            Message::PointerReleased => self.handle_pointer_released(),
            Message::Navigate(intent) => self.apply_intent(intent, &mut effects),
            Message::Scrolled {
                offset_x,
                viewport_width,
                viewport_height,
            } => self.handle_scrolled(offset_x, viewport_width, viewport_height, &mut effects),
            Message::WindowResized { width, height } => {
                self.handle_window_resized(width, height, &mut effects);
            }
            Message::KeyPressed { key, modifiers } => {
                if let Some(shortcut) = self.shortcut_message_for_key(key, modifiers) {
                    effects.extend(self.reduce(shortcut));
                }
            }
            Message::ImageSettled {
                slot,
                generation,
                result,
            } => self.handle_image_settled(slot, generation, result),
            Message::Tick(now) => self.handle_tick(now, &mut effects),
            Message::PollSystemSignals => self.handle_poll_system_signals(&mut effects),
            Message::SafeQuit => effects.push(Effect::QuitSafely),
        }

        self.recompose_slots(&mut effects);

        effects
    }

    fn handle_poll_system_signals(&mut self, effects: &mut Vec<Effect>) {
        if crate::take_sigint_requested() {
            info!("Interrupt received; closing slider");
            effects.push(Effect::QuitSafely);
        }
    }

    fn handle_window_resized(&mut self, width: f32, height: f32, effects: &mut Vec<Effect>) {
        debug!(width, height, "Window resized");
        self.viewport_height = height;
        self.resize_viewport(width, effects);
    }
}
