use super::super::super::messages::Message;
use super::super::super::state::App;
use crate::pager::NavigationIntent;
use iced::keyboard::{Key, Modifiers, key};

impl App {
    pub(super) fn shortcut_message_for_key(
        &self,
        key: Key,
        modifiers: Modifiers,
    ) -> Option<Message> {
        let pressed = Self::pressed_key_token(&key)?;

        if Self::shortcut_matches(&self.config.key_next_page, "right", &pressed, modifiers) {
            Some(Message::Navigate(NavigationIntent::Next))
        } else if Self::shortcut_matches(&self.config.key_prev_page, "left", &pressed, modifiers) {
            Some(Message::Navigate(NavigationIntent::Previous))
        } else if Self::shortcut_matches(&self.config.key_safe_quit, "q", &pressed, modifiers) {
            Some(Message::SafeQuit)
        } else {
            None
        }
    }

    fn pressed_key_token(key: &Key) -> Option<String> {
        match key.as_ref() {
            Key::Named(key::Named::ArrowLeft) => Some("left".to_string()),
            Key::Named(key::Named::ArrowRight) => Some("right".to_string()),
            Key::Named(key::Named::Space) => Some("space".to_string()),
            Key::Character(ch) => Some(ch.to_ascii_lowercase()),
            _ => None,
        }
    }

    pub(super) fn shortcut_matches(
        raw: &str,
        fallback: &str,
        pressed: &str,
        modifiers: Modifiers,
    ) -> bool {
        let normalized = Self::normalize_shortcut_token(raw, fallback);

        let mut required_ctrl = false;
        let mut required_alt = false;
        let mut required_logo = false;
        let mut required_shift = false;
        let mut required_key: Option<&str> = None;

        for token in normalized
            .split('+')
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            match token {
                "ctrl" | "control" => required_ctrl = true,
                "alt" => required_alt = true,
                "logo" | "meta" | "super" | "cmd" | "command" => required_logo = true,
                "shift" => required_shift = true,
                key => required_key = Some(key),
            }
        }

        let required_key = required_key.unwrap_or(fallback);
        if pressed != required_key {
            return false;
        }

        modifiers.control() == required_ctrl
            && modifiers.alt() == required_alt
            && modifiers.logo() == required_logo
            && modifiers.shift() == required_shift
    }

    pub(super) fn normalize_shortcut_token(raw: &str, fallback: &str) -> String {
        let normalized = raw.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            fallback.to_string()
        } else {
            normalized
                .replace("spacebar", "space")
                .replace("arrowleft", "left")
                .replace("arrowright", "right")
        }
    }
}
