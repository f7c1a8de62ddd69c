//! Visual theme installed by the shell.

use crate::config::ThemeMode;
use iced::Color;
use iced::Theme as IcedTheme;

/// Border colour of every slot frame.
pub const SLOT_BORDER: Color = Color {
    r: 0.5,
    g: 0.5,
    b: 0.5,
    a: 1.0,
};

/// Full-window backdrop behind the strip.
pub const BACKDROP: Color = Color::BLACK;

/// Slider theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl From<ThemeMode> for Theme {
    fn from(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Night => Theme::Dark,
            ThemeMode::Day => Theme::Light,
        }
    }
}

impl From<Theme> for IcedTheme {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Light => IcedTheme::Light,
            Theme::Dark => IcedTheme::Dark,
        }
    }
}

/// Spinner stroke colour for the active theme.
pub fn spinner_color(theme: &IcedTheme) -> Color {
    theme.palette().primary
}
