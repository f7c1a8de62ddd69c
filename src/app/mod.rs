mod messages;
mod spinner;
mod state;
mod update;
mod view;

pub use state::App;

use crate::config::AppConfig;
use crate::gallery::Gallery;
use crate::theme::Theme;
use iced::{Size, window};

/// Launch the slider window over `gallery`.
pub fn run_app(gallery: Gallery, config: AppConfig) -> iced::Result {
    let window_settings = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        ..window::Settings::default()
    };

    iced::application("Photo Slider", App::update, App::view)
        .window(window_settings)
        .subscription(App::subscription)
        .theme(|app: &App| iced::Theme::from(Theme::from(app.config.theme)))
        .run_with(move || App::bootstrap(gallery, config))
}
