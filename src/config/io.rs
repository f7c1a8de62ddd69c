use super::models::AppConfig;
use super::tables::ConfigTables;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Load the configuration at `path`, falling back to defaults on any error.
pub fn load_config(path: &Path) -> AppConfig {
    let contents = match fs::read_to_string(path) {
        Ok(data) => {
            info!(path = %path.display(), "Loaded base config");
            data
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                "Falling back to default config: {err}"
            );
            return AppConfig::default();
        }
    };

    match parse_config(&contents) {
        Ok(cfg) => {
            debug!("Parsed configuration from disk");
            cfg
        }
        Err(err) => {
            warn!(path = %path.display(), "Invalid config TOML: {err}");
            AppConfig::default()
        }
    }
}

/// Parse sectioned TOML into the flat [`AppConfig`].
pub fn parse_config(contents: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str::<ConfigTables>(contents).map(AppConfig::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::models::{LogLevel, ThemeMode};

    #[test]
    fn empty_document_yields_defaults() {
        let config = parse_config("").expect("empty config parses");
        let defaults = AppConfig::default();
        assert_eq!(config.slot_size, defaults.slot_size);
        assert_eq!(config.scale_step, defaults.scale_step);
        assert_eq!(config.key_next_page, "right");
        assert!(config.images.is_empty());
    }

    #[test]
    fn partial_tables_keep_defaults_for_missing_keys() {
        let config = parse_config(
            r#"
            [appearance]
            theme = "day"

            [carousel]
            scale_step = 0.1

            [gallery]
            images = ["https://example.com/a.jpg", "https://example.com/b.jpg"]
            "#,
        )
        .expect("partial config parses");

        assert_eq!(config.theme, ThemeMode::Day);
        assert_eq!(config.scale_step, 0.1);
        assert_eq!(config.peek_padding, 60.0);
        assert_eq!(config.images.len(), 2);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn rejects_unknown_log_level() {
        let err = parse_config(
            r#"
            [logging]
            log_level = "loud"
            "#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = load_config(Path::new("/nonexistent/photo-slider/config.toml"));
        assert_eq!(config.window_width, AppConfig::default().window_width);
    }
}
