//! Entry point for the photo slider.
//!
//! - Initialise tracing and the Ctrl-C hook.
//! - Load user configuration from `conf/config.toml`.
//! - Resolve the image list and launch the GUI.

mod animation;
mod app;
mod config;
mod gallery;
mod gesture;
mod loader;
mod pager;
mod theme;

use crate::app::run_app;
use crate::config::load_config;
use crate::gallery::Gallery;
use anyhow::{Context, Result};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

static SIGINT_REQUESTED: AtomicBool = AtomicBool::new(false);

/// Consume a pending Ctrl-C request.
pub(crate) fn take_sigint_requested() -> bool {
    SIGINT_REQUESTED.swap(false, Ordering::SeqCst)
}

fn main() {
    let reload_handle = init_tracing();
    install_sigint_handler();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let config = load_config(Path::new("conf/config.toml"));
    set_log_level(reload_handle, config.log_level.as_filter_str());

    let gallery = Gallery::from_config(&config);
    info!(
        level = %config.log_level,
        theme = %config.theme,
        images = gallery.len(),
        custom_gallery = !config.images.is_empty(),
        "Starting photo slider"
    );
    info!(
        slot_size = config.slot_size,
        peek_padding = config.peek_padding,
        scale_step = config.scale_step,
        beyond_bounds_pages = config.beyond_bounds_pages,
        "Active carousel configuration"
    );

    run_app(gallery, config).context("Failed to start the GUI")?;
    Ok(())
}

fn install_sigint_handler() {
    if let Err(err) = ctrlc::set_handler(|| {
        SIGINT_REQUESTED.store(true, Ordering::SeqCst);
    }) {
        warn!("Failed to install Ctrl+C signal handler: {err}");
    }
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    warn!("Logging initialized; override level with config.log_level or RUST_LOG");
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("debug"));
    if let Err(err) = handle.modify(|filter| *filter = parsed.clone()) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}
