//! Logging Module
//!
//! Sets up `tracing` output for the `ffm` binary:
//! - stderr writer so stdout carries only the rendered profile
//! - `EnvFilter` driven by `RUST_LOG`, falling back to the configured level
//! - optional JSON lines
//! - `log` records bridged into `tracing`
//! - miette report hook for error rendering

use std::io::{self, IsTerminal};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::LoggingConfig;

// ============================================================================
// Logging Initialization
// ============================================================================

/// Initialize the logging system.
///
/// Safe to call more than once; later calls leave the first subscriber in
/// place.
pub fn init(config: &LoggingConfig) {
    let env_filter = build_filter(config);

    let layer = if config.json {
        tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .json()
            .with_target(true)
            .with_filter(env_filter)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .with_ansi(io::stderr().is_terminal())
            .compact()
            .with_filter(env_filter)
            .boxed()
    };

    // `try_init` also installs the `log` -> `tracing` bridge.
    if let Err(e) = tracing_subscriber::registry().with(layer).try_init() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    init_miette();

    tracing::debug!(level = %config.level, json = config.json, "Logging initialized");
}

/// `RUST_LOG` wins over the configured level.
fn build_filter(config: &LoggingConfig) -> EnvFilter {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    filter_from(env.as_deref(), config)
}

/// `env` when it parses, then `config.level`, then `warn`.
fn filter_from(env: Option<&str>, config: &LoggingConfig) -> EnvFilter {
    env.ok_or(())
        .and_then(|directives| EnvFilter::try_new(directives).map_err(drop))
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Configure miette report rendering
fn init_miette() {
    let colorize = io::stderr().is_terminal();

    miette::set_hook(Box::new(move |_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .color(colorize)
                .unicode(colorize)
                .context_lines(3)
                .tab_width(4)
                .break_words(true)
                .build(),
        )
    }))
    .ok(); // Ignore if already set
}
