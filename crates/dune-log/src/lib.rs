//! Structured logging via the `tracing` ecosystem.
//!
//! Console output with uptime timestamps and module paths, filterable per
//! module through `RUST_LOG` or the config file's `debug.log_level`.

use dune_config::Config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// The filter comes from, in order: the `RUST_LOG` environment variable,
/// the config's `debug.log_level`, then the built-in default.
pub fn init_logging(config: Option<&Config>) {
    let filter_str = match config {
        Some(config) if !config.debug.log_level.is_empty() => config.debug.log_level.clone(),
        _ => default_filter_string(),
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .init();
}

/// Default filter: `info` everywhere, winit's event noise cut to `warn`.
fn default_filter_string() -> String {
    "info,winit=warn,calloop=warn".to_string()
}

/// The default [`EnvFilter`], for callers that build their own subscriber.
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(default_filter_string())
}
