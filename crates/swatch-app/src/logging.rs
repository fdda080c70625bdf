//! Tracing setup.
//!
//! The subscriber is installed before the config is read, with a filter
//! that can be swapped once `logging.level` is known. Config loading
//! therefore logs through the same subscriber as the rest of the run.

use swatch_config::schema::LogLevel;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

/// Handle for replacing the active filter after startup.
pub type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// Build a filter from a directive, layered under `RUST_LOG`.
///
/// Invalid directives are ignored, leaving `swatch=info` in effect.
pub fn env_filter(directive: &str, env: Option<&str>) -> EnvFilter {
    let mut directives = vec![LogLevel::default().directive(), directive];
    directives.extend(env);
    EnvFilter::new(directives.join(","))
}

/// A reloadable filter layer and its handle.
pub fn filter_layer(directive: &str) -> (reload::Layer<EnvFilter, Registry>, FilterHandle) {
    let env = std::env::var("RUST_LOG").ok();
    reload::Layer::new(env_filter(directive, env.as_deref()))
}

/// Install the global subscriber with a provisional filter.
pub fn init(cli_directive: Option<&str>) -> FilterHandle {
    let directive = cli_directive.unwrap_or(LogLevel::default().directive());
    let (filter, handle) = filter_layer(directive);
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
    handle
}

/// Swap in the configured level. An explicit CLI directive wins.
pub fn apply_level(handle: &FilterHandle, cli_directive: Option<&str>, level: LogLevel) {
    if cli_directive.is_some() {
        return;
    }
    let env = std::env::var("RUST_LOG").ok();
    if let Err(e) = handle.reload(env_filter(level.directive(), env.as_deref())) {
        tracing::warn!("failed to apply log level {level:?}: {e}");
    }
}
