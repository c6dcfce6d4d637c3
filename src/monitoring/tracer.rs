/*!
 * Structured Tracing
 *
 * The primitives emit `tracing` events (acquire/release, queue mutations,
 * contract violations). This module installs a subscriber for them.
 */

use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError,
    EnvFilter,
};

/// Environment variable that switches output to JSON
pub const TRACE_JSON_ENV: &str = "PRIMITIVES_TRACE_JSON";

/// Initialize structured tracing
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - PRIMITIVES_TRACE_JSON: Enable JSON output (default: false)
///
/// # Panics
///
/// Panics if a global subscriber is already installed.
pub fn init_tracing() {
    if let Err(e) = try_init_tracing() {
        panic!("failed to initialize tracing: {e}");
    }
}

/// Initialize structured tracing, failing if a subscriber is already installed
pub fn try_init_tracing() -> Result<(), TryInitError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(env_filter);

    if json_requested() {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_thread_names(true)
                    .with_current_span(true)
                    .with_span_list(true),
            )
            .try_init()?;
        tracing::info!("Structured tracing initialized with JSON output");
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .compact(),
            )
            .try_init()?;
        tracing::info!("Structured tracing initialized");
    }
    Ok(())
}

fn json_requested() -> bool {
    std::env::var(TRACE_JSON_ENV)
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false)
}
