//! Tracing subscriber initialisation

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Install a global `fmt` subscriber filtered by `RUST_LOG` (default `info`).
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_logging(json: bool) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false);

    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
