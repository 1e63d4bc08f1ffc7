// Tracing setup.
// Logs go to a daily rolling file because the terminal belongs to the UI.
//
// Filter with RUST_LOG, e.g. `RUST_LOG=viva_review::state=debug`.
// Files land in `<data dir>/viva-review/logs/viva-review.log.<date>`.

use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::paths;

/// Initialize the file logging subscriber. Logging stays off if the log
/// directory cannot be created.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let logs_dir = match paths::ensure_logs_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            return;
        }
    };

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "viva-review.log");
    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .with_filter(filter);

    tracing_subscriber::registry().with(file_layer).init();
    tracing::info!(dir = %logs_dir.display(), version = env!("CARGO_PKG_VERSION"), "logging started");
}
