//! Tracing setup
//!
//! One-shot commands log to stderr. Interactive mode logs to a daily file so
//! log lines do not break up the search box.

use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (falls back to `RUST_LOG`)
const LOG_ENV: &str = "QUIP_LOG";

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default))
}

/// Log to stderr
pub fn init_stderr() {
    let _ = tracing_subscriber::registry()
        .with(env_filter("warn"))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

/// Directory for log files
pub fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("quip")
        .join("logs")
}

/// Log to `<log_dir>/quip.log.<date>`
///
/// Keep the returned guard alive for as long as logs should be flushed.
/// Falls back to stderr when the log directory cannot be created.
pub fn init_file() -> Option<WorkerGuard> {
    let dir = log_dir();
    if let Err(e) = std::fs::create_dir_all(&dir) {
        init_stderr();
        tracing::warn!("Could not create log directory {}: {}", dir.display(), e);
        return None;
    }

    let appender = tracing_appender::rolling::daily(&dir, "quip.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let initialized = tracing_subscriber::registry()
        .with(env_filter("info"))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .is_ok();

    if !initialized {
        return None;
    }

    tracing::info!(log_dir = %dir.display(), "tracing initialized");
    Some(guard)
}
