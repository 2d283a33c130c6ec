//! Kalasetu binary entrypoint kept minimal. The runtime lives in `app`.

mod app;
mod args;
mod cards;
mod events;
mod fixtures;
mod i18n;
mod model;
mod state;
mod theme;
mod ui;

use std::fmt;
use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;

/// Timestamp formatter for the log file ("YYYY-MM-DDTHH:MM:SS", UTC).
struct KalasetuTimer;

impl tracing_subscriber::fmt::time::FormatTime for KalasetuTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S");
        write!(w, "{ts}")
    }
}

/// Keeps the non-blocking log writer alive for the process lifetime.
static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Directory for the application log file, created if needed.
///
/// Details:
/// - `~/.config/kalasetu/logs`, with a relative fallback when `HOME` is unset
fn logs_dir() -> PathBuf {
    let mut dir = std::env::var_os("HOME").map_or_else(PathBuf::new, PathBuf::from);
    dir.push(".config");
    dir.push("kalasetu");
    dir.push("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

#[tokio::main]
async fn main() {
    let cli = args::Args::parse();

    // Initialize tracing logger writing to ~/.config/kalasetu/logs/kalasetu.log
    {
        let mut log_path = logs_dir();
        log_path.push("kalasetu.log");
        let level = args::determine_log_level(&cli);
        match std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
        {
            Ok(file) => {
                let (non_blocking, guard) = tracing_appender::non_blocking(file);
                let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter)
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(non_blocking)
                    .with_timer(KalasetuTimer)
                    .init();
                let _ = LOG_GUARD.set(guard);
                tracing::info!(path = %log_path.display(), "logging initialized");
            }
            Err(e) => {
                // Fallback: init stderr logger to avoid blocking startup
                let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter)
                    .with_target(false)
                    .with_ansi(true)
                    .with_timer(KalasetuTimer)
                    .init();
                tracing::warn!(error = %e, "failed to open log file; using stderr");
            }
        }
    }

    tracing::info!("Kalasetu starting");
    if let Err(err) = app::run(&cli).await {
        tracing::error!(error = ?err, "Application error");
    }
    tracing::info!("Kalasetu exited");
}
