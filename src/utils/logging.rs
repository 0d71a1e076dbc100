//! Logging setup
//!
//! Logs go to stderr and to a daily-rolling file under the platform data
//! directory. `RUST_LOG` overrides the default filter.

use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_FILTER: &str = "project_board=info";
const LOG_FILE_PREFIX: &str = "project-board.log";

/// Default log directory, e.g. `~/.local/share/project-board/logs`.
pub fn default_log_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("project-board").join("logs"))
}

/// Install the global subscriber.
///
/// The returned guard flushes the file writer when dropped and must be kept
/// alive for the lifetime of the program. Without a log directory only the
/// stderr layer is installed.
pub fn init_logging(log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());
    let stderr_layer = fmt::layer().with_writer(std::io::stderr);

    let file = log_dir.and_then(|dir| {
        std::fs::create_dir_all(dir)
            .map_err(|e| eprintln!("Failed to create log directory {:?}: {}", dir, e))
            .ok()?;
        let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
        Some(tracing_appender::non_blocking(appender))
    });

    match file {
        Some((writer, guard)) => {
            let file_layer = fmt::layer().with_ansi(false).with_writer(writer);
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .with(file_layer)
                .try_init()
                .ok();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .try_init()
                .ok();
            None
        }
    }
}
