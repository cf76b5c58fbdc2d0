//! Logging Infrastructure
//!
//! fmt subscriber on stdout, or a daily rolling file when a log directory is
//! configured. `RUST_LOG` takes precedence over the configured level.

use std::path::Path;

use tracing_subscriber::EnvFilter;

const LOG_FILE_PREFIX: &str = "pricing-server";

/// Initialize the logger
pub fn init_logger() {
    init_logger_with_file(None, false, None);
}

/// Initialize the logger with optional JSON lines and file output
pub fn init_logger_with_file(log_level: Option<&str>, json: bool, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    let file_appender = log_dir
        .filter(|dir| ensure_dir(Path::new(dir)))
        .map(|dir| tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX));

    // A second initialization (tests, embedding) keeps the first subscriber
    let _ = match (json, file_appender) {
        (true, Some(writer)) => subscriber.json().with_writer(writer).try_init(),
        (true, None) => subscriber.json().try_init(),
        (false, Some(writer)) => subscriber.with_ansi(false).with_writer(writer).try_init(),
        (false, None) => subscriber.try_init(),
    };
}

fn ensure_dir(path: &Path) -> bool {
    if path.is_dir() {
        return true;
    }
    match std::fs::create_dir_all(path) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("Cannot create log directory {}: {}", path.display(), e);
            false
        }
    }
}
