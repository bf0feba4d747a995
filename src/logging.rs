use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{self, RollingFileAppender};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logging system
///
/// # Arguments
/// * `verbose` - Log at DEBUG instead of INFO when `RUST_LOG` is unset
/// * `log_file` - Also write JSON lines to this file, rotated daily
pub fn init(verbose: bool, log_file: Option<PathBuf>) {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let file_layer = log_file.map(|path| {
        fmt::layer()
            .with_writer(file_appender(&path))
            .with_ansi(false)
            .json()
    });

    // `try_init` so a second call (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(stderr_layer)
        .with(file_layer)
        .try_init();
}

/// `RUST_LOG` wins; otherwise only this crate's events are shown.
fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("bookql={}", level)
}

/// Splits `path` into the directory and file prefix the daily appender wants.
fn appender_target(path: &Path) -> (PathBuf, PathBuf) {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let prefix = path.file_name().unwrap_or_else(|| OsStr::new("bookql.log"));
    (dir, PathBuf::from(prefix))
}

fn file_appender(path: &Path) -> RollingFileAppender {
    let (dir, prefix) = appender_target(path);
    let _ = std::fs::create_dir_all(&dir);
    rolling::daily(dir, prefix)
}
