//! Console and file logging.
//!
//! Audit events emitted by the controllers (logins, logouts, quiz changes) are
//! appended to `activity.log`, errors from anywhere to `error.log`. Both files live
//! in the directory named by `LOG_DIR`.

use std::{
    fs::{self, File, OpenOptions},
    io,
    path::{Path, PathBuf},
    sync::Arc,
};

use dioxus_logger::tracing::{self, level_filters::LevelFilter, Level, Subscriber};
use tracing_subscriber::{
    filter::Targets, fmt, layer::SubscriberExt, registry::LookupSpan, util::SubscriberInitExt,
    EnvFilter, Layer,
};

pub const ACTIVITY_LOG: &str = "activity.log";
pub const ERROR_LOG: &str = "error.log";

const DEFAULT_LOG_DIR: &str = "logs";
const AUDIT_TARGET: &str = concat!(env!("CARGO_CRATE_NAME"), "::server::controller");

/// Log directory from `LOG_DIR`, `logs` when unset.
pub fn log_dir() -> PathBuf {
    std::env::var("LOG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_LOG_DIR))
}

/// Installs the global subscriber: console output filtered by `RUST_LOG` plus the
/// activity and error files.
///
/// Must run before the server starts so the framework keeps this subscriber. If
/// the log files cannot be opened the server still logs to the console.
pub fn init(dir: &Path) {
    let mut console_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    if let Ok(directive) = "hyper_util=warn".parse() {
        console_filter = console_filter.add_directive(directive);
    }
    let console = fmt::layer().with_filter(console_filter);

    let (files, file_err) = match file_layers(dir) {
        Ok(files) => (Some(files), None),
        Err(err) => (None, Some(err)),
    };

    if let Err(err) = tracing_subscriber::registry()
        .with(console)
        .with(files)
        .try_init()
    {
        tracing::warn!("Logging already initialized: {}", err);
    }

    if let Some(err) = file_err {
        tracing::warn!("File logging disabled, cannot open {}: {}", dir.display(), err);
    }
}

/// Builds the layers writing `activity.log` and `error.log` inside `dir`.
///
/// Existing files are appended to, never truncated.
///
/// # Returns
/// - `Ok(layer)` - Both files opened, `dir` created if missing
/// - `Err(io::Error)` - Directory or a file could not be opened for writing
pub fn file_layers<S>(dir: &Path) -> io::Result<Box<dyn Layer<S> + Send + Sync>>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    fs::create_dir_all(dir)?;

    let activity = fmt::layer()
        .with_ansi(false)
        .with_writer(Arc::new(open_append(&dir.join(ACTIVITY_LOG))?))
        .with_filter(Targets::new().with_target(AUDIT_TARGET, Level::INFO));

    let errors = fmt::layer()
        .with_ansi(false)
        .with_writer(Arc::new(open_append(&dir.join(ERROR_LOG))?))
        .with_filter(LevelFilter::ERROR);

    Ok(activity.and_then(errors).boxed())
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}
