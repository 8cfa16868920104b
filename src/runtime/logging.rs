use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::{self, LogSettings};

/// Send `tracing` output to the log file. The terminal belongs to the UI.
///
/// `RUST_LOG` wins over `settings.level`; `debug` forces the debug level.
/// Keep the returned guard alive until exit so buffered lines get flushed.
/// Without a usable log file the player runs unlogged, after a warning on
/// stderr.
pub fn init(settings: &LogSettings, debug: bool) -> Option<WorkerGuard> {
    let Some(path) = log_path(settings.file.as_deref(), config::default_log_path()) else {
        eprintln!(
            "stetho: no log file location (set log.file, XDG_STATE_HOME or HOME); logging disabled"
        );
        return None;
    };

    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.level))
    };

    match install(&path, filter) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("stetho: cannot log to {}: {e}; logging disabled", path.display());
            None
        }
    }
}

fn install(path: &Path, filter: EnvFilter) -> anyhow::Result<WorkerGuard> {
    let dir = path.parent().unwrap_or(Path::new("."));
    std::fs::create_dir_all(dir)?;
    let file_name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "stetho.log".into());

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("cannot install log subscriber: {e}"))?;

    Ok(guard)
}

/// The configured log file, else the XDG default.
pub(super) fn log_path(file: Option<&str>, default: Option<PathBuf>) -> Option<PathBuf> {
    file.map(PathBuf::from).or(default)
}
