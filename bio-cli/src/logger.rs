use crate::{CliError, Result as CliResult};

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback, Output};
use log::{Record, debug};

/// Initialize logger with fern
///
/// Console output goes to stderr so stdout carries only command output.
///
/// # Arguments
/// * `log_level` - Log level filter
/// * `log_file` - Optional path to log file. None = stderr, Some = file output
/// * `colored` - Enable colored output (ignored when logging to file)
pub fn initialize(
    log_level: bio_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> CliResult<()> {
    let level_filter = log_level.0;

    let output: Output = match &log_file {
        Some(path) => open_log_file(path)?.into(),
        None => std::io::stderr().into(),
    };
    let colors = (colored && log_file.is_none()).then(level_colors);

    Dispatch::new()
        .level(level_filter)
        .format(move |out, message, record| match &colors {
            Some(colors) => format_line(out, message, record, colors.color(record.level())),
            None => format_line(out, message, record, record.level()),
        })
        .chain(output)
        .apply()
        .map_err(|e| CliError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    match log_file {
        Some(ref path) => debug!(
            "Logger initialized: level={:?}, file={}",
            level_filter,
            path.display()
        ),
        None => debug!("Logger initialized: level={:?}, stderr", level_filter),
    }

    Ok(())
}

/// `[<rfc3339 time> - <level>] <message> [<file>:<line>]`
fn format_line(
    out: FormatCallback,
    message: &fmt::Arguments,
    record: &Record,
    level: impl fmt::Display,
) {
    out.finish(format_args!(
        "[{} - {level}] {message} [{}:{}]",
        humantime::format_rfc3339(SystemTime::now()),
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0),
    ))
}

fn level_colors() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
}

/// Opens `path` for appending, creating its directory first.
pub(crate) fn open_log_file(path: &Path) -> CliResult<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| CliError::Logger {
            message: format!("Failed to create log directory {}: {e}", parent.display()),
        })?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| CliError::Logger {
            message: format!("Failed to open log file {}: {e}", path.display()),
        })
}
