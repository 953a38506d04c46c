use crate::error::{CliError, CliResult};

use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use fp_config::Config;
use log::{LevelFilter, debug};

/// Initialize the fern logger from the logging section of the config.
///
/// Console output goes to stderr so command output on stdout stays clean.
/// A configured log file lives inside the data directory and gets the plain
/// format regardless of the `colored` flag.
#[track_caller]
pub fn initialize(config: &Config) -> CliResult<()> {
    let level_filter = LevelFilter::from(config.logging.level);

    let base_dispatch = Dispatch::new().level(level_filter);

    let dispatch = if let Some(ref file_name) = config.logging.file {
        let log_path = config.storage.data_dir()?.join(file_name);
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| CliError::io("could not create log directory", e))?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .map_err(|e| {
                CliError::logger(format!("Failed to open log file {}: {e}", log_path.display()))
            })?;

        Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{date} - {level}] {message} [{file}:{line}]",
                    date = humantime::format_rfc3339(SystemTime::now()),
                    level = record.level(),
                    message = message,
                    file = record.file().unwrap_or("unknown"),
                    line = record.line().unwrap_or(0),
                ))
            })
            .chain(file)
    } else if config.logging.colored {
        let colors = ColoredLevelConfig::new()
            .trace(Color::Magenta)
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red);

        Dispatch::new()
            .format(move |out, message, record| {
                out.finish(format_args!(
                    "[{date} - {level}] {message} [{file}:{line}]",
                    date = humantime::format_rfc3339(SystemTime::now()),
                    level = colors.color(record.level()),
                    message = message,
                    file = record.file().unwrap_or("unknown"),
                    line = record.line().unwrap_or(0),
                ))
            })
            .chain(std::io::stderr())
    } else {
        Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{date} - {level}] {message} [{file}:{line}]",
                    date = humantime::format_rfc3339(SystemTime::now()),
                    level = record.level(),
                    message = message,
                    file = record.file().unwrap_or("unknown"),
                    line = record.line().unwrap_or(0),
                ))
            })
            .chain(std::io::stderr())
    };

    base_dispatch
        .chain(dispatch)
        .apply()
        .map_err(|e| CliError::logger(format!("Failed to initialize logger: {e}")))?;

    debug!("Logger initialized: level={level_filter:?}");

    Ok(())
}
