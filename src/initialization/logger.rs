//! Logger initialization.
//!
//! Configures `env_logger` for the binary. Library code only uses the `log`
//! macros and never installs a logger itself.

use std::io::Write;

use colored::*;
use env_logger::fmt::Formatter;
use log::{Level, LevelFilter, Record};

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

/// Initializes the logger with the specified level and format.
///
/// `RUST_LOG` is read first; `level` then overrides it for this crate, so
/// `--log-level` on the command line always wins for our own messages while
/// `RUST_LOG` can still tune dependencies.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Quick debugging without CLI flags
/// RUST_LOG=debug record_export ingest bundle.json
///
/// # Per-module filtering
/// RUST_LOG=record_export::session=debug record_export ingest bundle.json
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    // The zip writer behind the workbook output is chatty at debug level
    builder.filter_module("zip", LevelFilter::Warn);
    builder.filter_module("record_export", level);

    match format {
        LogFormat::Json => builder.format(write_json),
        LogFormat::Plain => {
            colored::control::set_override(true);
            builder.format(write_plain)
        }
    };

    // try_init: tests may initialize more than once per process
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

/// One JSON object per line: `ts` (epoch ms), `level`, `target`, `msg`.
fn write_json(buf: &mut Formatter, record: &Record<'_>) -> std::io::Result<()> {
    writeln!(buf, "{}", json_line(record))
}

fn json_line(record: &Record<'_>) -> String {
    serde_json::json!({
        "ts": chrono::Utc::now().timestamp_millis(),
        "level": record.level().to_string(),
        "target": record.target(),
        "msg": record.args().to_string(),
    })
    .to_string()
}

fn write_plain(buf: &mut Formatter, record: &Record<'_>) -> std::io::Result<()> {
    let level = record.level();
    writeln!(
        buf,
        "{} {} [{}] {}",
        level_emoji(level),
        record.target().cyan(),
        colored_level(level),
        record.args()
    )
}

fn colored_level(level: Level) -> ColoredString {
    let text = level.to_string();
    match level {
        Level::Error => text.red(),
        Level::Warn => text.yellow(),
        Level::Info => text.green(),
        Level::Debug => text.blue(),
        Level::Trace => text.purple(),
    }
}

fn level_emoji(level: Level) -> &'static str {
    match level {
        Level::Error => "❌",
        Level::Warn => "⚠️",
        Level::Info => "✔️",
        Level::Debug => "🔍",
        Level::Trace => "🔬",
    }
}
