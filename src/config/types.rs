//! Library configuration and the option enums shared with the CLI.

use std::path::PathBuf;

use clap::ValueEnum;
use log::LevelFilter;

use crate::config::constants::{
    DEFAULT_UPLOAD_DIR, SPREADSHEET_EXPORT_FILE_NAME, TEXT_EXPORT_FILE_NAME,
};
use crate::export::ExportFormat;

/// Verbosity of this crate's log output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    /// Session and artifact progress (default)
    Info,
    /// Adds dropped-value notices from the formatters
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Shape of each log line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Colored, one human-readable line per message
    Plain,
    /// One JSON object per line
    Json,
}

/// Time zone used to render epoch-millisecond timestamps.
///
/// One zone applies to a whole export run. The core never consults the
/// environment on its own; `Local` is an explicit opt-in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum TimeZoneMode {
    /// Coordinated Universal Time (default)
    #[default]
    Utc,
    /// The host's local time zone
    Local,
}

/// Settings for the session layer: where session directories are created,
/// which artifacts are rendered into them, and how timestamps are formatted.
///
/// # Examples
///
/// ```no_run
/// use record_export::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     upload_dir: PathBuf::from("/var/lib/record_export"),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory for session directories
    pub upload_dir: PathBuf,

    /// Time zone for rendered timestamps
    pub time_zone: TimeZoneMode,

    /// Artifacts to render for each session
    pub formats: Vec<ExportFormat>,

    /// File name of the merged text artifact
    pub text_file_name: String,

    /// File name of the workbook artifact
    pub spreadsheet_file_name: String,

    pub log_level: LogLevel,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            upload_dir: PathBuf::from(DEFAULT_UPLOAD_DIR),
            time_zone: TimeZoneMode::Utc,
            formats: vec![ExportFormat::Csv, ExportFormat::Xlsx],
            text_file_name: TEXT_EXPORT_FILE_NAME.to_string(),
            spreadsheet_file_name: SPREADSHEET_EXPORT_FILE_NAME.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Returns true if `format` should be rendered for each session.
    pub fn wants(&self, format: ExportFormat) -> bool {
        self.formats.contains(&format)
    }
}
