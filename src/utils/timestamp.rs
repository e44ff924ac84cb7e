//! Timestamp and optional-number formatting.
//!
//! Records carry dates as epoch milliseconds. They render as
//! `YYYY-MM-DD HH:MM:SS` in one time zone per export run, chosen by the caller
//! through [`TimestampFormatter`]. Nothing here holds shared state; build a
//! formatter per call.

use chrono::{DateTime, Local, TimeZone, Utc};
use log::debug;

use crate::config::{TimeZoneMode, TIMESTAMP_FORMAT};

/// Formats epoch-millisecond timestamps in a fixed time zone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimestampFormatter {
    zone: TimeZoneMode,
}

impl TimestampFormatter {
    pub fn new(zone: TimeZoneMode) -> Self {
        Self { zone }
    }

    /// Formatter rendering in UTC.
    pub fn utc() -> Self {
        Self::new(TimeZoneMode::Utc)
    }

    pub fn zone(&self) -> TimeZoneMode {
        self.zone
    }

    /// Renders `epoch_millis`, or `""` when it is absent or out of range.
    pub fn format(&self, epoch_millis: Option<i64>) -> String {
        let Some(millis) = epoch_millis else {
            return String::new();
        };

        let rendered = match self.zone {
            TimeZoneMode::Utc => render_in(&Utc, millis),
            TimeZoneMode::Local => render_in(&Local, millis),
        };

        rendered.unwrap_or_else(|| {
            debug!("Dropping unrepresentable timestamp {}", millis);
            String::new()
        })
    }
}

fn render_in<Tz>(zone: &Tz, millis: i64) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let instant: DateTime<Tz> = zone.timestamp_millis_opt(millis).single()?;
    Some(instant.format(TIMESTAMP_FORMAT).to_string())
}

/// Renders `epoch_millis` in UTC, or `""` when it is absent.
///
/// # Examples
///
/// ```
/// use record_export::utils::format_timestamp;
///
/// assert_eq!(format_timestamp(None), "");
/// assert_eq!(format_timestamp(Some(1704067200000)), "2024-01-01 00:00:00");
/// ```
pub fn format_timestamp(epoch_millis: Option<i64>) -> String {
    TimestampFormatter::utc().format(epoch_millis)
}

/// Renders an optional integer as decimal, or `""` when it is absent.
///
/// Never renders `"null"` or a placeholder zero.
pub fn format_optional_integer(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
