//! Pure formatting helpers shared by both renderers.
//!
//! This module provides:
//! - Delimited-text field escaping
//! - Timestamp and optional-number formatting
//! - Worksheet name sanitizing

mod escape;
pub mod sanitize;
mod timestamp;

pub use escape::escape_delimited_text;
pub use sanitize::{sanitize_sheet_name, SheetNamer};
pub use timestamp::{format_optional_integer, format_timestamp, TimestampFormatter};
