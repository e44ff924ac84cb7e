//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (file names, formats, limits)
//! - Library configuration and its option enums

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel, TimeZoneMode};
