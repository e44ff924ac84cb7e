//! Error handling.
//!
//! This module provides the error types for:
//! - **Rendering**: a sink or workbook rejected output ([`RenderError`])
//! - **Export**: an artifact could not be produced on disk ([`ExportError`])
//! - **Session**: the ingestion layer could not read, decode or place a bundle
//! - **Initialization**: logger setup
//!
//! Malformed records are never errors: missing values render as empty cells.

mod types;

// Re-export public API
pub use types::{ExportError, InitializationError, RenderError, SessionError};
