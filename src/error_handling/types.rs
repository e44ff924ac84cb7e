//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use std::io;
use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

use crate::export::Category;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Renders `Some(category)` as ` while rendering <category>`, `None` as nothing.
fn during(category: &Option<Category>) -> String {
    category
        .map(|c| format!(" while rendering {}", c))
        .unwrap_or_default()
}

/// A failure while rendering into a sink that has no path of its own.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The sink rejected a write.
    #[error("write failed{}: {source}", during(.category))]
    Io {
        category: Option<Category>,
        #[source]
        source: io::Error,
    },

    /// The workbook rejected a cell, a sheet, or the final save.
    #[error("workbook error{}: {source}", during(.category))]
    Spreadsheet {
        category: Option<Category>,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },
}

impl RenderError {
    /// The category being rendered when the failure happened, if any.
    pub fn category(&self) -> Option<Category> {
        match self {
            RenderError::Io { category, .. } | RenderError::Spreadsheet { category, .. } => {
                *category
            }
        }
    }

    /// Attaches the artifact path, producing the error reported to callers.
    pub fn at(self, path: impl Into<PathBuf>) -> ExportError {
        let path = path.into();
        match self {
            RenderError::Io { category, source } => ExportError::Io {
                path,
                category,
                source,
            },
            RenderError::Spreadsheet { category, source } => ExportError::Spreadsheet {
                path,
                category,
                source,
            },
        }
    }
}

/// A failure producing one export artifact on disk.
///
/// Carries the destination path and, when known, the category whose section
/// or sheet was being rendered.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Destination unwritable, disk full, permission denied.
    #[error("I/O failure writing {}{}: {source}", .path.display(), during(.category))]
    Io {
        path: PathBuf,
        category: Option<Category>,
        #[source]
        source: io::Error,
    },

    /// The workbook could not be assembled or saved.
    #[error("Spreadsheet failure writing {}{}: {source}", .path.display(), during(.category))]
    Spreadsheet {
        path: PathBuf,
        category: Option<Category>,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },
}

impl ExportError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ExportError::Io { path, .. } | ExportError::Spreadsheet { path, .. } => path,
        }
    }

    pub fn category(&self) -> Option<Category> {
        match self {
            ExportError::Io { category, .. } | ExportError::Spreadsheet { category, .. } => {
                *category
            }
        }
    }
}

/// Error types for the session (ingestion) layer.
#[derive(Error, Debug)]
pub enum SessionError {
    /// The bundle file could not be read.
    #[error("Failed to read bundle {}: {source}", .path.display())]
    ReadBundle {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The bundle JSON did not decode.
    #[error("Failed to decode record bundle: {0}")]
    Decode(#[from] serde_json::Error),

    /// The session directory could not be created.
    #[error("Failed to create session directory {}: {source}", .path.display())]
    SessionDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
