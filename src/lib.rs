//! record_export library: renders device record bundles into export artifacts
//!
//! This library takes a bundle of device-collected records (contacts, text
//! messages, call logs, media and document metadata, device attributes) and
//! renders it into two human-readable artifacts:
//! - a merged comma-delimited text file with one section per category
//! - a workbook with one styled sheet per category
//!
//! The `session` module wraps this in the on-disk layout used for uploads: one
//! timestamped directory per upload holding both artifacts and the raw files.
//!
//! # Example
//!
//! ```no_run
//! use record_export::export::{export_all, ExportOptions};
//! use record_export::RecordBundle;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let bundle = RecordBundle::from_json(&std::fs::read_to_string("bundle.json")?)?;
//! let report = export_all(
//!     &bundle,
//!     Path::new("out/data.csv"),
//!     Path::new("out/data.xlsx"),
//!     &ExportOptions::default(),
//! );
//! for failure in report.failures() {
//!     eprintln!("{}", failure);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Every export call is synchronous and self-contained; concurrent calls are
//! safe as long as they write to different paths.

pub mod config;
pub mod error_handling;
pub mod export;
pub mod initialization;
pub mod models;
pub mod session;
pub mod utils;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, TimeZoneMode};
pub use error_handling::{ExportError, RenderError, SessionError};
pub use export::{export_all, Category, ExportFormat, ExportOptions, ExportReport};
pub use models::{
    CallLogEntry, Contact, DeviceInfo, DocumentMeta, MediaFileMeta, RecordBundle, SmsMessage,
};
pub use session::{ingest, ingest_from_path, RawFile, SessionReport};
