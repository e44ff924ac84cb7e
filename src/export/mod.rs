//! Export functionality for record bundles.
//!
//! This module renders a [`RecordBundle`](crate::models::RecordBundle) into:
//! - a merged delimited-text document (one section per category)
//! - a workbook (one sheet per category)
//!
//! Both formats share the category table in `category`, so labels, column
//! order and field formatting cannot drift apart.

mod category;
mod orchestrator;
mod spreadsheet;
mod text;
mod types;

pub use category::{Category, CategoryRecords, Section, DEVICE_INFO_LABELS};
pub use orchestrator::{
    export_all, export_call_logs, export_category, export_contacts, export_device_info,
    export_documents, export_media_files, export_sms, export_spreadsheet, export_targets,
    export_text,
};
pub use spreadsheet::SpreadsheetRenderer;
pub use text::TextRenderer;
pub use types::{
    ArtifactSummary, ExportFormat, ExportOptions, ExportReport, ExportTargets,
};
