//! Export orchestration.
//!
//! Runs both renderers over the same bundle. Each artifact is produced
//! independently and reported on its own, so a text failure never hides a
//! workbook success (or the reverse). Also provides single-category entry
//! points that render one collection into its own file.

use std::path::Path;

use log::{error, info};

use crate::error_handling::ExportError;
use crate::models::{
    CallLogEntry, Contact, DeviceInfo, DocumentMeta, MediaFileMeta, RecordBundle, SmsMessage,
};

use super::category::CategoryRecords;
use super::spreadsheet::SpreadsheetRenderer;
use super::text::TextRenderer;
use super::types::{ArtifactSummary, ExportFormat, ExportOptions, ExportReport, ExportTargets};

/// Renders `bundle` to both the text and the workbook artifact.
///
/// Both artifacts are always attempted; check [`ExportReport::failures`] for
/// per-artifact errors.
pub fn export_all(
    bundle: &RecordBundle,
    text_path: &Path,
    spreadsheet_path: &Path,
    options: &ExportOptions,
) -> ExportReport {
    let targets = ExportTargets {
        text: Some(text_path.to_path_buf()),
        spreadsheet: Some(spreadsheet_path.to_path_buf()),
    };
    export_targets(bundle, &targets, options)
}

/// Renders `bundle` to whichever artifacts `targets` names.
pub fn export_targets(
    bundle: &RecordBundle,
    targets: &ExportTargets,
    options: &ExportOptions,
) -> ExportReport {
    let records = CategoryRecords::present_in(bundle);
    if records.is_empty() {
        info!("Record bundle is empty; artifacts will carry no sections");
    }

    let formatter = options.formatter();
    let text = targets.text.as_deref().map(|path| {
        let outcome = TextRenderer::new(formatter).write_file(&records, path);
        log_failure(&outcome);
        outcome
    });
    let spreadsheet = targets.spreadsheet.as_deref().map(|path| {
        let outcome = SpreadsheetRenderer::new(formatter).write_file(&records, path);
        log_failure(&outcome);
        outcome
    });

    ExportReport { text, spreadsheet }
}

/// Renders only the text artifact for `bundle`.
pub fn export_text(
    bundle: &RecordBundle,
    path: &Path,
    options: &ExportOptions,
) -> Result<ArtifactSummary, ExportError> {
    TextRenderer::new(options.formatter()).write_file(&CategoryRecords::present_in(bundle), path)
}

/// Renders only the workbook artifact for `bundle`.
pub fn export_spreadsheet(
    bundle: &RecordBundle,
    path: &Path,
    options: &ExportOptions,
) -> Result<ArtifactSummary, ExportError> {
    SpreadsheetRenderer::new(options.formatter())
        .write_file(&CategoryRecords::present_in(bundle), path)
}

/// Renders a single category into its own file.
///
/// Unlike the combined export, the section or sheet is written even when the
/// collection is empty (headers only).
pub fn export_category(
    records: CategoryRecords<'_>,
    format: ExportFormat,
    path: &Path,
    options: &ExportOptions,
) -> Result<ArtifactSummary, ExportError> {
    let formatter = options.formatter();
    let records = [records];
    match format {
        ExportFormat::Csv => TextRenderer::new(formatter).write_file(&records, path),
        ExportFormat::Xlsx => SpreadsheetRenderer::new(formatter).write_file(&records, path),
    }
}

/// Writes a single-sheet workbook of contacts.
pub fn export_contacts(
    contacts: &[Contact],
    path: &Path,
    options: &ExportOptions,
) -> Result<ArtifactSummary, ExportError> {
    export_category(CategoryRecords::Contacts(contacts), ExportFormat::Xlsx, path, options)
}

/// Writes a single-sheet workbook of text messages.
pub fn export_sms(
    messages: &[SmsMessage],
    path: &Path,
    options: &ExportOptions,
) -> Result<ArtifactSummary, ExportError> {
    export_category(CategoryRecords::Sms(messages), ExportFormat::Xlsx, path, options)
}

/// Writes a single-sheet workbook of call-log entries.
pub fn export_call_logs(
    entries: &[CallLogEntry],
    path: &Path,
    options: &ExportOptions,
) -> Result<ArtifactSummary, ExportError> {
    export_category(CategoryRecords::CallLogs(entries), ExportFormat::Xlsx, path, options)
}

/// Writes a single-sheet workbook of media file metadata.
pub fn export_media_files(
    files: &[MediaFileMeta],
    path: &Path,
    options: &ExportOptions,
) -> Result<ArtifactSummary, ExportError> {
    export_category(CategoryRecords::MediaFiles(files), ExportFormat::Xlsx, path, options)
}

/// Writes a single-sheet workbook of document metadata.
pub fn export_documents(
    documents: &[DocumentMeta],
    path: &Path,
    options: &ExportOptions,
) -> Result<ArtifactSummary, ExportError> {
    export_category(CategoryRecords::Documents(documents), ExportFormat::Xlsx, path, options)
}

/// Writes a single-sheet workbook describing the device.
pub fn export_device_info(
    device: &DeviceInfo,
    path: &Path,
    options: &ExportOptions,
) -> Result<ArtifactSummary, ExportError> {
    export_category(CategoryRecords::DeviceInfo(device), ExportFormat::Xlsx, path, options)
}

fn log_failure(outcome: &Result<ArtifactSummary, ExportError>) {
    if let Err(e) = outcome {
        error!("Export failed: {}", e);
    }
}
