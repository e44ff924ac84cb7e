//! Merged delimited-text export.
//!
//! Renders every present category into one UTF-8 document:
//!
//! ```text
//! <BOM>=== 연락처 ===
//! 이름,전화번호,이메일
//! A,1,
//! B,2,x@y
//!
//! === SMS ===
//! ...
//! ```
//!
//! Every data field goes through [`escape_delimited_text`]; the fixed header
//! literals need no escaping.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::{info, warn};

use crate::config::UTF8_BOM;
use crate::error_handling::{ExportError, RenderError};
use crate::models::RecordBundle;
use crate::utils::{escape_delimited_text, TimestampFormatter};

use super::category::{CategoryRecords, Section};
use super::types::{ArtifactSummary, ExportFormat};

/// Renders categories into a delimited-text sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer {
    formatter: TimestampFormatter,
}

impl TextRenderer {
    pub fn new(formatter: TimestampFormatter) -> Self {
        Self { formatter }
    }

    /// Renders every present category of `bundle` into `sink`.
    ///
    /// An empty bundle produces just the byte-order marker.
    pub fn render_bundle<W: Write>(
        &self,
        bundle: &RecordBundle,
        sink: W,
    ) -> Result<(), RenderError> {
        self.render(&CategoryRecords::present_in(bundle), sink)
    }

    /// Renders `records` in the given order, one section each, then flushes.
    ///
    /// Sections are written even for an empty collection; callers decide
    /// presence (see [`CategoryRecords::present_in`]).
    pub fn render<W: Write>(
        &self,
        records: &[CategoryRecords<'_>],
        mut sink: W,
    ) -> Result<(), RenderError> {
        sink.write_all(UTF8_BOM.as_bytes())
            .map_err(|source| RenderError::Io {
                category: None,
                source,
            })?;

        for category_records in records {
            let section = category_records.to_section(&self.formatter);
            write_section(&mut sink, &section).map_err(|source| RenderError::Io {
                category: Some(section.category),
                source,
            })?;
        }

        sink.flush().map_err(|source| RenderError::Io {
            category: None,
            source,
        })
    }

    /// Renders `records` into a new file at `path`.
    ///
    /// On failure the partial file is removed, so a path either holds a
    /// complete document or nothing.
    pub fn write_file(
        &self,
        records: &[CategoryRecords<'_>],
        path: &Path,
    ) -> Result<ArtifactSummary, ExportError> {
        let file = File::create(path).map_err(|source| ExportError::Io {
            path: path.to_path_buf(),
            category: None,
            source,
        })?;

        if let Err(e) = self.render(records, BufWriter::new(file)) {
            discard_partial(path);
            return Err(e.at(path));
        }

        let categories = records.iter().map(|r| r.category()).collect::<Vec<_>>();
        info!(
            "Wrote {} ({} section{})",
            path.display(),
            categories.len(),
            if categories.len() == 1 { "" } else { "s" }
        );

        Ok(ArtifactSummary {
            format: ExportFormat::Csv,
            path: path.to_path_buf(),
            categories,
        })
    }
}

fn write_section<W: Write>(sink: &mut W, section: &Section) -> io::Result<()> {
    writeln!(sink, "=== {} ===", section.label())?;
    writeln!(sink, "{}", section.columns().join(","))?;

    for row in &section.rows {
        let fields: Vec<_> = row
            .iter()
            .map(|cell| escape_delimited_text(Some(cell.as_str())))
            .collect();
        writeln!(sink, "{}", fields.join(","))?;
    }

    writeln!(sink)
}

pub(crate) fn discard_partial(path: &Path) {
    if let Err(e) = fs::remove_file(path) {
        if e.kind() != io::ErrorKind::NotFound {
            warn!("Failed to remove partial file {}: {}", path.display(), e);
        }
    }
}
