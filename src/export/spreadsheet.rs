//! Workbook export.
//!
//! One sheet per present category, named after its label. Row 0 holds the
//! column headers in bold on a light-grey fill; data rows start at row 1 and
//! carry plain values (no delimiter escaping). Every record gets a row with one
//! cell per column: empty values are written as text-formatted blank cells.
//! Once every sheet is populated, all columns are auto-fitted to their content.

use std::fs::File;
use std::io::{Seek, Write};
use std::path::Path;

use log::info;
use rust_xlsxwriter::{Color, ColNum, Format, FormatPattern, RowNum, Workbook, XlsxError};

use crate::error_handling::{ExportError, RenderError};
use crate::models::RecordBundle;
use crate::utils::{SheetNamer, TimestampFormatter};

use super::category::{CategoryRecords, Section};
use super::text::discard_partial;
use super::types::{ArtifactSummary, ExportFormat};

/// Renders categories into a workbook.
#[derive(Debug, Clone)]
pub struct SpreadsheetRenderer {
    formatter: TimestampFormatter,
    header_format: Format,
    body_format: Format,
}

impl Default for SpreadsheetRenderer {
    fn default() -> Self {
        Self::new(TimestampFormatter::default())
    }
}

impl SpreadsheetRenderer {
    pub fn new(formatter: TimestampFormatter) -> Self {
        Self {
            formatter,
            header_format: header_format(),
            body_format: body_format(),
        }
    }

    /// Builds an in-memory workbook holding one sheet per entry of `records`.
    pub fn build_workbook(&self, records: &[CategoryRecords<'_>]) -> Result<Workbook, RenderError> {
        let mut workbook = Workbook::new();
        let mut namer = SheetNamer::new();

        for category_records in records {
            let section = category_records.to_section(&self.formatter);
            self.add_sheet(&mut workbook, &mut namer, &section)
                .map_err(|source| RenderError::Spreadsheet {
                    category: Some(section.category),
                    source,
                })?;
        }

        for worksheet in workbook.worksheets_mut() {
            worksheet.autofit();
        }

        Ok(workbook)
    }

    /// Renders every present category of `bundle` into `sink`.
    pub fn render_bundle<W>(&self, bundle: &RecordBundle, sink: W) -> Result<(), RenderError>
    where
        W: Write + Seek + Send,
    {
        self.render(&CategoryRecords::present_in(bundle), sink)
    }

    /// Renders `records` into `sink` as a complete workbook file.
    pub fn render<W>(&self, records: &[CategoryRecords<'_>], sink: W) -> Result<(), RenderError>
    where
        W: Write + Seek + Send,
    {
        let mut workbook = self.build_workbook(records)?;
        workbook
            .save_to_writer(sink)
            .map_err(|source| RenderError::Spreadsheet {
                category: None,
                source,
            })
    }

    /// Renders `records` into a new workbook file at `path`.
    ///
    /// The workbook is assembled in memory first, so a failure on any sheet
    /// leaves nothing on disk. If `path` cannot be created it is left as it
    /// was; a save that fails after creation removes the partial file.
    pub fn write_file(
        &self,
        records: &[CategoryRecords<'_>],
        path: &Path,
    ) -> Result<ArtifactSummary, ExportError> {
        let mut workbook = self.build_workbook(records).map_err(|e| e.at(path))?;

        let file = File::create(path).map_err(|source| ExportError::Io {
            path: path.to_path_buf(),
            category: None,
            source,
        })?;

        if let Err(source) = workbook.save_to_writer(file) {
            discard_partial(path);
            return Err(ExportError::Spreadsheet {
                path: path.to_path_buf(),
                category: None,
                source,
            });
        }

        let categories = records.iter().map(|r| r.category()).collect::<Vec<_>>();
        info!(
            "Wrote {} ({} sheet{})",
            path.display(),
            categories.len(),
            if categories.len() == 1 { "" } else { "s" }
        );

        Ok(ArtifactSummary {
            format: ExportFormat::Xlsx,
            path: path.to_path_buf(),
            categories,
        })
    }

    fn add_sheet(
        &self,
        workbook: &mut Workbook,
        namer: &mut SheetNamer,
        section: &Section,
    ) -> Result<(), XlsxError> {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(namer.claim(section.label()))?;

        for (col, title) in section.columns().iter().enumerate() {
            worksheet.write_string_with_format(0, col_num(col)?, *title, &self.header_format)?;
        }

        for (index, row) in section.rows.iter().enumerate() {
            let sheet_row = row_num(index + 1)?;
            for (col, value) in row.iter().enumerate() {
                let sheet_col = col_num(col)?;
                if value.is_empty() {
                    worksheet.write_blank(sheet_row, sheet_col, &self.body_format)?;
                } else {
                    worksheet.write_string_with_format(
                        sheet_row,
                        sheet_col,
                        value,
                        &self.body_format,
                    )?;
                }
            }
        }

        Ok(())
    }
}

/// Bold text on a solid light-grey fill.
fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_pattern(FormatPattern::Solid)
        .set_background_color(Color::Silver)
}

/// Text number format for data cells. Non-default, so blank cells are stored.
fn body_format() -> Format {
    Format::new().set_num_format("@")
}

fn row_num(index: usize) -> Result<RowNum, XlsxError> {
    RowNum::try_from(index).map_err(|_| XlsxError::RowColumnLimitError)
}

fn col_num(index: usize) -> Result<ColNum, XlsxError> {
    ColNum::try_from(index).map_err(|_| XlsxError::RowColumnLimitError)
}
