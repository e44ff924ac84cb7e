//! Export types and options.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::config::TimeZoneMode;
use crate::error_handling::ExportError;
use crate::export::Category;
use crate::utils::TimestampFormatter;

/// Export format options.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum ExportFormat {
    /// Merged comma-delimited text, one section per category
    Csv,
    /// Workbook with one sheet per category
    Xlsx,
}

/// Options for one export call.
#[derive(Clone, Debug, Default)]
pub struct ExportOptions {
    /// Time zone for every timestamp in this call
    pub time_zone: TimeZoneMode,
}

impl ExportOptions {
    /// Builds the timestamp formatter used for this call.
    pub fn formatter(&self) -> TimestampFormatter {
        TimestampFormatter::new(self.time_zone)
    }
}

/// Destinations for a combined export. `None` skips that artifact.
#[derive(Clone, Debug, Default)]
pub struct ExportTargets {
    pub text: Option<PathBuf>,
    pub spreadsheet: Option<PathBuf>,
}

/// One artifact written successfully.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtifactSummary {
    pub format: ExportFormat,
    pub path: PathBuf,
    /// Categories rendered, in output order
    pub categories: Vec<Category>,
}

/// Per-artifact outcome of a combined export.
///
/// One artifact failing never hides the other's result. `None` means the
/// artifact was not requested.
#[derive(Debug, Default)]
pub struct ExportReport {
    pub text: Option<Result<ArtifactSummary, ExportError>>,
    pub spreadsheet: Option<Result<ArtifactSummary, ExportError>>,
}

impl ExportReport {
    fn outcomes(&self) -> impl Iterator<Item = &Result<ArtifactSummary, ExportError>> {
        self.text.iter().chain(self.spreadsheet.iter())
    }

    /// True when every requested artifact was written.
    pub fn is_success(&self) -> bool {
        self.outcomes().all(|outcome| outcome.is_ok())
    }

    pub fn artifacts(&self) -> Vec<&ArtifactSummary> {
        self.outcomes().filter_map(|o| o.as_ref().ok()).collect()
    }

    pub fn failures(&self) -> Vec<&ExportError> {
        self.outcomes().filter_map(|o| o.as_ref().err()).collect()
    }
}
