//! Worksheet name sanitizing.
//!
//! Workbook sheet names are limited to 31 characters, may not contain
//! `[ ] : * ? / \`, may not start or end with an apostrophe, and must be unique
//! within a workbook, compared case-insensitively.

use crate::config::{MAX_SHEET_NAME_LEN, SHEET_NAME_FORBIDDEN_CHARS};

/// Fallback when a label sanitizes down to nothing.
const FALLBACK_SHEET_NAME: &str = "Sheet";

/// Makes `label` acceptable as a worksheet name.
///
/// Forbidden characters become `_`, surrounding apostrophes are trimmed, and
/// the result is truncated to [`MAX_SHEET_NAME_LEN`] characters (not bytes).
pub fn sanitize_sheet_name(label: &str) -> String {
    let replaced: String = label
        .chars()
        .map(|c| {
            if SHEET_NAME_FORBIDDEN_CHARS.contains(&c) || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();

    let truncated: String = replaced
        .trim_matches('\'')
        .chars()
        .take(MAX_SHEET_NAME_LEN)
        .collect();
    let name = truncated.trim_end_matches('\'');

    if name.trim().is_empty() {
        FALLBACK_SHEET_NAME.to_string()
    } else {
        name.to_string()
    }
}

/// Hands out unique, sanitized worksheet names for one workbook.
#[derive(Debug, Default)]
pub struct SheetNamer {
    taken: Vec<String>,
}

impl SheetNamer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a sanitized name for `label` that no earlier call returned.
    ///
    /// Collisions get a ` (2)`, ` (3)`, ... suffix, truncating the base so
    /// the whole name still fits.
    pub fn claim(&mut self, label: &str) -> String {
        let base = sanitize_sheet_name(label);
        let mut candidate = base.clone();
        let mut counter = 2usize;

        while self.is_taken(&candidate) {
            let suffix = format!(" ({})", counter);
            let room = MAX_SHEET_NAME_LEN.saturating_sub(suffix.chars().count());
            let stem: String = base.chars().take(room).collect();
            candidate = format!("{}{}", stem, suffix);
            counter += 1;
        }

        self.taken.push(candidate.to_lowercase());
        candidate
    }

    fn is_taken(&self, name: &str) -> bool {
        let lowered = name.to_lowercase();
        self.taken.iter().any(|t| *t == lowered)
    }
}
