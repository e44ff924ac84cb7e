//! Configuration constants.
//!
//! This module defines the fixed names, formats and limits used by the export
//! pipeline and the session layer.

/// Root directory that receives one session directory per upload.
pub const DEFAULT_UPLOAD_DIR: &str = "uploads";

/// `chrono` pattern for session directory names (`yyyyMMddHHmmss`).
///
/// Sortable lexicographically, so a plain directory listing is chronological.
pub const SESSION_DIR_FORMAT: &str = "%Y%m%d%H%M%S";

/// File name of the merged delimited-text artifact inside a session directory.
pub const TEXT_EXPORT_FILE_NAME: &str = "data.csv";

/// File name of the workbook artifact inside a session directory.
pub const SPREADSHEET_EXPORT_FILE_NAME: &str = "data.xlsx";

/// `chrono` pattern for rendered timestamps (`YYYY-MM-DD HH:MM:SS`).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Maximum length of a worksheet name, in characters.
pub const MAX_SHEET_NAME_LEN: usize = 31;

/// Characters a worksheet name may not contain.
pub const SHEET_NAME_FORBIDDEN_CHARS: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

/// Byte-order marker written at the start of the text artifact.
///
/// Spreadsheet tools that reopen the plain-text file use it to detect UTF-8.
pub const UTF8_BOM: &str = "\u{feff}";
