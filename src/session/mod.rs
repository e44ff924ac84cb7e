//! Session layer: places one upload on disk.
//!
//! For each upload this module:
//! 1. Creates a session directory named by a sortable timestamp
//!    (`yyyyMMddHHmmss`) under the upload root
//! 2. Decodes the record bundle JSON
//! 3. Renders the text and workbook artifacts into the session directory
//! 4. Copies the raw uploaded files alongside them, unmodified
//!
//! Raw file copies are best-effort: a failed copy is logged and reported but
//! does not fail the session.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use log::{error, info, warn};

use crate::config::{Config, SESSION_DIR_FORMAT};
use crate::error_handling::SessionError;
use crate::export::{export_targets, ExportFormat, ExportOptions, ExportReport, ExportTargets};
use crate::models::RecordBundle;

/// A raw file to be stored with the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFile {
    /// Name the file is stored under (only its last path component is used)
    pub file_name: String,
    /// Where to copy the bytes from
    pub source: PathBuf,
}

impl RawFile {
    /// A raw file stored under its own file name.
    pub fn from_path(source: impl Into<PathBuf>) -> Self {
        let source = source.into();
        let file_name = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { file_name, source }
    }
}

/// A raw file that could not be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedFile {
    pub file_name: String,
    pub reason: String,
}

/// Outcome of one ingested upload.
#[derive(Debug)]
pub struct SessionReport {
    pub session_dir: PathBuf,
    pub export: ExportReport,
    pub saved_files: Vec<PathBuf>,
    pub failed_files: Vec<FailedFile>,
}

impl SessionReport {
    /// True when every artifact rendered and every raw file was stored.
    pub fn is_complete(&self) -> bool {
        self.export.is_success() && self.failed_files.is_empty()
    }
}

/// Session directory name for `now`.
pub fn session_dir_name(now: &DateTime<Local>) -> String {
    now.format(SESSION_DIR_FORMAT).to_string()
}

/// Creates (or reuses) the session directory for `now` under `root`.
pub fn create_session_dir(root: &Path, now: &DateTime<Local>) -> Result<PathBuf, SessionError> {
    let session_dir = root.join(session_dir_name(now));
    fs::create_dir_all(&session_dir).map_err(|source| SessionError::SessionDir {
        path: session_dir.clone(),
        source,
    })?;
    info!("Session folder: {}", session_dir.display());
    Ok(session_dir)
}

/// Ingests one upload: session directory, artifacts, raw files.
///
/// Fails only if the session directory cannot be created or the bundle does
/// not decode. Artifact and raw-file failures are reported in the returned
/// [`SessionReport`].
pub fn ingest(
    config: &Config,
    bundle_json: &str,
    raw_files: &[RawFile],
) -> Result<SessionReport, SessionError> {
    ingest_at(config, bundle_json, raw_files, &Local::now())
}

/// Like [`ingest`], reading the bundle JSON from `bundle_path`.
pub fn ingest_from_path(
    config: &Config,
    bundle_path: &Path,
    raw_files: &[RawFile],
) -> Result<SessionReport, SessionError> {
    let bundle_json =
        fs::read_to_string(bundle_path).map_err(|source| SessionError::ReadBundle {
            path: bundle_path.to_path_buf(),
            source,
        })?;
    ingest(config, &bundle_json, raw_files)
}

/// [`ingest`] with an explicit clock reading.
pub fn ingest_at(
    config: &Config,
    bundle_json: &str,
    raw_files: &[RawFile],
    now: &DateTime<Local>,
) -> Result<SessionReport, SessionError> {
    let session_dir = create_session_dir(&config.upload_dir, now)?;

    let bundle = RecordBundle::from_json(bundle_json)?;
    log_counts(&bundle);

    let targets = ExportTargets {
        text: config
            .wants(ExportFormat::Csv)
            .then(|| session_dir.join(&config.text_file_name)),
        spreadsheet: config
            .wants(ExportFormat::Xlsx)
            .then(|| session_dir.join(&config.spreadsheet_file_name)),
    };
    let options = ExportOptions {
        time_zone: config.time_zone,
    };
    let export = export_targets(&bundle, &targets, &options);

    info!("Received {} files", raw_files.len());
    let mut saved_files = Vec::new();
    let mut failed_files = Vec::new();
    for raw in raw_files {
        match store_raw_file(&session_dir, raw) {
            Ok(Some(path)) => {
                info!("Saved: {}", path.display());
                saved_files.push(path);
            }
            Ok(None) => warn!("Skipping raw file with no usable name: {}", raw.source.display()),
            Err(reason) => {
                error!("Failed to save {}: {}", raw.file_name, reason);
                failed_files.push(FailedFile {
                    file_name: raw.file_name.clone(),
                    reason,
                });
            }
        }
    }

    Ok(SessionReport {
        session_dir,
        export,
        saved_files,
        failed_files,
    })
}

fn log_counts(bundle: &RecordBundle) {
    let counts = bundle.counts();
    info!(
        "Bundle: {} contacts, {} sms, {} call logs, {} media files, {} documents, device info {}",
        counts.contacts,
        counts.sms,
        counts.call_logs,
        counts.media_files,
        counts.documents,
        if counts.has_device_info { "present" } else { "absent" }
    );
}

/// Copies `raw` into `session_dir`, replacing any existing file.
///
/// Returns `Ok(None)` when the name has no usable final component.
fn store_raw_file(session_dir: &Path, raw: &RawFile) -> Result<Option<PathBuf>, String> {
    let Some(name) = safe_file_name(&raw.file_name) else {
        return Ok(None);
    };
    let destination = session_dir.join(name);
    fs::copy(&raw.source, &destination)
        .map(|_| Some(destination))
        .map_err(|e| format!("{} ({})", e, raw.source.display()))
}

/// Final path component of `name`, so uploads cannot escape the session
/// directory. `None` for empty, `.` or `..`.
fn safe_file_name(name: &str) -> Option<&str> {
    let last = name.rsplit(['/', '\\']).next()?;
    match last {
        "" | "." | ".." => None,
        other => Some(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2024, 3, 9, 14, 5, 7)
            .single()
            .expect("unambiguous local time")
    }

    #[test]
    fn test_session_dir_name_format() {
        assert_eq!(session_dir_name(&fixed_time()), "20240309140507");
    }

    #[test]
    fn test_safe_file_name() {
        assert_eq!(safe_file_name("photo.jpg"), Some("photo.jpg"));
        assert_eq!(safe_file_name("../../etc/passwd"), Some("passwd"));
        assert_eq!(safe_file_name("dir\\evil.exe"), Some("evil.exe"));
        assert_eq!(safe_file_name(""), None);
        assert_eq!(safe_file_name("a/.."), None);
        assert_eq!(safe_file_name("trailing/"), None);
    }

    #[test]
    fn test_raw_file_from_path() {
        let raw = RawFile::from_path("/tmp/upload/img_001.jpg");
        assert_eq!(raw.file_name, "img_001.jpg");
        assert_eq!(raw.source, PathBuf::from("/tmp/upload/img_001.jpg"));
    }

    #[test]
    fn test_create_session_dir_is_idempotent() {
        let temp_dir = tempfile::TempDir::new().expect("Failed to create temp directory");
        let first = create_session_dir(temp_dir.path(), &fixed_time()).expect("create");
        let second = create_session_dir(temp_dir.path(), &fixed_time()).expect("reuse");
        assert_eq!(first, second);
        assert!(first.is_dir());
        assert!(first.ends_with("20240309140507"));
    }
}
