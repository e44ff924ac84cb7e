//! Record bundle data model.
//!
//! A [`RecordBundle`] is the parsed form of one upload: five record
//! collections plus a device description. Every field is optional, because the
//! collecting device omits whatever it could not read. Serialized names follow
//! the upload JSON (camelCase, `date`, `size`, `androidVersion`); the Rust field
//! names are accepted as aliases.

use serde::{Deserialize, Serialize};

/// A single address-book entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// A single text message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmsMessage {
    pub address: Option<String>,
    pub body: Option<String>,
    /// Epoch milliseconds
    #[serde(rename = "date", alias = "timestamp")]
    pub timestamp: Option<i64>,
    /// Free text (inbox, sent, draft, ...)
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// A single call-log entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CallLogEntry {
    pub number: Option<String>,
    pub name: Option<String>,
    /// Epoch milliseconds
    #[serde(rename = "date", alias = "timestamp")]
    pub timestamp: Option<i64>,
    #[serde(rename = "duration", alias = "durationSeconds")]
    pub duration_seconds: Option<i64>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Metadata for an image, video or audio file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MediaFileMeta {
    pub path: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "size", alias = "sizeBytes")]
    pub size_bytes: Option<i64>,
    pub mime_type: Option<String>,
    /// Epoch milliseconds
    pub date_added: Option<i64>,
}

/// Metadata for a document file. Same shape as [`MediaFileMeta`] without a date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DocumentMeta {
    pub path: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "size", alias = "sizeBytes")]
    pub size_bytes: Option<i64>,
    pub mime_type: Option<String>,
}

/// Description of the device the records came from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeviceInfo {
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    #[serde(rename = "androidVersion", alias = "osVersion")]
    pub os_version: Option<String>,
    pub sdk_version: Option<i64>,
}

/// All record collections for one export request.
///
/// `None` and an empty list mean the same thing: the category is absent and
/// contributes no section or sheet. Collections keep their input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RecordBundle {
    pub contacts: Option<Vec<Contact>>,
    pub sms: Option<Vec<SmsMessage>>,
    pub call_logs: Option<Vec<CallLogEntry>>,
    pub media_files: Option<Vec<MediaFileMeta>>,
    pub documents: Option<Vec<DocumentMeta>>,
    pub device_info: Option<DeviceInfo>,
}

/// Number of records per category, as logged on ingest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BundleCounts {
    pub contacts: usize,
    pub sms: usize,
    pub call_logs: usize,
    pub media_files: usize,
    pub documents: usize,
    pub has_device_info: bool,
}

impl RecordBundle {
    /// Decodes a bundle from the upload JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn contacts(&self) -> &[Contact] {
        self.contacts.as_deref().unwrap_or_default()
    }

    pub fn sms(&self) -> &[SmsMessage] {
        self.sms.as_deref().unwrap_or_default()
    }

    pub fn call_logs(&self) -> &[CallLogEntry] {
        self.call_logs.as_deref().unwrap_or_default()
    }

    pub fn media_files(&self) -> &[MediaFileMeta] {
        self.media_files.as_deref().unwrap_or_default()
    }

    pub fn documents(&self) -> &[DocumentMeta] {
        self.documents.as_deref().unwrap_or_default()
    }

    pub fn device_info(&self) -> Option<&DeviceInfo> {
        self.device_info.as_ref()
    }

    pub fn counts(&self) -> BundleCounts {
        BundleCounts {
            contacts: self.contacts().len(),
            sms: self.sms().len(),
            call_logs: self.call_logs().len(),
            media_files: self.media_files().len(),
            documents: self.documents().len(),
            has_device_info: self.device_info.is_some(),
        }
    }
}
