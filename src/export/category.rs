//! Shared category table.
//!
//! Both renderers walk the same six categories in the same fixed order, with
//! the same labels, column sets and per-field formatting. This module is the
//! single place that knows them; the text and spreadsheet renderers only lay
//! out the [`Section`]s produced here.

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use crate::models::{
    CallLogEntry, Contact, DeviceInfo, DocumentMeta, MediaFileMeta, RecordBundle, SmsMessage,
};
use crate::utils::{format_optional_integer, TimestampFormatter};

/// The six record categories, declared in rendering order.
///
/// `Display`/`FromStr` use the kebab-case identifier (`call-logs`); the
/// human-facing label is [`Category::label`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Category {
    Contacts,
    Sms,
    CallLogs,
    MediaFiles,
    Documents,
    DeviceInfo,
}

const CONTACT_COLUMNS: &[&str] = &["이름", "전화번호", "이메일"];
const SMS_COLUMNS: &[&str] = &["주소", "내용", "날짜", "타입"];
const CALL_LOG_COLUMNS: &[&str] = &["번호", "이름", "날짜", "통화시간(초)", "타입"];
const MEDIA_FILE_COLUMNS: &[&str] = &["경로", "이름", "크기(바이트)", "MIME 타입", "추가일"];
const DOCUMENT_COLUMNS: &[&str] = &["경로", "이름", "크기(바이트)", "MIME 타입"];
const DEVICE_INFO_COLUMNS: &[&str] = &["항목", "값"];

/// Row labels of the device-info table, in order.
pub const DEVICE_INFO_LABELS: [&str; 4] = ["모델", "제조사", "안드로이드 버전", "SDK 버전"];

impl Category {
    /// Section header text and sheet name.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Contacts => "연락처",
            Category::Sms => "SMS",
            Category::CallLogs => "통화기록",
            Category::MediaFiles => "미디어파일",
            Category::Documents => "문서",
            Category::DeviceInfo => "기기정보",
        }
    }

    /// Column headers, in output order.
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            Category::Contacts => CONTACT_COLUMNS,
            Category::Sms => SMS_COLUMNS,
            Category::CallLogs => CALL_LOG_COLUMNS,
            Category::MediaFiles => MEDIA_FILE_COLUMNS,
            Category::Documents => DOCUMENT_COLUMNS,
            Category::DeviceInfo => DEVICE_INFO_COLUMNS,
        }
    }

    /// All categories in rendering order.
    pub fn ordered() -> impl Iterator<Item = Category> {
        Category::iter()
    }
}

/// One category's records, borrowed from a bundle.
#[derive(Debug, Clone, Copy)]
pub enum CategoryRecords<'a> {
    Contacts(&'a [Contact]),
    Sms(&'a [SmsMessage]),
    CallLogs(&'a [CallLogEntry]),
    MediaFiles(&'a [MediaFileMeta]),
    Documents(&'a [DocumentMeta]),
    DeviceInfo(&'a DeviceInfo),
}

impl<'a> CategoryRecords<'a> {
    /// Borrows `category` from `bundle`, or `None` if the category is absent
    /// (null or empty collection, null device info).
    pub fn from_bundle(bundle: &'a RecordBundle, category: Category) -> Option<Self> {
        Self::select(bundle, category).filter(|records| records.is_present())
    }

    /// Borrows `category` from `bundle` even when its collection is empty.
    ///
    /// `None` only for missing device info, which has no empty form.
    pub fn select(bundle: &'a RecordBundle, category: Category) -> Option<Self> {
        let records = match category {
            Category::Contacts => CategoryRecords::Contacts(bundle.contacts()),
            Category::Sms => CategoryRecords::Sms(bundle.sms()),
            Category::CallLogs => CategoryRecords::CallLogs(bundle.call_logs()),
            Category::MediaFiles => CategoryRecords::MediaFiles(bundle.media_files()),
            Category::Documents => CategoryRecords::Documents(bundle.documents()),
            Category::DeviceInfo => CategoryRecords::DeviceInfo(bundle.device_info()?),
        };
        Some(records)
    }

    /// Every present category of `bundle`, in rendering order.
    pub fn present_in(bundle: &'a RecordBundle) -> Vec<Self> {
        Category::ordered()
            .filter_map(|category| Self::from_bundle(bundle, category))
            .collect()
    }

    pub fn category(&self) -> Category {
        match self {
            CategoryRecords::Contacts(_) => Category::Contacts,
            CategoryRecords::Sms(_) => Category::Sms,
            CategoryRecords::CallLogs(_) => Category::CallLogs,
            CategoryRecords::MediaFiles(_) => Category::MediaFiles,
            CategoryRecords::Documents(_) => Category::Documents,
            CategoryRecords::DeviceInfo(_) => Category::DeviceInfo,
        }
    }

    /// Number of data rows this category renders to.
    pub fn row_count(&self) -> usize {
        match self {
            CategoryRecords::Contacts(r) => r.len(),
            CategoryRecords::Sms(r) => r.len(),
            CategoryRecords::CallLogs(r) => r.len(),
            CategoryRecords::MediaFiles(r) => r.len(),
            CategoryRecords::Documents(r) => r.len(),
            CategoryRecords::DeviceInfo(_) => DEVICE_INFO_LABELS.len(),
        }
    }

    pub fn is_present(&self) -> bool {
        self.row_count() > 0
    }

    /// Formats every record into display cells.
    ///
    /// Missing values become empty strings; no cell is ever `"null"`.
    pub fn to_section(&self, formatter: &TimestampFormatter) -> Section {
        let rows = match self {
            CategoryRecords::Contacts(records) => records
                .iter()
                .map(|c| vec![text(&c.name), text(&c.phone), text(&c.email)])
                .collect(),
            CategoryRecords::Sms(records) => records
                .iter()
                .map(|s| {
                    vec![
                        text(&s.address),
                        text(&s.body),
                        formatter.format(s.timestamp),
                        text(&s.kind),
                    ]
                })
                .collect(),
            CategoryRecords::CallLogs(records) => records
                .iter()
                .map(|c| {
                    vec![
                        text(&c.number),
                        text(&c.name),
                        formatter.format(c.timestamp),
                        format_optional_integer(c.duration_seconds),
                        text(&c.kind),
                    ]
                })
                .collect(),
            CategoryRecords::MediaFiles(records) => records
                .iter()
                .map(|m| {
                    vec![
                        text(&m.path),
                        text(&m.name),
                        format_optional_integer(m.size_bytes),
                        text(&m.mime_type),
                        formatter.format(m.date_added),
                    ]
                })
                .collect(),
            CategoryRecords::Documents(records) => records
                .iter()
                .map(|d| {
                    vec![
                        text(&d.path),
                        text(&d.name),
                        format_optional_integer(d.size_bytes),
                        text(&d.mime_type),
                    ]
                })
                .collect(),
            CategoryRecords::DeviceInfo(device) => {
                let values = [
                    text(&device.model),
                    text(&device.manufacturer),
                    text(&device.os_version),
                    format_optional_integer(device.sdk_version),
                ];
                DEVICE_INFO_LABELS
                    .iter()
                    .zip(values)
                    .map(|(label, value)| vec![label.to_string(), value])
                    .collect()
            }
        };

        Section {
            category: self.category(),
            rows,
        }
    }
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// A category rendered to display cells, ready for layout.
///
/// Every row has exactly `category.columns().len()` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub category: Category,
    pub rows: Vec<Vec<String>>,
}

impl Section {
    pub fn label(&self) -> &'static str {
        self.category.label()
    }

    pub fn columns(&self) -> &'static [&'static str] {
        self.category.columns()
    }
}
