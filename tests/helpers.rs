// Shared test helpers for building record bundles and reading artifacts back.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::io::Read;
use std::path::Path;

use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use record_export::{
    CallLogEntry, Contact, DeviceInfo, DocumentMeta, MediaFileMeta, RecordBundle, SmsMessage,
};

/// 2024-01-01 00:00:00 UTC in epoch milliseconds.
#[allow(dead_code)]
pub const JAN_1_2024_MS: i64 = 1704067200000;

#[allow(dead_code)]
pub fn contact(name: &str, phone: &str, email: &str) -> Contact {
    Contact {
        name: Some(name.to_string()),
        phone: Some(phone.to_string()),
        email: Some(email.to_string()),
    }
}

#[allow(dead_code)]
pub fn sms(address: &str, body: &str, timestamp: Option<i64>, kind: &str) -> SmsMessage {
    SmsMessage {
        address: Some(address.to_string()),
        body: Some(body.to_string()),
        timestamp,
        kind: Some(kind.to_string()),
    }
}

/// A bundle with every category populated.
#[allow(dead_code)]
pub fn full_bundle() -> RecordBundle {
    RecordBundle {
        contacts: Some(vec![
            contact("A", "1", ""),
            contact("B", "2", "x@y"),
        ]),
        sms: Some(vec![sms("010-1111-2222", "안녕하세요", Some(JAN_1_2024_MS), "inbox")]),
        call_logs: Some(vec![CallLogEntry {
            number: Some("010-3333-4444".to_string()),
            name: None,
            timestamp: Some(JAN_1_2024_MS),
            duration_seconds: Some(42),
            kind: Some("outgoing".to_string()),
        }]),
        media_files: Some(vec![MediaFileMeta {
            path: Some("/sdcard/DCIM/a.jpg".to_string()),
            name: Some("a.jpg".to_string()),
            size_bytes: Some(2048),
            mime_type: Some("image/jpeg".to_string()),
            date_added: Some(JAN_1_2024_MS),
        }]),
        documents: Some(vec![DocumentMeta {
            path: Some("/sdcard/Download/b.pdf".to_string()),
            name: Some("b.pdf".to_string()),
            size_bytes: Some(4096),
            mime_type: Some("application/pdf".to_string()),
        }]),
        device_info: Some(DeviceInfo {
            model: Some("Pixel".to_string()),
            manufacturer: None,
            os_version: Some("13".to_string()),
            sdk_version: Some(33),
        }),
    }
}

/// The upload JSON equivalent of `full_bundle()`.
#[allow(dead_code)]
pub const FULL_BUNDLE_JSON: &str = r#"{
    "contacts": [
        {"name": "A", "phone": "1", "email": ""},
        {"name": "B", "phone": "2", "email": "x@y"}
    ],
    "sms": [{"address": "010-1111-2222", "body": "안녕하세요", "date": 1704067200000, "type": "inbox"}],
    "callLogs": [{"number": "010-3333-4444", "name": null, "date": 1704067200000, "duration": 42, "type": "outgoing"}],
    "mediaFiles": [{"path": "/sdcard/DCIM/a.jpg", "name": "a.jpg", "size": 2048, "mimeType": "image/jpeg", "dateAdded": 1704067200000}],
    "documents": [{"path": "/sdcard/Download/b.pdf", "name": "b.pdf", "size": 4096, "mimeType": "application/pdf"}],
    "deviceInfo": {"model": "Pixel", "manufacturer": null, "androidVersion": "13", "sdkVersion": 33}
}"#;

/// Reads a rendered text artifact, asserting and stripping the BOM.
#[allow(dead_code)]
pub fn read_text_artifact(path: &Path) -> String {
    let content = std::fs::read_to_string(path).expect("Failed to read text artifact");
    content
        .strip_prefix('\u{feff}')
        .expect("text artifact should start with a BOM")
        .to_string()
}

/// Parses a rendered text document into records, dropping blank lines.
#[allow(dead_code)]
pub fn parse_text_records(body: &str) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(body.as_bytes());

    reader
        .records()
        .map(|r| r.expect("text artifact should parse as CSV"))
        .map(|r| r.iter().map(str::to_string).collect::<Vec<_>>())
        .filter(|fields| !(fields.len() == 1 && fields[0].is_empty()))
        .collect()
}

/// Opens a rendered workbook.
#[allow(dead_code)]
pub fn open_xlsx(path: &Path) -> Xlsx<std::io::BufReader<std::fs::File>> {
    open_workbook(path).expect("Failed to open workbook")
}

/// Reads one sheet of a rendered workbook.
#[allow(dead_code)]
pub fn sheet(path: &Path, name: &str) -> Range<Data> {
    open_xlsx(path)
        .worksheet_range(name)
        .expect("sheet should exist")
}

/// Cell text at an absolute position; empty for blank or missing cells.
#[allow(dead_code)]
pub fn cell(range: &Range<Data>, row: u32, col: u32) -> String {
    match range.get_value((row, col)) {
        Some(Data::String(s)) => s.clone(),
        Some(Data::Empty) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

/// Raw XML of one part of a saved workbook, e.g. `xl/styles.xml`.
#[allow(dead_code)]
pub fn workbook_part(path: &Path, part: &str) -> String {
    let file = std::fs::File::open(path).expect("Failed to open workbook");
    let mut archive = zip::ZipArchive::new(file).expect("workbook should be a zip archive");
    let mut entry = archive.by_name(part).expect("workbook part should exist");
    let mut xml = String::new();
    entry
        .read_to_string(&mut xml)
        .expect("workbook part should be UTF-8");
    xml
}

/// Value of `attr` in the opening tag `tag`, if present.
#[allow(dead_code)]
fn attribute<'a>(tag: &'a str, attr: &str) -> Option<&'a str> {
    let needle = format!(" {}=\"", attr);
    let start = tag.find(&needle)? + needle.len();
    let len = tag[start..].find('"')?;
    Some(&tag[start..start + len])
}

/// Opening tags of every `<name ...>` element in `xml`.
#[allow(dead_code)]
fn opening_tags<'a>(xml: &'a str, name: &str) -> Vec<&'a str> {
    let needle = format!("<{} ", name);
    xml.match_indices(&needle)
        .filter_map(|(start, _)| {
            let end = xml[start..].find('>')?;
            Some(&xml[start..start + end])
        })
        .collect()
}

/// 1-based row numbers present in a worksheet's XML, in order.
#[allow(dead_code)]
pub fn xml_row_numbers(sheet_xml: &str) -> Vec<u32> {
    opening_tags(sheet_xml, "row")
        .into_iter()
        .filter_map(|tag| attribute(tag, "r")?.parse().ok())
        .collect()
}

/// `(1-based row, style index)` for every cell in a worksheet's XML.
#[allow(dead_code)]
pub fn xml_cell_styles(sheet_xml: &str) -> Vec<(u32, Option<String>)> {
    opening_tags(sheet_xml, "c")
        .into_iter()
        .filter_map(|tag| {
            let reference = attribute(tag, "r")?;
            let row = reference
                .trim_start_matches(|c: char| c.is_ascii_alphabetic())
                .parse()
                .ok()?;
            Some((row, attribute(tag, "s").map(str::to_string)))
        })
        .collect()
}
