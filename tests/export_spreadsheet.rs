//! Tests for the workbook export, read back with calamine.

use calamine::Reader;
use record_export::export::{
    export_call_logs, export_contacts, export_device_info, export_spreadsheet, Category,
};
use record_export::{Contact, ExportOptions, RecordBundle};
use tempfile::TempDir;

#[path = "helpers.rs"]
mod helpers;

use helpers::{
    cell, contact, full_bundle, open_xlsx, sheet, workbook_part, xml_cell_styles,
    xml_row_numbers,
};

#[test]
fn test_export_spreadsheet_sheet_order() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("data.xlsx");

    let summary = export_spreadsheet(&full_bundle(), &output_path, &ExportOptions::default())
        .expect("Export should succeed");
    assert_eq!(summary.categories.len(), 6);

    let workbook = open_xlsx(&output_path);
    assert_eq!(
        workbook.sheet_names(),
        vec!["연락처", "SMS", "통화기록", "미디어파일", "문서", "기기정보"]
    );
}

#[test]
fn test_export_spreadsheet_contacts_sheet() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("data.xlsx");

    export_spreadsheet(&full_bundle(), &output_path, &ExportOptions::default())
        .expect("Export should succeed");

    let range = sheet(&output_path, "연락처");
    assert_eq!(range.height(), 3, "header row plus two contacts");
    assert_eq!(cell(&range, 0, 0), "이름");
    assert_eq!(cell(&range, 0, 1), "전화번호");
    assert_eq!(cell(&range, 0, 2), "이메일");
    assert_eq!(cell(&range, 1, 0), "A");
    assert_eq!(cell(&range, 1, 2), "");
    assert_eq!(cell(&range, 2, 0), "B");
    assert_eq!(cell(&range, 2, 1), "2");
    assert_eq!(cell(&range, 2, 2), "x@y");
}

#[test]
fn test_export_spreadsheet_formats_values() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("data.xlsx");

    export_spreadsheet(&full_bundle(), &output_path, &ExportOptions::default())
        .expect("Export should succeed");

    let calls = sheet(&output_path, "통화기록");
    assert_eq!(cell(&calls, 1, 0), "010-3333-4444");
    assert_eq!(cell(&calls, 1, 1), "");
    assert_eq!(cell(&calls, 1, 2), "2024-01-01 00:00:00");
    assert_eq!(cell(&calls, 1, 3), "42");
    assert_eq!(cell(&calls, 1, 4), "outgoing");

    let device = sheet(&output_path, "기기정보");
    assert_eq!(device.height(), 5);
    assert_eq!(cell(&device, 0, 0), "항목");
    assert_eq!(cell(&device, 0, 1), "값");
    assert_eq!(cell(&device, 1, 0), "모델");
    assert_eq!(cell(&device, 1, 1), "Pixel");
    assert_eq!(cell(&device, 2, 0), "제조사");
    assert_eq!(cell(&device, 2, 1), "");
    assert_eq!(cell(&device, 3, 1), "13");
    assert_eq!(cell(&device, 4, 0), "SDK 버전");
    assert_eq!(cell(&device, 4, 1), "33");
}

#[test]
fn test_export_spreadsheet_values_are_not_escaped() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("data.xlsx");
    let bundle = RecordBundle {
        contacts: Some(vec![contact("Lee, \"Jr\"", "010\n1234", "")]),
        ..Default::default()
    };

    export_spreadsheet(&bundle, &output_path, &ExportOptions::default())
        .expect("Export should succeed");

    let range = sheet(&output_path, "연락처");
    assert_eq!(cell(&range, 1, 0), "Lee, \"Jr\"");
    assert_eq!(cell(&range, 1, 1), "010\n1234");
}

#[test]
fn test_export_spreadsheet_skips_absent_categories() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("data.xlsx");
    let bundle = RecordBundle {
        contacts: Some(vec![]),
        sms: None,
        documents: Some(full_bundle().documents().to_vec()),
        ..Default::default()
    };

    let summary = export_spreadsheet(&bundle, &output_path, &ExportOptions::default())
        .expect("Export should succeed");

    assert_eq!(summary.categories, vec![Category::Documents]);
    assert_eq!(open_xlsx(&output_path).sheet_names(), vec!["문서"]);
}

#[test]
fn test_export_spreadsheet_empty_bundle_has_no_category_sheets() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("empty.xlsx");

    let summary = export_spreadsheet(&RecordBundle::default(), &output_path, &ExportOptions::default())
        .expect("Empty bundle is not an error");

    assert!(summary.categories.is_empty());
    let names = open_xlsx(&output_path).sheet_names();
    for category in Category::ordered() {
        assert!(!names.iter().any(|n| n == category.label()));
    }
}

#[test]
fn test_single_category_workbooks() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let bundle = full_bundle();
    let options = ExportOptions::default();

    let contacts_path = temp_dir.path().join("contacts.xlsx");
    export_contacts(bundle.contacts(), &contacts_path, &options).expect("contacts export");
    assert_eq!(open_xlsx(&contacts_path).sheet_names(), vec!["연락처"]);
    assert_eq!(sheet(&contacts_path, "연락처").height(), 3);

    // An empty collection still produces a header-only sheet.
    let calls_path = temp_dir.path().join("calls.xlsx");
    export_call_logs(&[], &calls_path, &options).expect("call log export");
    let calls = sheet(&calls_path, "통화기록");
    assert_eq!(calls.height(), 1);
    assert_eq!(cell(&calls, 0, 3), "통화시간(초)");

    let device_path = temp_dir.path().join("device.xlsx");
    let device = bundle.device_info().expect("full bundle has device info");
    export_device_info(device, &device_path, &options).expect("device export");
    assert_eq!(cell(&sheet(&device_path, "기기정보"), 1, 1), "Pixel");
}

#[test]
fn test_export_spreadsheet_unwritable_destination() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("missing").join("data.xlsx");

    let err = export_spreadsheet(&full_bundle(), &output_path, &ExportOptions::default())
        .expect_err("Export into a missing directory should fail");

    assert_eq!(err.path(), &output_path);
    assert!(!output_path.exists());
}

#[test]
fn test_blank_records_keep_their_rows() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("data.xlsx");
    let bundle = RecordBundle {
        contacts: Some(vec![
            contact("A", "1", ""),
            Contact::default(),
            contact("C", "3", "c@d"),
            Contact::default(),
        ]),
        ..Default::default()
    };

    export_spreadsheet(&bundle, &output_path, &ExportOptions::default())
        .expect("Export should succeed");

    let sheet_xml = workbook_part(&output_path, "xl/worksheets/sheet1.xml");
    assert_eq!(xml_row_numbers(&sheet_xml), vec![1, 2, 3, 4, 5]);

    // Every row carries one cell per column, blank or not.
    let styles = xml_cell_styles(&sheet_xml);
    for row in 1..=5 {
        assert_eq!(styles.iter().filter(|(r, _)| *r == row).count(), 3, "row {}", row);
    }

    let range = sheet(&output_path, "연락처");
    assert_eq!(cell(&range, 2, 0), "");
    assert_eq!(cell(&range, 3, 0), "C");
}

#[test]
fn test_header_row_is_styled_and_data_rows_are_not() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("data.xlsx");
    let bundle = RecordBundle {
        contacts: Some(vec![contact("A", "1", ""), contact("B", "2", "x@y")]),
        ..Default::default()
    };

    export_spreadsheet(&bundle, &output_path, &ExportOptions::default())
        .expect("Export should succeed");

    let sheet_xml = workbook_part(&output_path, "xl/worksheets/sheet1.xml");
    let styles = xml_cell_styles(&sheet_xml);
    let header_styles: Vec<_> = styles.iter().filter(|(r, _)| *r == 1).collect();
    assert_eq!(header_styles.len(), 3);

    let header_style = header_styles[0].1.clone().expect("header cells carry a style");
    assert!(header_styles.iter().all(|(_, s)| s.as_ref() == Some(&header_style)));
    assert!(styles
        .iter()
        .filter(|(r, _)| *r > 1)
        .all(|(_, s)| s.as_ref() != Some(&header_style)));

    let styles_xml = workbook_part(&output_path, "xl/styles.xml");
    assert!(styles_xml.contains("<b/>"), "bold font missing");
    assert!(styles_xml.contains("patternType=\"solid\""), "solid fill missing");
    assert!(styles_xml.contains("C0C0C0"), "silver fill missing");
}

#[test]
fn test_columns_are_autofitted() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("data.xlsx");

    export_spreadsheet(&full_bundle(), &output_path, &ExportOptions::default())
        .expect("Export should succeed");

    for index in 1..=6 {
        let part = format!("xl/worksheets/sheet{}.xml", index);
        let sheet_xml = workbook_part(&output_path, &part);
        assert!(sheet_xml.contains("<cols>"), "{} has no column widths", part);
    }
}
