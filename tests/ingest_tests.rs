mod common;
use chrono::NaiveDate;
use common::{SCENARIO_CSV, Sheet, Xl, dashboard_workbook, write_workbook};
use resetboard::errors::AppError;
use calamine::{Data, ExcelDateTime, ExcelDateTimeType};
use resetboard::ingest::{Cell, UploadKind, cell_from_data, parse, parse_file};
use resetboard::models::EventColumn;
use std::fs;

#[test]
fn test_csv_has_single_table() {
    let upload = parse(SCENARIO_CSV.as_bytes(), "records.csv").expect("parse csv");

    assert_eq!(upload.kind, UploadKind::Csv);
    assert_eq!(upload.events.len(), 3);
    assert!(upload.summary.is_empty());
    assert!(upload.reset_log.is_empty());
    assert!(upload.events.has_column(EventColumn::FinishTime));
    assert!(!upload.events.has_column(EventColumn::Bay));
}

#[test]
fn test_csv_extension_is_case_insensitive() {
    let upload = parse(SCENARIO_CSV.as_bytes(), "RECORDS.CSV").expect("parse csv");
    assert_eq!(upload.kind, UploadKind::Csv);
}

#[test]
fn test_csv_key_columns_are_upper_and_trimmed() {
    let csv = "Vendor,Program,Store,bay number\n  acme ,shelf  , s1,b 7 \n";
    let upload = parse(csv.as_bytes(), "x.csv").expect("parse csv");
    let r = &upload.events.records[0];

    assert_eq!(r.vendor.as_deref(), Some("ACME"));
    assert_eq!(r.program.as_deref(), Some("SHELF"));
    assert_eq!(r.store.as_deref(), Some("S1"));
    assert_eq!(r.bay_number.as_deref(), Some("B 7"));
}

#[test]
fn test_missing_columns_are_not_synthesized() {
    let csv = "Vendor,Program\nV1,P1\n";
    let upload = parse(csv.as_bytes(), "x.csv").expect("parse csv");

    assert!(!upload.events.has_column(EventColumn::Store));
    assert!(!upload.events.has_column(EventColumn::FinishTime));
    let r = &upload.events.records[0];
    assert!(r.store.is_none());
    assert!(r.bay_number.is_none());
    assert!(r.finish_time.is_none());
}

#[test]
fn test_unparsable_finish_time_becomes_absent() {
    let csv = "Vendor,Program,FinishTime\nV1,P1,yesterday\nV1,P1,\nV1,P1,31/12/2023 23:59\n";
    let upload = parse(csv.as_bytes(), "x.csv").expect("parse csv");

    assert_eq!(upload.events.len(), 3);
    assert!(upload.events.records[0].finish_time.is_none());
    assert!(upload.events.records[1].finish_time.is_none());
    assert_eq!(
        upload.events.records[2].finish_time,
        NaiveDate::from_ymd_opt(2023, 12, 31).and_then(|d| d.and_hms_opt(23, 59, 0))
    );
    // only the non-empty unreadable value is counted
    assert_eq!(upload.events.unparsed_times, 1);
}

#[test]
fn test_invalid_utf8_does_not_fail_the_upload() {
    let mut bytes = b"Vendor,Program\nV1,P".to_vec();
    bytes.push(0xFF);
    bytes.extend_from_slice(b"\n");

    let upload = parse(&bytes, "x.csv").expect("parse csv");
    assert_eq!(upload.events.len(), 1);
    assert!(upload.events.records[0].program.is_some());
}

#[test]
fn test_unsupported_extension() {
    let err = parse(b"whatever", "notes.txt").unwrap_err();
    assert!(matches!(err, AppError::UnsupportedFile(_)));
}

#[test]
fn test_garbage_workbook_is_format_error() {
    let err = parse(b"this is not a zip container", "broken.xlsx").unwrap_err();
    assert!(matches!(err, AppError::Format(_)));
}

#[test]
fn test_workbook_reads_three_sheets() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dashboard_workbook(dir.path(), "dashboard.xlsx");

    let upload = parse_file(&path).expect("parse workbook");

    assert_eq!(upload.kind, UploadKind::Workbook);
    assert_eq!(upload.events.len(), 4);
    assert_eq!(upload.summary.len(), 1);
    assert_eq!(upload.reset_log.len(), 4);
    assert_eq!(upload.events.unparsed_times, 1);
}

#[test]
fn test_workbook_dates_and_text_dates() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dashboard_workbook(dir.path(), "dashboard.xlsm");

    let upload = parse_file(&path).expect("parse workbook");
    let records = &upload.events.records;

    assert_eq!(
        records[0].finish_time.map(|t| t.date()),
        NaiveDate::from_ymd_opt(2024, 3, 5)
    );
    // text cell, day-first
    assert_eq!(
        records[2].finish_time,
        NaiveDate::from_ymd_opt(2024, 1, 15).and_then(|d| d.and_hms_opt(8, 0, 0))
    );
    assert!(records[3].finish_time.is_none());
}

#[test]
fn test_date_cells_follow_workbook_date_system() {
    let serial = |value: f64, is_1904: bool| {
        Data::DateTime(ExcelDateTime::new(value, ExcelDateTimeType::DateTime, is_1904))
    };
    let at = |y: i32, m: u32, d: u32, h: u32| {
        let dt = NaiveDate::from_ymd_opt(y, m, d).and_then(|d| d.and_hms_opt(h, 0, 0));
        Cell::DateTime(dt.expect("valid date"))
    };

    assert_eq!(cell_from_data(&serial(45000.0, false)), at(2023, 3, 15, 0));
    // 1904 system: 1462 days later
    assert_eq!(cell_from_data(&serial(45000.0, true)), at(2027, 3, 16, 0));
    assert_eq!(cell_from_data(&serial(45000.5, false)), at(2023, 3, 15, 12));
}

#[test]
fn test_workbook_reset_log_keeps_raw_text() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dashboard_workbook(dir.path(), "dashboard.xlsx");

    let upload = parse_file(&path).expect("parse workbook");
    assert_eq!(upload.reset_log.records[0].vendor.as_deref(), Some("acme"));
    assert_eq!(upload.reset_log.records[0].program.as_deref(), Some(" shelf"));
}

#[test]
fn test_workbook_without_data_sheet() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_workbook(
        dir.path(),
        "nodata.xlsx",
        &[Sheet {
            name: "Summary",
            headers: &["Vendor"],
            rows: vec![vec![Xl::Text("ACME")]],
        }],
    );

    let err = parse(&fs::read(&path).expect("read"), "nodata.xlsx").unwrap_err();
    match err {
        AppError::SheetNotFound(name) => assert_eq!(name, "Data"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_workbook_optional_sheets_may_be_missing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_workbook(
        dir.path(),
        "dataonly.xlsx",
        &[Sheet {
            name: "Data",
            headers: &["Vendor", "Program"],
            rows: vec![vec![Xl::Text("ACME"), Xl::Text("SHELF")]],
        }],
    );

    let upload = parse_file(&path).expect("parse workbook");
    assert_eq!(upload.events.len(), 1);
    assert!(upload.summary.is_empty());
    assert!(upload.reset_log.is_empty());
}
