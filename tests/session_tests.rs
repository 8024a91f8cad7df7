mod common;
use common::{SCENARIO_CSV, dashboard_workbook, write_zip};
use resetboard::core::Session;
use resetboard::core::chart::ChartKind;
use resetboard::core::images::DEFAULT_EXTENSIONS;
use std::fs;

#[test]
fn test_same_upload_is_parsed_once() {
    let mut session = Session::new();
    session.load_bytes(SCENARIO_CSV.as_bytes(), "a.csv").expect("load");
    session.load_bytes(SCENARIO_CSV.as_bytes(), "a.csv").expect("load again");

    assert_eq!(session.parse_count(), 1);
}

#[test]
fn test_new_upload_replaces_current_and_selection() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut session = Session::new();

    session.load_bytes(SCENARIO_CSV.as_bytes(), "a.csv").expect("load");
    session.select(Some("V1"), Some("P2")).expect("select");
    assert_eq!(session.selection().map(|s| s.program.as_str()), Some("P2"));

    let path = dashboard_workbook(dir.path(), "d.xlsx");
    let upload = session.load_bytes(&fs::read(&path).expect("read"), "d.xlsx").expect("load");
    assert_eq!(upload.events.len(), 4);

    assert_eq!(session.parse_count(), 2);
    assert!(session.selection().is_none());
}

#[test]
fn test_summary_uses_default_selection() {
    let mut session = Session::new();
    session.load_bytes(SCENARIO_CSV.as_bytes(), "a.csv").expect("load");

    let result = session.summary().expect("summary");
    assert_eq!(result.maintenance_count, 2);
    assert_eq!(session.selection().map(|s| s.vendor.as_str()), Some("V1"));

    let series = session.chart(ChartKind::Store).expect("chart");
    assert_eq!(series.points.len(), 2);
}

#[test]
fn test_summary_without_upload_fails() {
    let mut session = Session::new();
    assert!(session.summary().is_err());
}

#[test]
fn test_session_image_from_archive() {
    let dir = tempfile::tempdir().expect("tempdir");
    let zip = write_zip(dir.path(), "imgs.zip", &[("p2-front.png", b"PNG")]);
    let exts: Vec<String> = DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect();

    let mut session = Session::new();
    session.load_bytes(SCENARIO_CSV.as_bytes(), "a.csv").expect("load");
    session.select(Some("v1"), Some("p2")).expect("select");
    session.attach_archives(&[zip]).expect("attach");

    let image = session.image(None, &exts).expect("image").expect("found");
    assert_eq!(image.filename, "p2-front.png");

    let roots = session.archive_roots();
    session.attach_archives::<&str>(&[]).expect("detach");
    assert!(!roots[0].exists());
}
