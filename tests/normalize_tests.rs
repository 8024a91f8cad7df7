use chrono::NaiveDate;
use resetboard::core::normalize::{normalize_cell, normalize_key, parse_day_first, parse_finish_time};
use resetboard::ingest::Cell;

#[test]
fn test_normalize_key_is_idempotent() {
    let samples = [
        "  acme ",
        "Shelf Reset",
        "b-12",
        "ÉCLAIR co",
        "\tV1\n",
        "already UPPER",
        "   ",
        "",
    ];

    for s in samples {
        let once = normalize_key(s);
        let twice = once.as_deref().and_then(normalize_key);
        assert_eq!(once, twice, "not idempotent for {s:?}");
    }
}

#[test]
fn test_blank_keys_are_absent() {
    assert_eq!(normalize_key("   "), None);
    assert_eq!(normalize_cell(&Cell::Empty), None);
    assert_eq!(normalize_cell(&Cell::Text(" \t".into())), None);
}

#[test]
fn test_numeric_cells_lose_integral_fraction() {
    assert_eq!(normalize_cell(&Cell::Number(12.0)), Some("12".to_string()));
    assert_eq!(normalize_cell(&Cell::Number(12.5)), Some("12.5".to_string()));
}

#[test]
fn test_day_first_dates() {
    let jan10 = NaiveDate::from_ymd_opt(2024, 1, 10).and_then(|d| d.and_hms_opt(0, 0, 0));

    assert_eq!(parse_day_first("10/01/2024"), jan10);
    assert_eq!(parse_day_first("10-01-2024"), jan10);
    assert_eq!(parse_day_first("10.01.2024"), jan10);
    assert_eq!(parse_day_first("2024-01-10"), jan10);
    assert_eq!(
        parse_day_first("10/01/2024 14:30"),
        NaiveDate::from_ymd_opt(2024, 1, 10).and_then(|d| d.and_hms_opt(14, 30, 0))
    );
    assert_eq!(
        parse_day_first("2024-01-10T14:30:15"),
        NaiveDate::from_ymd_opt(2024, 1, 10).and_then(|d| d.and_hms_opt(14, 30, 15))
    );
}

#[test]
fn test_day_first_dates_in_export_layouts() {
    let at = |h: u32, m: u32| {
        NaiveDate::from_ymd_opt(2024, 1, 10).and_then(|d| d.and_hms_opt(h, m, 0))
    };

    assert_eq!(parse_day_first("10/01/2024 10:35 AM"), at(10, 35));
    assert_eq!(parse_day_first("10/01/2024 02:05 pm"), at(14, 5));
    assert_eq!(parse_day_first("10/01/2024 12:00 AM"), at(0, 0));
    assert_eq!(parse_day_first("2024/01/10"), at(0, 0));
    assert_eq!(parse_day_first("2024/01/10 14:30"), at(14, 30));
    assert_eq!(parse_day_first("10 Jan 2024"), at(0, 0));
    assert_eq!(parse_day_first("10 January 2024"), at(0, 0));
    assert_eq!(parse_day_first("Jan 10, 2024"), at(0, 0));
    assert_eq!(parse_day_first("10-Jan-2024"), at(0, 0));
    assert_eq!(parse_day_first("10 Jan 2024 09:15"), at(9, 15));
}

#[test]
fn test_unreadable_dates_are_absent() {
    for s in ["", "tomorrow", "32/01/2024", "10/13/2024", "2024", "??"] {
        assert_eq!(parse_day_first(s), None, "{s:?} should not parse");
    }
}

#[test]
fn test_finish_time_ignores_plain_numbers() {
    assert_eq!(parse_finish_time(&Cell::Number(45000.0)), None);
    assert_eq!(parse_finish_time(&Cell::Bool(true)), None);
    assert_eq!(parse_finish_time(&Cell::Empty), None);
}
