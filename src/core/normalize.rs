//! Column normalization for uploaded tables.
//!
//! Key columns are compared as upper-case, trimmed text. Timestamps are read
//! day-first and degrade to `None` instead of failing the upload.

use crate::ingest::table::{Cell, Table};
use crate::models::{EventColumn, EventRecord, EventTable, ResetRecord, ResetTable};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Upper-case then trim. Blank values become `None`.
pub fn normalize_key(raw: &str) -> Option<String> {
    let upper = raw.to_uppercase();
    let trimmed = upper.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn normalize_cell(cell: &Cell) -> Option<String> {
    cell.as_text().and_then(|s| normalize_key(&s))
}

fn trimmed_cell(cell: &Cell) -> Option<String> {
    cell.as_text()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

const ISO_DATETIME_FORMATS: [&str; 9] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%Y/%m/%d %I:%M %p",
];

// 24h first, then 12h clock with AM/PM
const DAY_FIRST_DATETIME_FORMATS: [&str; 12] = [
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%d-%m-%Y %H:%M:%S",
    "%d-%m-%Y %H:%M",
    "%d.%m.%Y %H:%M:%S",
    "%d.%m.%Y %H:%M",
    "%d/%m/%Y %I:%M:%S %p",
    "%d/%m/%Y %I:%M %p",
    "%d-%m-%Y %I:%M:%S %p",
    "%d-%m-%Y %I:%M %p",
    "%d.%m.%Y %I:%M:%S %p",
    "%d.%m.%Y %I:%M %p",
];

// `%b` also accepts full month names
const MONTH_NAME_DATETIME_FORMATS: [&str; 4] = [
    "%d %b %Y %H:%M:%S",
    "%d %b %Y %H:%M",
    "%b %d, %Y %H:%M:%S",
    "%b %d, %Y %H:%M",
];

const DATE_FORMATS: [&str; 8] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%d %b %Y",
    "%d-%b-%Y",
    "%b %d, %Y",
];

/// Parse a timestamp written day-first (`10/01/2024` is 10 January).
/// ISO forms starting with a four-digit year, 12-hour clocks and month
/// names (`10 Jan 2024`, `Jan 10, 2024`) are accepted as well.
pub fn parse_day_first(text: &str) -> Option<NaiveDateTime> {
    let s = text.trim();
    if s.is_empty() {
        return None;
    }

    let datetime_formats = ISO_DATETIME_FORMATS
        .iter()
        .chain(DAY_FIRST_DATETIME_FORMATS.iter())
        .chain(MONTH_NAME_DATETIME_FORMATS.iter());

    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    for fmt in DATE_FORMATS.iter() {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.naive_local())
}

/// Numbers are not treated as timestamps; only real date cells and text.
pub fn parse_finish_time(cell: &Cell) -> Option<NaiveDateTime> {
    match cell {
        Cell::DateTime(dt) => Some(*dt),
        Cell::Text(s) => parse_day_first(s),
        _ => None,
    }
}

/// Build the normalized event table from the raw `Data` sheet.
pub fn normalize_events(table: &Table) -> EventTable {
    let col = |c: EventColumn| table.column_index(c.header());

    let finish = col(EventColumn::FinishTime);
    let bay_number = col(EventColumn::BayNumber);
    let bay = col(EventColumn::Bay);
    let location = col(EventColumn::Location);
    let vendor = col(EventColumn::Vendor);
    let program = col(EventColumn::Program);
    let store = col(EventColumn::Store);

    let columns = EventColumn::ALL
        .into_iter()
        .filter(|c| col(*c).is_some())
        .collect();

    let mut unparsed_times = 0;
    let mut records = Vec::with_capacity(table.len());

    for row in table.rows() {
        let finish_cell = Table::cell(row, finish);
        let finish_time = parse_finish_time(finish_cell);
        if finish_time.is_none() && !finish_cell.is_empty() {
            unparsed_times += 1;
        }

        records.push(EventRecord {
            vendor: normalize_cell(Table::cell(row, vendor)),
            program: normalize_cell(Table::cell(row, program)),
            store: normalize_cell(Table::cell(row, store)),
            bay_number: normalize_cell(Table::cell(row, bay_number)),
            bay: trimmed_cell(Table::cell(row, bay)),
            location: trimmed_cell(Table::cell(row, location)),
            finish_time,
        });
    }

    EventTable {
        columns,
        records,
        unparsed_times,
    }
}

/// Reset rows keep their raw text; see [`crate::core::aggregate::reset_count`].
pub fn read_reset_log(table: &Table) -> ResetTable {
    let vendor = table.column_index(EventColumn::Vendor.header());
    let program = table.column_index(EventColumn::Program.header());
    let store = table.column_index(EventColumn::Store.header());

    let records = table
        .rows()
        .map(|row| ResetRecord {
            vendor: Table::cell(row, vendor).as_text(),
            program: Table::cell(row, program).as_text(),
            store: Table::cell(row, store).as_text(),
        })
        .collect();

    ResetTable {
        headers: table.headers().to_vec(),
        records,
    }
}
