// src/ingest/workbook.rs

use crate::errors::{AppError, AppResult};
use crate::ingest::table::{Cell, Table};
use crate::ui::messages::warning;
use calamine::{Data, Reader, Xlsx};
use std::io::Cursor;

pub const DATA_SHEET: &str = "Data";
pub const SUMMARY_SHEET: &str = "Summary";
pub const RESET_SHEET: &str = "Reset_Update";

/// The three sheets of a dashboard workbook.
pub(crate) struct SheetSet {
    pub data: Table,
    pub summary: Table,
    pub reset_update: Table,
}

/// Legge un file .xlsx / .xlsm in memoria.
///
/// `Data` is required; `Summary` and `Reset_Update` read as empty tables
/// when the workbook does not have them.
pub(crate) fn read_workbook(bytes: &[u8]) -> AppResult<SheetSet> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))
        .map_err(|e| AppError::Format(format!("an Excel workbook ({e})")))?;

    let names = workbook.sheet_names();
    let has_sheet = |name: &str| names.iter().any(|n| n == name);

    if !has_sheet(DATA_SHEET) {
        return Err(AppError::SheetNotFound(DATA_SHEET.to_string()));
    }

    let data = read_sheet(&mut workbook, DATA_SHEET)?;

    let summary = if has_sheet(SUMMARY_SHEET) {
        read_sheet(&mut workbook, SUMMARY_SHEET)?
    } else {
        warning(format!("Sheet '{SUMMARY_SHEET}' not found, continuing without it."));
        Table::default()
    };

    let reset_update = if has_sheet(RESET_SHEET) {
        read_sheet(&mut workbook, RESET_SHEET)?
    } else {
        warning(format!("Sheet '{RESET_SHEET}' not found, reset counts will be 0."));
        Table::default()
    };

    Ok(SheetSet {
        data,
        summary,
        reset_update,
    })
}

fn read_sheet(workbook: &mut Xlsx<Cursor<&[u8]>>, name: &str) -> AppResult<Table> {
    let range = workbook
        .worksheet_range(name)
        .map_err(|e| AppError::Format(format!("sheet '{name}' ({e})")))?;

    let mut rows = range.rows();

    let headers = match rows.next() {
        Some(header_row) => header_row
            .iter()
            .map(|c| cell_from_data(c).as_text().unwrap_or_default())
            .collect(),
        None => return Ok(Table::default()),
    };

    let mut table = Table::new(headers);
    for row in rows {
        table.push_row(row.iter().map(cell_from_data).collect());
    }

    Ok(table)
}

/// Convert a calamine cell. Date cells honour the workbook's 1900/1904
/// date system.
pub fn cell_from_data(value: &Data) -> Cell {
    match value {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::from_text(s),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Float(f) => Cell::Number(*f),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(Cell::DateTime)
            .unwrap_or(Cell::Empty),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::from_text(s),
        // cell errors such as #N/A read as empty
        _ => Cell::Empty,
    }
}
