// src/ingest/mod.rs

mod delimited;
pub mod table;
mod workbook;

pub use table::{Cell, Table};
pub use workbook::{DATA_SHEET, RESET_SHEET, SUMMARY_SHEET, cell_from_data};

use crate::core::normalize::{normalize_events, read_reset_log};
use crate::errors::{AppError, AppResult};
use crate::models::{EventTable, ResetTable};
use crate::ui::messages::{info, warning};
use crate::utils::path::extension_of;
use std::fs;
use std::path::Path;

/// Kind of upload, decided by the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Csv,
    Workbook,
}

impl UploadKind {
    pub fn from_filename(filename: &str) -> AppResult<Self> {
        match extension_of(Path::new(filename)).as_str() {
            "csv" => Ok(UploadKind::Csv),
            "xlsx" | "xlsm" => Ok(UploadKind::Workbook),
            _ => Err(AppError::UnsupportedFile(filename.to_string())),
        }
    }
}

/// Everything read from one uploaded file.
#[derive(Debug, Clone)]
pub struct Upload {
    pub filename: String,
    pub kind: UploadKind,
    pub events: EventTable,
    pub summary: Table,
    pub reset_log: ResetTable,
}

/// Parse an uploaded file.
///
/// - `.csv`: a single table; `summary` and `reset_log` are empty.
/// - `.xlsx` / `.xlsm`: sheets `Data` (required), `Summary` and
///   `Reset_Update`.
pub fn parse(bytes: &[u8], filename: &str) -> AppResult<Upload> {
    let kind = UploadKind::from_filename(filename)?;

    let (data, summary, reset_raw) = match kind {
        UploadKind::Csv => (delimited::read_csv(bytes)?, Table::default(), Table::default()),
        UploadKind::Workbook => {
            let sheets = workbook::read_workbook(bytes)?;
            (sheets.data, sheets.summary, sheets.reset_update)
        }
    };

    let events = normalize_events(&data);
    let reset_log = read_reset_log(&reset_raw);

    info(format!(
        "Loaded {filename}: {} events, {} reset rows",
        events.len(),
        reset_log.len()
    ));

    if events.unparsed_times > 0 {
        warning(format!(
            "{} FinishTime values could not be read as dates and were ignored.",
            events.unparsed_times
        ));
    }

    Ok(Upload {
        filename: filename.to_string(),
        kind,
        events,
        summary,
        reset_log,
    })
}

/// Read and parse a file from disk.
pub fn parse_file(path: &Path) -> AppResult<Upload> {
    let bytes = fs::read(path)?;
    parse(&bytes, &file_name(path))
}

pub(crate) fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
