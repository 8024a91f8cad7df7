// src/ingest/delimited.rs

use crate::errors::{AppError, AppResult};
use crate::ingest::table::{Cell, Table};

/// Legge un CSV in memoria. La prima riga è l'intestazione.
///
/// Invalid UTF-8 is decoded lossily cell by cell; only structural CSV
/// errors fail the upload.
pub(crate) fn read_csv(bytes: &[u8]) -> AppResult<Table> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(bytes);

    let headers: Vec<String> = rdr
        .byte_headers()
        .map_err(|e| AppError::Format(format!("CSV ({e})")))?
        .iter()
        .map(|h| String::from_utf8_lossy(h).into_owned())
        .collect();

    let mut table = Table::new(headers);

    for record in rdr.byte_records() {
        let record = record.map_err(|e| AppError::Format(format!("CSV ({e})")))?;
        let row = record
            .iter()
            .map(|field| Cell::from_text(&String::from_utf8_lossy(field)))
            .collect();
        table.push_row(row);
    }

    Ok(table)
}
