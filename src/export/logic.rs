// src/export/logic.rs

use crate::core::aggregate::aggregate;
use crate::core::filter::{selectable_programs, selectable_vendors};
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::ReportRow;
use crate::export::xlsx::export_xlsx;
use crate::ingest::Upload;
use crate::models::FilterSelection;
use crate::ui::messages::warning;
use std::path::Path;

/// Logica di alto livello per l'export del report KPI.
pub struct ExportLogic;

impl ExportLogic {
    /// One row for `selection`, or one row per vendor/program pair when
    /// `selection` is `None`.
    pub fn build_rows(upload: &Upload, selection: Option<&FilterSelection>) -> Vec<ReportRow> {
        let selections: Vec<FilterSelection> = match selection {
            Some(s) => vec![s.clone()],
            None => selectable_vendors(&upload.events)
                .into_iter()
                .flat_map(|vendor| {
                    selectable_programs(&upload.events, &vendor)
                        .into_iter()
                        .map(move |program| FilterSelection {
                            vendor: vendor.clone(),
                            program,
                        })
                })
                .collect(),
        };

        selections
            .iter()
            .map(|s| ReportRow::new(s, &aggregate(&upload.events, &upload.reset_log, s)))
            .collect()
    }

    /// Write `rows` to `path`.
    ///
    /// - `format`: `None` infers the format from the file extension
    /// - `force`: overwrite without asking
    pub fn export(
        rows: &[ReportRow],
        format: Option<ExportFormat>,
        path: &Path,
        force: bool,
    ) -> AppResult<()> {
        let format = match format {
            Some(f) => f,
            None => ExportFormat::from_path(path)?,
        };

        ensure_writable(path, force)?;

        if rows.is_empty() {
            warning("No vendor/program pairs found, the report will be empty.");
        }

        match format {
            ExportFormat::Csv => export_csv(rows, path)?,
            ExportFormat::Json => export_json(rows, path)?,
            ExportFormat::Xlsx => export_xlsx(rows, path)?,
        }

        Ok(())
    }
}
