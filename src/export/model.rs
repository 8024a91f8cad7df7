// src/export/model.rs

use crate::models::{AggregateResult, FilterSelection};
use crate::utils::formatting::format_avg;
use serde::Serialize;

/// Struttura “piatta” per export dei KPI di una selezione.
#[derive(Serialize, Clone, Debug)]
pub struct ReportRow {
    pub vendor: String,
    pub program: String,
    pub period_start: String,
    pub period_end: String,
    pub maintenances: usize,
    pub resets: usize,
    pub stores: usize,
    pub bays: usize,
    pub avg_per_bay: f64,
}

impl ReportRow {
    pub fn new(selection: &FilterSelection, result: &AggregateResult) -> Self {
        let day = |d: Option<chrono::NaiveDateTime>| {
            d.map(|dt| dt.format("%Y-%m-%d").to_string())
                .unwrap_or_default()
        };

        Self {
            vendor: selection.vendor.clone(),
            program: selection.program.clone(),
            period_start: day(result.period_start),
            period_end: day(result.period_end),
            maintenances: result.maintenance_count,
            resets: result.reset_count,
            stores: result.store_count,
            bays: result.bay_count,
            avg_per_bay: result.avg_per_bay,
        }
    }
}

/// Header per CSV / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "vendor",
        "program",
        "period_start",
        "period_end",
        "maintenances",
        "resets",
        "stores",
        "bays",
        "avg_per_bay",
    ]
}

/// Convert una riga in celle di testo (per XLSX).
pub(crate) fn report_to_row(r: &ReportRow) -> Vec<String> {
    vec![
        r.vendor.clone(),
        r.program.clone(),
        r.period_start.clone(),
        r.period_end.clone(),
        r.maintenances.to_string(),
        r.resets.to_string(),
        r.stores.to_string(),
        r.bays.to_string(),
        format_avg(r.avg_per_bay),
    ]
}
