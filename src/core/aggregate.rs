//! KPI computation for one vendor/program selection.

use crate::core::filter::filter;
use crate::core::normalize::normalize_key;
use crate::models::{
    AggregateResult, EventRecord, EventTable, FilterSelection, ResetRecord, ResetTable,
};
use chrono::NaiveDateTime;
use std::collections::HashSet;

/// Bay-like columns in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BayColumn {
    Bay,
    Location,
    BayNumber,
}

impl BayColumn {
    pub const PRIORITY: [BayColumn; 3] =
        [BayColumn::Bay, BayColumn::Location, BayColumn::BayNumber];

    pub fn value<'a>(&self, record: &'a EventRecord) -> Option<&'a str> {
        match self {
            BayColumn::Bay => record.bay.as_deref(),
            BayColumn::Location => record.location.as_deref(),
            BayColumn::BayNumber => record.bay_number.as_deref(),
        }
    }
}

/// First bay-like column with at least one value among `rows`.
pub fn resolve_bay_column(rows: &[&EventRecord]) -> Option<BayColumn> {
    BayColumn::PRIORITY
        .into_iter()
        .find(|col| rows.iter().any(|r| col.value(r).is_some()))
}

fn distinct_count<'a>(values: impl Iterator<Item = Option<&'a str>>) -> usize {
    values.flatten().collect::<HashSet<_>>().len()
}

/// Maintenances per bay rounded half-up to two decimals, 0 when there are
/// no bays. Rounding works on integer hundredths so `.xx5` ties go up.
pub fn avg_per_bay(maintenance_count: usize, bay_count: usize) -> f64 {
    if bay_count == 0 {
        return 0.0;
    }
    let hundredths = (maintenance_count * 200 + bay_count) / (2 * bay_count);
    hundredths as f64 / 100.0
}

/// Earliest and latest finish time among `rows`.
pub fn period(rows: &[&EventRecord]) -> (Option<NaiveDateTime>, Option<NaiveDateTime>) {
    let times = rows.iter().filter_map(|r| r.finish_time);
    let start = times.clone().min();
    let end = times.max();
    (start, end)
}

/// Reset rows for `vendor` (and `program`, when given).
///
/// Reset values are normalized here, per query, not at load time.
pub fn matching_resets<'a>(
    reset_log: &'a ResetTable,
    vendor: &str,
    program: Option<&str>,
) -> Vec<&'a ResetRecord> {
    reset_log
        .records
        .iter()
        .filter(|r| r.vendor.as_deref().and_then(normalize_key).as_deref() == Some(vendor))
        .filter(|r| match program {
            Some(p) => r.program.as_deref().and_then(normalize_key).as_deref() == Some(p),
            None => true,
        })
        .collect()
}

pub fn reset_count(reset_log: &ResetTable, selection: &FilterSelection) -> usize {
    if reset_log.is_empty() {
        return 0;
    }
    matching_resets(reset_log, &selection.vendor, Some(selection.program.as_str())).len()
}

/// Compute the KPIs for `selection`.
pub fn aggregate(
    events: &EventTable,
    reset_log: &ResetTable,
    selection: &FilterSelection,
) -> AggregateResult {
    let rows = filter(events, selection);

    let store_count = distinct_count(rows.iter().map(|r| r.store_str()));
    let bay_count = resolve_bay_column(&rows)
        .map(|col| distinct_count(rows.iter().map(|r| col.value(r))))
        .unwrap_or(0);
    let maintenance_count = rows.len();
    let (period_start, period_end) = period(&rows);

    AggregateResult {
        period_start,
        period_end,
        store_count,
        bay_count,
        maintenance_count,
        avg_per_bay: avg_per_bay(maintenance_count, bay_count),
        reset_count: reset_count(reset_log, selection),
    }
}
