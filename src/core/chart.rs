use crate::core::aggregate::matching_resets;
use crate::core::filter::filter;
use crate::core::normalize::normalize_key;
use crate::models::{ChartPoint, ChartSeries, EventTable, FilterSelection, ResetTable};
use clap::ValueEnum;
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ChartKind {
    /// Maintenances per calendar month
    Month,
    /// Maintenances per store
    Store,
    /// Resets per program of the selected vendor
    ResetProgram,
    /// Resets per store for the selected program
    ResetStore,
}

impl ChartKind {
    pub fn title(&self) -> &'static str {
        match self {
            ChartKind::Month => "Maintenances per month",
            ChartKind::Store => "Maintenances per store",
            ChartKind::ResetProgram => "Resets / updates per program",
            ChartKind::ResetStore => "Resets / updates per store",
        }
    }
}

/// Group the selection's rows for `kind`.
pub fn build_chart(
    kind: ChartKind,
    events: &EventTable,
    reset_log: &ResetTable,
    selection: &FilterSelection,
) -> ChartSeries {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();

    match kind {
        ChartKind::Month => {
            for r in filter(events, selection) {
                if let Some(t) = r.finish_time {
                    *counts.entry(t.format("%Y-%m").to_string()).or_default() += 1;
                }
            }
        }
        ChartKind::Store => {
            for r in filter(events, selection) {
                if let Some(store) = r.store_str() {
                    *counts.entry(store.to_string()).or_default() += 1;
                }
            }
        }
        ChartKind::ResetProgram => {
            for r in matching_resets(reset_log, &selection.vendor, None) {
                if let Some(program) = r.program.as_deref().and_then(normalize_key) {
                    *counts.entry(program).or_default() += 1;
                }
            }
        }
        ChartKind::ResetStore => {
            let program = Some(selection.program.as_str());
            for r in matching_resets(reset_log, &selection.vendor, program) {
                if let Some(store) = r.store.as_deref().and_then(normalize_key) {
                    *counts.entry(store).or_default() += 1;
                }
            }
        }
    }

    ChartSeries {
        title: kind.title().to_string(),
        points: counts
            .into_iter()
            .map(|(label, count)| ChartPoint { label, count })
            .collect(),
    }
}
