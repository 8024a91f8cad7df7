use crate::core::normalize::normalize_key;
use crate::errors::{AppError, AppResult};
use crate::models::{EventRecord, EventTable, FilterSelection};
use std::collections::BTreeSet;

/// Distinct vendors, sorted ascending.
pub fn selectable_vendors(events: &EventTable) -> Vec<String> {
    events
        .records
        .iter()
        .filter_map(EventRecord::vendor_str)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Distinct programs recorded for `vendor`, sorted ascending.
pub fn selectable_programs(events: &EventTable, vendor: &str) -> Vec<String> {
    events
        .records
        .iter()
        .filter(|r| r.vendor_str() == Some(vendor))
        .filter_map(EventRecord::program_str)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// First vendor and that vendor's first program.
pub fn default_selection(events: &EventTable) -> AppResult<FilterSelection> {
    FilterSelection::resolve(events, None, None)
}

/// Rows matching the selection exactly on normalized vendor and program.
pub fn filter<'a>(events: &'a EventTable, selection: &FilterSelection) -> Vec<&'a EventRecord> {
    events
        .records
        .iter()
        .filter(|r| {
            r.vendor_str() == Some(selection.vendor.as_str())
                && r.program_str() == Some(selection.program.as_str())
        })
        .collect()
}

impl FilterSelection {
    /// Build a selection from optional user input.
    ///
    /// Input is normalized the same way the data is. Missing values fall
    /// back to the defaults; unknown values are rejected.
    pub fn resolve(
        events: &EventTable,
        vendor: Option<&str>,
        program: Option<&str>,
    ) -> AppResult<Self> {
        let vendors = selectable_vendors(events);
        if vendors.is_empty() {
            return Err(AppError::EmptyDataset);
        }

        let vendor = match vendor.and_then(normalize_key) {
            Some(v) if vendors.contains(&v) => v,
            Some(v) => {
                return Err(AppError::InvalidSelection(format!(
                    "vendor '{v}' not found (available: {})",
                    vendors.join(", ")
                )));
            }
            None => vendors[0].clone(),
        };

        let programs = selectable_programs(events, &vendor);
        if programs.is_empty() {
            return Err(AppError::InvalidSelection(format!(
                "no programs recorded for vendor '{vendor}'"
            )));
        }

        let program = match program.and_then(normalize_key) {
            Some(p) if programs.contains(&p) => p,
            Some(p) => {
                return Err(AppError::InvalidSelection(format!(
                    "program '{p}' not found for vendor '{vendor}' (available: {})",
                    programs.join(", ")
                )));
            }
            None => programs[0].clone(),
        };

        Ok(FilterSelection { vendor, program })
    }
}
