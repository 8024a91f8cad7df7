use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::BTreeSet;

/// Columns of the `Data` sheet the dashboard knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum EventColumn {
    FinishTime, // FinishTime
    BayNumber,  // bay number
    Bay,        // Bay
    Location,   // Location
    Vendor,     // Vendor
    Program,    // Program
    Store,      // Store
}

impl EventColumn {
    pub const ALL: [EventColumn; 7] = [
        EventColumn::FinishTime,
        EventColumn::BayNumber,
        EventColumn::Bay,
        EventColumn::Location,
        EventColumn::Vendor,
        EventColumn::Program,
        EventColumn::Store,
    ];

    /// Header text as it appears in the uploaded sheet.
    pub fn header(&self) -> &'static str {
        match self {
            EventColumn::FinishTime => "FinishTime",
            EventColumn::BayNumber => "bay number",
            EventColumn::Bay => "Bay",
            EventColumn::Location => "Location",
            EventColumn::Vendor => "Vendor",
            EventColumn::Program => "Program",
            EventColumn::Store => "Store",
        }
    }

    pub fn from_header(header: &str) -> Option<Self> {
        let header = header.trim();
        Self::ALL.into_iter().find(|c| c.header() == header)
    }
}

/// One maintenance visit after normalization.
///
/// `vendor`, `program`, `store` and `bay_number` are upper-cased and
/// trimmed; `bay` and `location` are only trimmed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EventRecord {
    pub vendor: Option<String>,
    pub program: Option<String>,
    pub store: Option<String>,
    pub bay_number: Option<String>,
    pub bay: Option<String>,
    pub location: Option<String>,
    pub finish_time: Option<NaiveDateTime>,
}

impl EventRecord {
    pub fn vendor_str(&self) -> Option<&str> {
        self.vendor.as_deref()
    }

    pub fn program_str(&self) -> Option<&str> {
        self.program.as_deref()
    }

    pub fn store_str(&self) -> Option<&str> {
        self.store.as_deref()
    }
}

/// The normalized `Data` table. Built once per upload and never mutated.
#[derive(Debug, Clone, Default)]
pub struct EventTable {
    /// Columns that were present in the source.
    pub columns: BTreeSet<EventColumn>,
    pub records: Vec<EventRecord>,
    /// Non-empty `FinishTime` cells that could not be read as a date.
    pub unparsed_times: usize,
}

impl EventTable {
    pub fn has_column(&self, column: EventColumn) -> bool {
        self.columns.contains(&column)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
