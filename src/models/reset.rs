use serde::Serialize;

/// A row of the `Reset_Update` sheet, kept as raw text.
/// Matching against a selection normalizes these values on every query.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResetRecord {
    pub vendor: Option<String>,
    pub program: Option<String>,
    pub store: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ResetTable {
    pub headers: Vec<String>,
    pub records: Vec<ResetRecord>,
}

impl ResetTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
