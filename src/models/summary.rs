use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;

/// Vendor/program pair the dashboard is currently showing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterSelection {
    pub vendor: String,
    pub program: String,
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.vendor, self.program)
    }
}

/// KPIs for one selection. Recomputed on every selection change.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AggregateResult {
    pub period_start: Option<NaiveDateTime>,
    pub period_end: Option<NaiveDateTime>,
    pub store_count: usize,
    pub bay_count: usize,
    pub maintenance_count: usize,
    pub avg_per_bay: f64,
    pub reset_count: usize,
}

impl AggregateResult {
    pub fn has_period(&self) -> bool {
        self.period_start.is_some() && self.period_end.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub count: usize,
}

/// Grouped counts ready to be drawn as a bar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSeries {
    pub title: String,
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    pub fn max_count(&self) -> usize {
        self.points.iter().map(|p| p.count).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
