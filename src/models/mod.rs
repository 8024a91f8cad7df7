pub mod event;
pub mod reset;
pub mod summary;

pub use event::{EventColumn, EventRecord, EventTable};
pub use reset::{ResetRecord, ResetTable};
pub use summary::{AggregateResult, ChartPoint, ChartSeries, FilterSelection};
