pub mod aggregate;
pub mod chart;
pub mod filter;
pub mod images;
pub mod normalize;
pub mod session;

pub use aggregate::aggregate;
pub use chart::{ChartKind, build_chart};
pub use filter::{default_selection, filter, selectable_programs, selectable_vendors};
pub use images::{ImageArchives, ResolvedImage, resolve_image};
pub use session::Session;
