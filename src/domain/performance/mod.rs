// Performance statistics domain
pub mod stats;
pub mod summary;

pub use stats::{PERIODS_PER_YEAR, Stats};
pub use summary::{CurveStats, StatsSummary, summarize};
