// Typed rows and display points
pub mod types;

// Row -> Point mapping
pub mod builder;

// Trailing/explicit window slicing
pub mod window;

// Signal audit trail and outcome tallies
pub mod audit;

pub use audit::{OutcomeCounts, SignalChange, latest_signal, outcome_counts, signal_changes};
pub use builder::build_series;
pub use types::{Outcome, Point, Row, Signal};
pub use window::{range_slice, trailing_slice};
