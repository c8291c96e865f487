// CSV parsing and file loading
pub mod csv_source;

// Embedded demo dataset
pub mod demo;

pub use csv_source::{load_or_demo, parse_rows};
pub use demo::DEMO_CSV;
