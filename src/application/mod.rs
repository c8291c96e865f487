// Drag-to-zoom range selection
pub mod range_slider;

pub use range_slider::{Handle, RangeReport, RangeSlider};
