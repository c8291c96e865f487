// Series data model and window transforms
pub mod series;

// Performance statistics
pub mod performance;

// Domain-specific error types
pub mod errors;
