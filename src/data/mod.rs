// Data sources feeding the dashboard series
pub mod value_source;

// Re-export commonly used types
pub use value_source::{UniformDailySource, ValueSource};
