// Domain types and value objects
pub mod date_window;
pub mod metric;
pub mod workload;

// Re-export commonly used types
pub use date_window::{DateWindow, InitialViewRange, compute_initial_view, compute_window};
pub use metric::UtilityMetric;
pub use workload::{WORKLOAD_READINGS, WorkloadReading, workload_cards};
