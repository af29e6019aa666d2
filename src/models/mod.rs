// Dashboard models: series, cards and the snapshot built from them
// Pure logic, independent of UI/visualization

pub mod dashboard;
pub mod metric_card;
pub mod timeseries;

// Re-export key types for convenience
pub use dashboard::{DashboardParams, DashboardSnapshot, UtilityChart, build_dashboard};
pub use metric_card::{DeltaColor, DeltaTone, MetricCard};
pub use timeseries::{TimeSeries, build_series};
