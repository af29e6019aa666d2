//! File persistence configuration

// App state persistence
/// Path for saving/loading UI preferences (native only)
pub const APP_STATE_PATH: &str = ".dashboard_state.json";

/// Default file name used by `export_series` when `--output` names a directory
pub const EXPORT_FILENAME: &str = "dashboard_snapshot.json";
