//! Configuration module for the plant dashboard.

pub mod dashboard;

mod debug; // Private: use crate::config::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod persistence;
pub mod plot;

// Re-export commonly used items
pub use dashboard::DASHBOARD;
pub use persistence::{APP_STATE_PATH, EXPORT_FILENAME};
pub use plot::PLOT_CONFIG;
