// User interface components
pub mod app;
pub mod app_state;
pub mod chart_layers;
pub mod config;
pub mod styles;
pub mod ui_chart_view;
pub mod ui_panels;
pub mod ui_render;
pub mod ui_text;
pub mod utils;

// Re-export main app
pub use app::{AppError, DashboardApp};
pub use config::UI_CONFIG;
