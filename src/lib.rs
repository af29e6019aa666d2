#![allow(clippy::collapsible_if)]

// Core modules
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use data::{UniformDailySource, ValueSource};
pub use domain::{DateWindow, InitialViewRange, UtilityMetric, compute_initial_view, compute_window};
pub use models::{DashboardParams, DashboardSnapshot, TimeSeries, build_dashboard, build_series};
pub use ui::DashboardApp;
pub use utils::app_time;

// CLI argument parsing
use chrono::NaiveDate;
use clap::Parser;

use crate::config::DASHBOARD;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Date to open the dashboard on (YYYY-MM-DD). Defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Days of history before the selected date
    #[arg(
        long,
        value_parser = clap::value_parser!(u32).range(
            DASHBOARD.window.min_lookback_days as i64..=DASHBOARD.window.max_lookback_days as i64
        )
    )]
    pub lookback_days: Option<u32>,

    /// Most recent days shown when a chart first opens
    #[arg(
        long,
        value_parser = clap::value_parser!(u32).range(
            DASHBOARD.view.min_visible_days as i64..=DASHBOARD.view.max_visible_days as i64
        )
    )]
    pub visible_days: Option<u32>,

    /// Seed for the mock readings, for reproducible screenshots
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Cli {
    /// Dashboard parameters for a headless build, filling gaps with defaults
    pub fn params(&self, today: NaiveDate) -> DashboardParams {
        let defaults = DashboardParams::new(self.date.unwrap_or(today));
        DashboardParams {
            lookback_days: self.lookback_days.unwrap_or(defaults.lookback_days),
            visible_days: self.visible_days.unwrap_or(defaults.visible_days),
            ..defaults
        }
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext, cli: &Cli) -> Box<dyn eframe::App> {
    Box::new(ui::DashboardApp::new(cc, cli))
}
