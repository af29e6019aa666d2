use chrono::NaiveDate;
use eframe::{Frame, egui};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Cli;
use crate::config::DASHBOARD;
use crate::models::{DashboardParams, DashboardSnapshot};
use crate::ui::ui_chart_view::ChartView;
use crate::ui::utils::setup_custom_visuals;
use crate::utils::time_utils::local_today;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Error types for application operations
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Lookback outside the configured slider range
    InvalidLookback(u32),
    /// Initial zoom outside the configured slider range
    InvalidVisibleDays(u32),
    /// The snapshot came back without any chart
    DataNotAvailable,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidLookback(days) => write!(
                f,
                "Data window of {} days is outside {}..={}",
                days, DASHBOARD.window.min_lookback_days, DASHBOARD.window.max_lookback_days
            ),
            AppError::InvalidVisibleDays(days) => write!(
                f,
                "Initial zoom of {} days is outside {}..={}",
                days, DASHBOARD.view.min_visible_days, DASHBOARD.view.max_visible_days
            ),
            AppError::DataNotAvailable => write!(f, "No data available"),
        }
    }
}

impl std::error::Error for AppError {}

impl DashboardParams {
    /// Validates that the parameters are inside the ranges the UI offers
    pub fn is_valid(&self) -> Result<(), AppError> {
        let window = &DASHBOARD.window;
        if !(window.min_lookback_days..=window.max_lookback_days).contains(&self.lookback_days) {
            return Err(AppError::InvalidLookback(self.lookback_days));
        }
        let view = &DASHBOARD.view;
        if !(view.min_visible_days..=view.max_visible_days).contains(&self.visible_days) {
            return Err(AppError::InvalidVisibleDays(self.visible_days));
        }
        Ok(())
    }
}

#[derive(Deserialize, Serialize)]
pub struct DashboardApp {
    // UI preferences, persisted between runs
    #[serde(default = "default_lookback_days")]
    pub(super) lookback_days: u32,
    #[serde(default = "default_visible_days")]
    pub(super) visible_days: u32,
    #[serde(default = "default_show_value_labels")]
    pub(super) show_value_labels: bool,

    // Always starts on today unless overridden on the command line
    #[serde(skip, default = "local_today")]
    pub(super) reference_date: NaiveDate,

    // Random source - reseeded from entropy unless a seed was given
    #[serde(skip)]
    pub(super) seed: Option<u64>,
    #[serde(skip, default = "entropy_rng")]
    pub(super) rng: StdRng,

    // Built data - runtime only
    #[serde(skip)]
    pub(super) snapshot: Option<DashboardSnapshot>,
    #[serde(skip)]
    pub(super) last_built_params: Option<DashboardParams>,
    #[serde(skip)]
    pub(super) regenerate_requested: bool,
    #[serde(skip)]
    pub(super) last_error: Option<AppError>,
    #[serde(skip)]
    pub(super) chart_view: ChartView,
}

fn default_lookback_days() -> u32 {
    DASHBOARD.window.default_lookback_days
}

fn default_visible_days() -> u32 {
    DASHBOARD.view.default_visible_days
}

fn default_show_value_labels() -> bool {
    DASHBOARD.show_value_labels
}

fn entropy_rng() -> StdRng {
    StdRng::from_entropy()
}

pub(super) fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => entropy_rng(),
    }
}

impl DashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>, cli: &Cli) -> Self {
        let mut app: DashboardApp;

        // Attempt to load the persisted state
        if let Some(storage) = cc.storage {
            if let Some(value) = eframe::get_value(storage, eframe::APP_KEY) {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_state_serde {
                    log::info!("Successfully loaded persisted state");
                }
                app = value;
            } else {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_state_serde {
                    log::info!("No persisted dashboard state. Creating anew.");
                }
                app = DashboardApp::new_with_initial_state();
            }
        } else {
            app = DashboardApp::new_with_initial_state();
        }

        app.apply_cli(cli);
        app
    }

    pub fn new_with_initial_state() -> Self {
        Self {
            lookback_days: default_lookback_days(),
            visible_days: default_visible_days(),
            show_value_labels: default_show_value_labels(),
            reference_date: local_today(),
            seed: None,
            rng: entropy_rng(),
            snapshot: None,
            last_built_params: None,
            regenerate_requested: false,
            last_error: None,
            chart_view: ChartView::new(),
        }
    }

    /// Command-line values win over persisted preferences.
    pub(super) fn apply_cli(&mut self, cli: &Cli) {
        if let Some(date) = cli.date {
            self.reference_date = date;
        }
        if let Some(days) = cli.lookback_days {
            self.lookback_days = days;
        }
        if let Some(days) = cli.visible_days {
            self.visible_days = days;
        }
        self.seed = cli.seed;
        self.rng = rng_for(self.seed);

        // A hand-edited state file can hold anything
        self.lookback_days = self.lookback_days.clamp(
            DASHBOARD.window.min_lookback_days,
            DASHBOARD.window.max_lookback_days,
        );
        self.visible_days = self
            .visible_days
            .clamp(DASHBOARD.view.min_visible_days, DASHBOARD.view.max_visible_days);
    }
}

impl eframe::App for DashboardApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!("Application shutdown complete.");
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        // Input panels first, so this frame already draws the rebuilt snapshot
        self.render_top_panel(ctx);
        self.render_side_panel(ctx);
        self.rebuild_if_stale();
        self.render_status_panel(ctx);
        self.render_central_panel(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_are_valid() {
        let params = DashboardParams::new(NaiveDate::from_ymd_opt(2024, 6, 30).unwrap());
        assert_eq!(params.is_valid(), Ok(()));
    }

    #[test]
    fn test_out_of_range_params_are_rejected() {
        let mut params = DashboardParams::new(NaiveDate::from_ymd_opt(2024, 6, 30).unwrap());
        params.lookback_days = 0;
        assert_eq!(params.is_valid(), Err(AppError::InvalidLookback(0)));

        params.lookback_days = 30;
        params.visible_days = DASHBOARD.view.max_visible_days + 1;
        assert!(matches!(
            params.is_valid(),
            Err(AppError::InvalidVisibleDays(_))
        ));
    }

    #[test]
    fn test_persisted_state_round_trips_preferences_only() {
        let mut app = DashboardApp::new_with_initial_state();
        app.lookback_days = 60;
        app.show_value_labels = false;
        app.reference_date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();

        let json = serde_json::to_string(&app).unwrap();
        let restored: DashboardApp = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.lookback_days, 60);
        assert!(!restored.show_value_labels);
        assert_eq!(restored.reference_date, local_today(), "date is never persisted");
        assert!(restored.snapshot.is_none());
    }

    #[test]
    fn test_cli_overrides_and_clamps() {
        let mut app = DashboardApp::new_with_initial_state();
        app.visible_days = 10_000;
        let cli = Cli {
            date: NaiveDate::from_ymd_opt(2024, 6, 30),
            lookback_days: Some(5),
            visible_days: None,
            seed: Some(9),
        };
        app.apply_cli(&cli);

        assert_eq!(app.reference_date, NaiveDate::from_ymd_opt(2024, 6, 30).unwrap());
        assert_eq!(app.lookback_days, 5);
        assert_eq!(app.visible_days, DASHBOARD.view.max_visible_days);
        assert_eq!(app.seed, Some(9));
    }
}
