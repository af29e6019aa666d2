use crate::models::{DashboardParams, build_dashboard};
use crate::ui::ui_panels::SettingsEvent;
use crate::utils::app_time;

use super::app::{AppError, DashboardApp, rng_for};
#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

impl DashboardApp {
    pub(super) fn current_params(&self) -> DashboardParams {
        DashboardParams {
            reference_date: self.reference_date,
            lookback_days: self.lookback_days,
            visible_days: self.visible_days,
        }
    }

    pub(super) fn needs_rebuild(&self) -> bool {
        self.regenerate_requested || self.last_built_params != Some(self.current_params())
    }

    /// Rebuild the snapshot when an input changed; otherwise keep what is on screen.
    pub(super) fn rebuild_if_stale(&mut self) {
        if !self.needs_rebuild() {
            return;
        }

        let params = self.current_params();
        self.regenerate_requested = false;
        self.last_built_params = Some(params);

        if let Err(error) = params.is_valid() {
            log::warn!("Not rebuilding dashboard: {}", error);
            self.snapshot = None;
            self.last_error = Some(error);
            return;
        }

        let started = app_time::now();
        let snapshot = build_dashboard(params, &mut self.rng);

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_rebuilds {
            log::info!(
                "[rebuild] {} .. {} ({} days) in {:.2} ms",
                snapshot.window.start,
                snapshot.window.end,
                snapshot.window.day_count(),
                app_time::elapsed_ms(started)
            );
        }
        #[cfg(not(debug_assertions))]
        let _ = started;

        if snapshot.charts.is_empty() {
            self.snapshot = None;
            self.last_error = Some(AppError::DataNotAvailable);
            return;
        }

        self.last_error = None;
        self.snapshot = Some(snapshot);
    }

    pub(super) fn handle_settings_event(&mut self, event: SettingsEvent) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("[settings] {:?}", event);
        }

        match event {
            SettingsEvent::ReferenceDate(date) => self.reference_date = date,
            SettingsEvent::LookbackDays(days) => self.lookback_days = days,
            SettingsEvent::VisibleDays(days) => self.visible_days = days,
            SettingsEvent::ValueLabels(show) => self.show_value_labels = show,
            SettingsEvent::Regenerate => {
                // Fresh values no longer match any seed
                self.seed = None;
                self.rng = rng_for(None);
                self.regenerate_requested = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn app_on(date: NaiveDate) -> DashboardApp {
        let mut app = DashboardApp::new_with_initial_state();
        app.reference_date = date;
        app.rng = rng_for(Some(1));
        app
    }

    #[test]
    fn test_snapshot_is_built_once_per_input_change() {
        let day = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        let mut app = app_on(day);

        assert!(app.needs_rebuild());
        app.rebuild_if_stale();
        let first = app.snapshot.clone().expect("snapshot built");
        assert!(!app.needs_rebuild());

        // Nothing changed: the same values stay on screen
        app.rebuild_if_stale();
        assert_eq!(app.snapshot.as_ref(), Some(&first));

        app.handle_settings_event(SettingsEvent::ReferenceDate(day.pred_opt().unwrap()));
        assert!(app.needs_rebuild());
        app.rebuild_if_stale();
        let second = app.snapshot.as_ref().unwrap();
        assert_eq!(second.window.end, NaiveDate::from_ymd_opt(2024, 6, 29).unwrap());
    }

    #[test]
    fn test_value_label_toggle_does_not_rebuild() {
        let mut app = app_on(NaiveDate::from_ymd_opt(2024, 6, 30).unwrap());
        app.rebuild_if_stale();
        app.handle_settings_event(SettingsEvent::ValueLabels(false));
        assert!(!app.needs_rebuild());
        assert!(!app.show_value_labels);
    }

    #[test]
    fn test_regenerate_forces_rebuild() {
        let mut app = app_on(NaiveDate::from_ymd_opt(2024, 6, 30).unwrap());
        app.rebuild_if_stale();
        app.handle_settings_event(SettingsEvent::Regenerate);
        assert!(app.needs_rebuild());
        app.rebuild_if_stale();
        assert!(!app.needs_rebuild());
        assert!(app.snapshot.is_some());
    }

    #[test]
    fn test_regenerate_forgets_cli_seed() {
        let day = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        let mut app = app_on(day);
        app.seed = Some(42);
        app.rng = rng_for(Some(42));
        app.rebuild_if_stale();
        let seeded = app.snapshot.clone().unwrap();

        app.handle_settings_event(SettingsEvent::Regenerate);
        app.rebuild_if_stale();

        assert_eq!(app.seed, None, "status bar must not claim the old seed");
        let replay = build_dashboard(app.current_params(), &mut rng_for(Some(42)));
        assert_eq!(replay, seeded);
        assert_ne!(app.snapshot.as_ref(), Some(&seeded));
    }

    #[test]
    fn test_invalid_params_surface_an_error() {
        let mut app = app_on(NaiveDate::from_ymd_opt(2024, 6, 30).unwrap());
        app.lookback_days = 0;
        app.rebuild_if_stale();
        assert!(app.snapshot.is_none());
        assert_eq!(app.last_error, Some(AppError::InvalidLookback(0)));
    }
}
