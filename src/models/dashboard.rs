use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::config::DASHBOARD;
use crate::data::UniformDailySource;
use crate::domain::{
    DateWindow, InitialViewRange, UtilityMetric, compute_initial_view, compute_window,
    workload_cards,
};
use crate::models::metric_card::MetricCard;
use crate::models::timeseries::{TimeSeries, build_series};

/// Everything the dashboard needs from the user to build a snapshot.
///
/// Compared with `==` to decide whether the snapshot is stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DashboardParams {
    pub reference_date: NaiveDate,
    pub lookback_days: u32,
    pub visible_days: u32,
}

impl DashboardParams {
    pub fn new(reference_date: NaiveDate) -> Self {
        Self {
            reference_date,
            lookback_days: DASHBOARD.window.default_lookback_days,
            visible_days: DASHBOARD.view.default_visible_days,
        }
    }
}

/// One utility's chart: the full-window series plus its default zoom.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UtilityChart {
    pub metric: UtilityMetric,
    pub series: TimeSeries,
    pub initial_view: InitialViewRange,
    pub card: Option<MetricCard>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub params: DashboardParams,
    pub window: DateWindow,
    pub initial_view: InitialViewRange,
    pub charts: Vec<UtilityChart>,
    pub workload: Vec<MetricCard>,
}

impl DashboardSnapshot {
    pub fn chart(&self, metric: UtilityMetric) -> Option<&UtilityChart> {
        self.charts.iter().find(|chart| chart.metric == metric)
    }
}

/// Build a fresh snapshot: one window, one series per utility, cards derived from the series.
pub fn build_dashboard<R: Rng>(params: DashboardParams, rng: &mut R) -> DashboardSnapshot {
    let window = compute_window(params.reference_date, params.lookback_days);
    let initial_view = compute_initial_view(&window, params.visible_days);

    let charts = UtilityMetric::iter()
        .map(|metric| {
            let mut source = UniformDailySource::new(&mut *rng, metric.sample_range());
            let series = build_series(&window, &mut source);
            let card = MetricCard::from_series(metric, &series, params.reference_date);
            UtilityChart {
                metric,
                series,
                initial_view,
                card,
            }
        })
        .collect();

    DashboardSnapshot {
        params,
        window,
        initial_view,
        charts,
        workload: workload_cards(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn params(lookback_days: u32, visible_days: u32) -> DashboardParams {
        DashboardParams {
            reference_date: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
            lookback_days,
            visible_days,
        }
    }

    #[test]
    fn test_snapshot_has_chart_per_utility() {
        let snapshot = build_dashboard(params(30, 10), &mut StdRng::seed_from_u64(3));

        assert_eq!(snapshot.charts.len(), 3);
        assert_eq!(snapshot.window.day_count(), 31);
        for chart in &snapshot.charts {
            assert_eq!(chart.series.len(), snapshot.window.day_count());
            assert_eq!(chart.initial_view, snapshot.initial_view);
            assert_eq!(chart.initial_view.day_count(), 10);

            let range = chart.metric.sample_range();
            assert!(
                chart
                    .series
                    .values
                    .iter()
                    .all(|v| *v >= f64::from(range.start) && *v < f64::from(range.end)),
                "{} readings out of range",
                chart.metric
            );

            let card = chart.card.as_ref().expect("non-empty series has a card");
            assert_eq!(Some(card.value), chart.series.last().map(|(_, v)| v));
        }
        assert_eq!(snapshot.workload.len(), 3);
    }

    #[test]
    fn test_short_window_shows_everything() {
        let snapshot = build_dashboard(params(5, 10), &mut StdRng::seed_from_u64(3));
        assert_eq!(snapshot.initial_view.start, snapshot.window.start);
        assert_eq!(snapshot.initial_view.day_count(), 6);
    }

    #[test]
    fn test_same_seed_same_snapshot() {
        let a = build_dashboard(params(30, 10), &mut StdRng::seed_from_u64(11));
        let b = build_dashboard(params(30, 10), &mut StdRng::seed_from_u64(11));
        assert_eq!(a, b);
    }

    #[test]
    fn test_utilities_draw_independent_values() {
        let snapshot = build_dashboard(params(30, 10), &mut StdRng::seed_from_u64(5));
        let water = snapshot.chart(UtilityMetric::Water).unwrap();
        let gas = snapshot.chart(UtilityMetric::Gas).unwrap();
        assert_ne!(water.series.values, gas.series.values);
    }
}
