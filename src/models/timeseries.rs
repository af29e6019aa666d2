use chrono::NaiveDate;
use itertools::{Itertools, MinMaxResult};
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

use crate::data::ValueSource;
use crate::domain::DateWindow;
use crate::utils::maths_utils;

// ============================================================================
// TimeSeries: one reading per calendar day, in date order
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct TimeSeries {
    // Parallel columns, same length, dates strictly increasing by one day
    pub dates: Vec<NaiveDate>,
    pub values: Vec<f64>,
}

/// Build a daily series over `window`, asking `value_source` for each day in turn.
pub fn build_series<S>(window: &DateWindow, value_source: &mut S) -> TimeSeries
where
    S: ValueSource + ?Sized,
{
    let capacity = window.day_count();
    let mut dates = Vec::with_capacity(capacity);
    let mut values = Vec::with_capacity(capacity);

    for date in window.days() {
        // Readings are usage figures, never negative
        values.push(value_source.sample(date).max(0.0));
        dates.push(date);
    }

    TimeSeries { dates, values }
}

impl TimeSeries {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.dates.iter().copied().zip(self.values.iter().copied())
    }

    pub fn last(&self) -> Option<(NaiveDate, f64)> {
        Some((*self.dates.last()?, *self.values.last()?))
    }

    pub fn value_on(&self, date: NaiveDate) -> Option<f64> {
        let idx = self.dates.binary_search(&date).ok()?;
        self.values.get(idx).copied()
    }

    /// Latest reading minus the one before it.
    pub fn day_over_day_delta(&self) -> Option<f64> {
        match self.values.as_slice() {
            [.., previous, latest] => Some(latest - previous),
            _ => None,
        }
    }

    pub fn value_range(&self) -> Option<(f64, f64)> {
        match self.values.iter().copied().minmax_by(f64::total_cmp) {
            MinMaxResult::NoElements => None,
            MinMaxResult::OneElement(v) => Some((v, v)),
            MinMaxResult::MinMax(min, max) => Some((min, max)),
        }
    }

    pub fn max_value(&self) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        Some(maths_utils::get_max(&self.values))
    }

    pub fn mean(&self) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        Some(self.values.iter().mean())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::UniformDailySource;
    use crate::domain::compute_window;
    use chrono::Datelike;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_series_length_matches_window() {
        let mut source = |_: NaiveDate| 1.0;
        for lookback in [0, 1, 6, 30, 365] {
            let window = compute_window(date(2024, 3, 10), lookback);
            let series = build_series(&window, &mut source);
            assert_eq!(
                series.len() as i64,
                (window.end - window.start).num_days() + 1,
                "lookback {lookback}"
            );
            assert_eq!(series.dates.len(), series.values.len());
        }
    }

    #[test]
    fn test_series_dates_step_one_day() {
        let window = compute_window(date(2024, 3, 2), 30); // spans the leap day
        let mut source = |d: NaiveDate| f64::from(d.day());
        let series = build_series(&window, &mut source);

        assert_eq!(series.dates.first(), Some(&window.start));
        assert_eq!(series.dates.last(), Some(&window.end));
        for (a, b) in series.dates.iter().tuple_windows() {
            assert_eq!((*b - *a).num_days(), 1, "gap between {a} and {b}");
        }
        assert_eq!(series.value_on(date(2024, 2, 29)), Some(29.0));
    }

    #[test]
    fn test_source_sees_every_day_in_order() {
        let window = compute_window(date(2024, 6, 30), 4);
        let mut seen = Vec::new();
        let mut source = |d: NaiveDate| {
            seen.push(d);
            0.0
        };
        build_series(&window, &mut source);
        assert_eq!(seen, window.days().collect::<Vec<_>>());
    }

    #[test]
    fn test_negative_readings_are_clamped() {
        let window = compute_window(date(2024, 6, 30), 2);
        let mut source = |_: NaiveDate| -12.0;
        let series = build_series(&window, &mut source);
        assert!(series.values.iter().all(|v| *v >= 0.0));
    }

    #[test]
    fn test_seeded_source_is_reproducible() {
        let window = compute_window(date(2024, 6, 30), 30);
        let mut a = UniformDailySource::new(StdRng::seed_from_u64(42), 300..500);
        let mut b = UniformDailySource::new(StdRng::seed_from_u64(42), 300..500);
        assert_eq!(build_series(&window, &mut a), build_series(&window, &mut b));
    }

    #[test]
    fn test_summary_helpers() {
        let series = TimeSeries {
            dates: vec![date(2024, 6, 28), date(2024, 6, 29), date(2024, 6, 30)],
            values: vec![900.0, 1200.0, 1100.0],
        };
        assert_eq!(series.last(), Some((date(2024, 6, 30), 1100.0)));
        assert_eq!(series.day_over_day_delta(), Some(-100.0));
        assert_eq!(series.value_range(), Some((900.0, 1200.0)));
        assert_eq!(series.max_value(), Some(1200.0));
        let mean = series.mean().unwrap();
        assert!((mean - 1066.666).abs() < 0.01);
    }

    #[test]
    fn test_single_point_has_no_delta() {
        let series = TimeSeries {
            dates: vec![date(2024, 6, 30)],
            values: vec![5.0],
        };
        assert_eq!(series.day_over_day_delta(), None);
        assert_eq!(series.value_range(), Some((5.0, 5.0)));
        assert_eq!(TimeSeries::default().mean(), None);
    }
}
