use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Inclusive range of calendar days (daily frequency) for which data is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// Number of days in the window, both ends included.
    pub fn day_count(&self) -> usize {
        (self.end - self.start).num_days() as usize + 1
    }

    /// Every day from `start` to `end`, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Default zoom of a chart: the most recent days of a [`DateWindow`].
/// Never used to filter a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InitialViewRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl InitialViewRange {
    pub fn day_count(&self) -> usize {
        (self.end - self.start).num_days() as usize + 1
    }
}

/// Window ending at `reference_date` and reaching `lookback_days` back.
///
/// `end - start` is exactly `lookback_days`, so the window holds
/// `lookback_days + 1` days. The start saturates at [`NaiveDate::MIN`].
pub fn compute_window(reference_date: NaiveDate, lookback_days: u32) -> DateWindow {
    let start = reference_date
        .checked_sub_days(Days::new(u64::from(lookback_days)))
        .unwrap_or(NaiveDate::MIN);

    DateWindow {
        start,
        end: reference_date,
    }
}

/// Trailing `visible_days` of the window, or the whole window when it is shorter.
pub fn compute_initial_view(window: &DateWindow, visible_days: u32) -> InitialViewRange {
    let visible = visible_days as usize;
    if visible == 0 || window.day_count() < visible {
        return InitialViewRange {
            start: window.start,
            end: window.end,
        };
    }

    // Cannot underflow: at least `visible_days` days precede `end` inside the window.
    let start = window
        .end
        .checked_sub_days(Days::new(u64::from(visible_days - 1)))
        .unwrap_or(window.start);

    InitialViewRange {
        start,
        end: window.end,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_window_ends_at_reference_date() {
        let reference = date(2024, 6, 30);
        for lookback in [1, 5, 7, 30, 90, 366] {
            let window = compute_window(reference, lookback);
            assert_eq!(window.end, reference);
            assert_eq!(
                (window.end - window.start).num_days(),
                i64::from(lookback),
                "lookback {lookback} should span exactly that many days"
            );
            assert!(window.start <= window.end);
        }
    }

    #[test]
    fn test_thirty_day_lookback() {
        let window = compute_window(date(2024, 6, 30), 30);
        assert_eq!(window.start, date(2024, 5, 31));
        assert_eq!(window.end, date(2024, 6, 30));
        assert_eq!(window.day_count(), 31);

        let view = compute_initial_view(&window, 10);
        assert_eq!(view.start, date(2024, 6, 21));
        assert_eq!(view.end, date(2024, 6, 30));
        assert_eq!(view.day_count(), 10);
    }

    #[test]
    fn test_initial_view_falls_back_to_whole_window() {
        let window = compute_window(date(2024, 6, 30), 5);
        assert_eq!(window.day_count(), 6);

        let view = compute_initial_view(&window, 10);
        assert_eq!(view.start, date(2024, 6, 25), "short window is shown in full");
        assert_eq!(view.end, date(2024, 6, 30));
        assert_eq!(view.day_count(), 6);
    }

    #[test]
    fn test_initial_view_is_min_of_visible_and_window() {
        let reference = date(2023, 3, 1); // crosses February in a non-leap year
        for lookback in [0, 1, 3, 9, 10, 30] {
            let window = compute_window(reference, lookback);
            for visible in [1, 2, 10, 11, 40] {
                let view = compute_initial_view(&window, visible);
                assert_eq!(view.end, window.end);
                assert!(view.start >= window.start);
                assert_eq!(
                    view.day_count(),
                    (visible as usize).min(window.day_count()),
                    "lookback {lookback}, visible {visible}"
                );
            }
        }
    }

    #[test]
    fn test_days_iterates_inclusive_range() {
        let window = compute_window(date(2024, 2, 27), 3);
        let days: Vec<_> = window.days().collect();
        assert_eq!(
            days,
            vec![
                date(2024, 2, 24),
                date(2024, 2, 25),
                date(2024, 2, 26),
                date(2024, 2, 27)
            ]
        );
        assert!(window.contains(date(2024, 2, 25)));
        assert!(!window.contains(date(2024, 2, 28)));
    }

    #[test]
    fn test_window_start_saturates_at_calendar_minimum() {
        let window = compute_window(NaiveDate::MIN, 30);
        assert_eq!(window.start, NaiveDate::MIN);
        assert_eq!(window.day_count(), 1);
    }
}
