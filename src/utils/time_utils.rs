use chrono::{Datelike, Local, NaiveDate};

pub struct TimeUtils;

impl TimeUtils {
    pub const STANDARD_DATE_FORMAT: &str = "%Y-%m-%d";
    /// Hover tooltips
    pub const TOOLTIP_DATE_FORMAT: &str = "%Y/%m/%d";
    /// Axis ticks when zoomed in
    pub const SHORT_TICK_FORMAT: &str = "%m/%d";
    /// Axis ticks when zoomed out far enough to span years
    pub const LONG_TICK_FORMAT: &str = "%y/%m/%d";

    /// Plot x coordinate of a day: whole days since 0001-01-01, so one bar per unit.
    pub fn date_to_plot_x(date: NaiveDate) -> f64 {
        f64::from(date.num_days_from_ce())
    }

    /// Nearest day for a plot x coordinate, if it is a representable date.
    pub fn plot_x_to_date(x: f64) -> Option<NaiveDate> {
        let days = x.round();
        if !days.is_finite() || days < f64::from(i32::MIN) || days > f64::from(i32::MAX) {
            return None;
        }
        NaiveDate::from_num_days_from_ce_opt(days as i32)
    }

    pub fn format_date(date: NaiveDate, format: &str) -> String {
        date.format(format).to_string()
    }
}

/// Today's date in the local timezone; the default reference date.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_x_round_trips_through_dates() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let x = TimeUtils::date_to_plot_x(date);
        assert_eq!(TimeUtils::plot_x_to_date(x), Some(date));
        assert_eq!(TimeUtils::plot_x_to_date(x + 0.4), Some(date));
        assert_eq!(
            TimeUtils::plot_x_to_date(x + 1.0),
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
        assert_eq!(TimeUtils::plot_x_to_date(f64::NAN), None);
    }

    #[test]
    fn test_consecutive_days_are_one_unit_apart() {
        let a = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        let b = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(TimeUtils::date_to_plot_x(b) - TimeUtils::date_to_plot_x(a), 1.0);
    }

    #[test]
    fn test_formats() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
        assert_eq!(TimeUtils::format_date(date, TimeUtils::SHORT_TICK_FORMAT), "06/05");
        assert_eq!(TimeUtils::format_date(date, TimeUtils::LONG_TICK_FORMAT), "24/06/05");
        assert_eq!(TimeUtils::format_date(date, TimeUtils::TOOLTIP_DATE_FORMAT), "2024/06/05");
    }
}
