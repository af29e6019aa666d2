//! Plot visualization configuration

use eframe::egui::Color32;

use crate::domain::UtilityMetric;

pub struct PlotConfig {
    pub water_bar_color: Color32,
    pub electricity_bar_color: Color32,
    pub gas_bar_color: Color32,
    /// Outline of the bar for the selected date
    pub reference_day_color: Color32,
    pub value_label_color: Color32,
    /// Bar width in days (1.0 = bars touch)
    pub bar_width: f64,
    /// Space left above the tallest bar, as a fraction of its height
    pub y_headroom_pct: f64,
    /// Zoomed-in spans up to this many days use "%m/%d" ticks; wider spans add the year
    pub short_date_max_span_days: f64,
    /// Plot height in points
    pub plot_height: f32,
    /// Value labels are hidden when more than this many bars are in view
    pub max_labelled_bars: usize,
    /// Zoomed out past yearly ticks, the step grows by 10x until at most this many remain
    pub max_grid_marks: f64,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    water_bar_color: Color32::from_rgb(26, 118, 255), // Blue
    electricity_bar_color: Color32::from_rgb(255, 190, 40), // Amber
    gas_bar_color: Color32::from_rgb(240, 100, 70), // Flame
    reference_day_color: Color32::WHITE,
    value_label_color: Color32::from_gray(220),
    bar_width: 0.9,
    y_headroom_pct: 0.15,
    short_date_max_span_days: 120.0,
    plot_height: 260.0,
    max_labelled_bars: 20,
    max_grid_marks: 20.0,
};

impl PlotConfig {
    pub fn bar_color(&self, metric: UtilityMetric) -> Color32 {
        match metric {
            UtilityMetric::Water => self.water_bar_color,
            UtilityMetric::Electricity => self.electricity_bar_color,
            UtilityMetric::Gas => self.gas_bar_color,
        }
    }
}
