use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use eframe::egui;
use egui_plot::{AxisHints, GridInput, GridMark, HPlacement, Plot};

use crate::config::plot::PLOT_CONFIG;
use crate::domain::UtilityMetric;
use crate::models::UtilityChart;
use crate::ui::chart_layers::{
    BarLayer, ChartLayer, LayerContext, ReferenceDayLayer, ValueLabelLayer, format_day_tick,
};
use crate::ui::ui_text::UI_TEXT;
use crate::ui::utils::format_quantity;
use crate::utils::{TimeUtils, maths_utils};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// A single day's bar, already in plot coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartBar {
    pub x: f64,
    pub value: f64,
    pub date_label: String,
}

/// Plot-ready form of a [`UtilityChart`], rebuilt only when the series changes.
#[derive(Clone, Debug)]
pub struct ChartCache {
    pub series_hash: u64,
    pub bars: Vec<ChartBar>,
    /// Full window, half a bar of padding on each side
    pub x_min: f64,
    pub x_max: f64,
    /// Default zoom (the initial view range), padded the same way
    pub view_x_min: f64,
    pub view_x_max: f64,
    pub y_max: f64,
}

impl ChartCache {
    pub fn from_chart(chart: &UtilityChart) -> Self {
        let half_bar = 0.5;
        let bars: Vec<ChartBar> = chart
            .series
            .points()
            .map(|(date, value)| ChartBar {
                x: TimeUtils::date_to_plot_x(date),
                value,
                date_label: TimeUtils::format_date(date, TimeUtils::TOOLTIP_DATE_FORMAT),
            })
            .collect();

        let (x_min, x_max) = match (bars.first(), bars.last()) {
            (Some(first), Some(last)) => (first.x - half_bar, last.x + half_bar),
            _ => (0.0, 1.0),
        };

        Self {
            series_hash: series_hash(chart),
            bars,
            x_min,
            x_max,
            view_x_min: TimeUtils::date_to_plot_x(chart.initial_view.start) - half_bar,
            view_x_max: TimeUtils::date_to_plot_x(chart.initial_view.end) + half_bar,
            y_max: maths_utils::padded_upper_bound(&chart.series.values, PLOT_CONFIG.y_headroom_pct),
        }
    }
}

fn series_hash(chart: &UtilityChart) -> u64 {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    chart.metric.hash(&mut hasher);
    chart.initial_view.hash(&mut hasher);
    chart.series.dates.hash(&mut hasher);
    for value in &chart.series.values {
        value.to_bits().hash(&mut hasher);
    }
    hasher.finish()
}

#[derive(Default)]
pub struct ChartView {
    cache: HashMap<UtilityMetric, ChartCache>,
    #[cfg(debug_assertions)]
    cache_misses: usize,
}

impl ChartView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bar chart of the whole window, opening zoomed on the initial view range.
    pub fn show_chart(&mut self, ui: &mut egui::Ui, chart: &UtilityChart, show_value_labels: bool) {
        let cache = self.cached(chart).clone();
        let metric = chart.metric;

        if cache.bars.is_empty() {
            ui.label(UI_TEXT.no_data);
            return;
        }

        // Salting the id with the view makes a new date or window open at its default zoom
        let plot_id = (
            "utility_chart",
            metric,
            chart.initial_view.start,
            chart.initial_view.end,
        );

        Plot::new(plot_id)
            .height(PLOT_CONFIG.plot_height)
            .custom_x_axes(vec![create_x_axis()])
            .custom_y_axes(vec![create_y_axis(metric)])
            .label_formatter(|_, _| String::new())
            .x_grid_spacer(day_grid_spacer)
            .default_x_bounds(cache.view_x_min, cache.view_x_max)
            .default_y_bounds(0.0, cache.y_max)
            .allow_zoom([true, false])
            .allow_drag([true, false])
            .allow_scroll([true, false])
            .allow_boxed_zoom(false)
            .show(ui, |plot_ui| {
                let bounds = plot_ui.plot_bounds();

                let ctx = LayerContext {
                    metric,
                    cache: &cache,
                    show_value_labels,
                    x_min: bounds.min()[0],
                    x_max: bounds.max()[0],
                };

                // Back to front
                let layers: Vec<Box<dyn ChartLayer>> = vec![
                    Box::new(BarLayer),
                    Box::new(ReferenceDayLayer),
                    Box::new(ValueLabelLayer),
                ];

                for layer in layers {
                    layer.render(plot_ui, &ctx);
                }
            });
    }

    fn cached(&mut self, chart: &UtilityChart) -> &ChartCache {
        let current_hash = series_hash(chart);
        let stale = self
            .cache
            .get(&chart.metric)
            .map(|cache| cache.series_hash != current_hash)
            .unwrap_or(true);

        if stale {
            #[cfg(debug_assertions)]
            {
                self.cache_misses += 1;
                if DEBUG_FLAGS.print_rebuilds {
                    log::info!(
                        "[chart] rebuilding {} bars for {} (miss #{})",
                        chart.series.len(),
                        chart.metric,
                        self.cache_misses
                    );
                }
            }
            self.cache.insert(chart.metric, ChartCache::from_chart(chart));
        }

        &self.cache[&chart.metric]
    }
}

/// Tick step in days for a visible span.
fn day_step(span: f64) -> f64 {
    if span <= 16.0 {
        1.0
    } else if span <= 70.0 {
        7.0
    } else if span <= 400.0 {
        30.0
    } else {
        let mut step = 365.0;
        while span / step > PLOT_CONFIG.max_grid_marks {
            step *= 10.0;
        }
        step
    }
}

/// One tick per day when zoomed in, weekly, monthly or (multi-)yearly further out.
fn day_grid_spacer(input: GridInput) -> Vec<GridMark> {
    let (min, max) = input.bounds;
    let span = max - min;
    if !span.is_finite() || span <= 0.0 {
        return Vec::new();
    }
    let step_size = day_step(span);

    let start = (min / step_size).ceil() as i64;
    let end = (max / step_size).floor() as i64;
    (start..=end)
        .map(|i| GridMark {
            value: i as f64 * step_size,
            step_size,
        })
        .collect()
}

fn create_x_axis() -> AxisHints<'static> {
    AxisHints::new_x()
        .label(UI_TEXT.plot_x_axis)
        .formatter(|grid_mark, range| {
            let span = range.end() - range.start();
            format_day_tick(grid_mark.value, span)
        })
}

fn create_y_axis(metric: UtilityMetric) -> AxisHints<'static> {
    let label = format!("{} ({})", metric.label(), metric.unit());
    AxisHints::new_y()
        .label(label)
        .formatter(|grid_mark, _range| format_quantity(grid_mark.value, ""))
        .placement(HPlacement::Left)
}
