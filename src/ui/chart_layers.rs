use eframe::egui::{Align2, Color32, RichText, Stroke};
use egui_plot::{Bar, BarChart, PlotPoint, PlotPoints, PlotUi, Polygon, Text};

use crate::config::plot::PLOT_CONFIG;
use crate::domain::UtilityMetric;
use crate::ui::ui_chart_view::{ChartBar, ChartCache};
use crate::ui::ui_text::UI_TEXT;
use crate::ui::utils::format_quantity;
use crate::utils::TimeUtils;

/// Context passed to every layer during rendering.
/// This prevents argument explosion.
pub struct LayerContext<'a> {
    pub metric: UtilityMetric,
    pub cache: &'a ChartCache,
    pub show_value_labels: bool,
    /// Visible x range at the time of drawing
    pub x_min: f64,
    pub x_max: f64,
}

/// A standardized layer in the chart stack.
pub trait ChartLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext);
}

// ============================================================================
// 1. BAR LAYER (one bar per day over the whole window)
// ============================================================================
pub struct BarLayer;

impl ChartLayer for BarLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let color = PLOT_CONFIG.bar_color(ctx.metric);
        let unit = ctx.metric.unit();

        let bars: Vec<Bar> = ctx
            .cache
            .bars
            .iter()
            .map(|bar| {
                Bar::new(bar.x, bar.value)
                    .width(PLOT_CONFIG.bar_width)
                    .fill(color)
                    .name(&bar.date_label)
            })
            .collect();

        let chart = BarChart::new(ctx.metric.label(), bars)
            .color(color)
            .element_formatter(Box::new(move |bar, _chart| {
                format!(
                    "{}: {}\n{}: {}",
                    UI_TEXT.plot_hover_date,
                    bar.name,
                    UI_TEXT.plot_hover_usage,
                    format_quantity(bar.value, unit)
                )
            }));

        plot_ui.bar_chart(chart);
    }
}

// ============================================================================
// 2. VALUE LABEL LAYER (reading printed above each visible bar)
// ============================================================================
pub struct ValueLabelLayer;

impl ChartLayer for ValueLabelLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        if !ctx.show_value_labels {
            return;
        }

        let Some(visible) = labelled_bars(&ctx.cache.bars, ctx.x_min, ctx.x_max) else {
            return;
        };

        for bar in visible {
            let text = RichText::new(format_quantity(bar.value, ""))
                .small()
                .color(PLOT_CONFIG.value_label_color);
            plot_ui.text(
                Text::new("values", PlotPoint::new(bar.x, bar.value), text)
                    .anchor(Align2::CENTER_BOTTOM),
            );
        }
    }
}

/// Bars inside `x_min..=x_max`, or `None` once there are too many to label legibly.
pub fn labelled_bars(bars: &[ChartBar], x_min: f64, x_max: f64) -> Option<Vec<&ChartBar>> {
    let visible: Vec<&ChartBar> = bars
        .iter()
        .filter(|bar| bar.x >= x_min && bar.x <= x_max)
        .collect();

    (visible.len() <= PLOT_CONFIG.max_labelled_bars).then_some(visible)
}

// ============================================================================
// 3. REFERENCE DAY LAYER (outline around the selected date's bar)
// ============================================================================
pub struct ReferenceDayLayer;

impl ChartLayer for ReferenceDayLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let Some(bar) = ctx.cache.bars.last() else {
            return;
        };

        let half_w = PLOT_CONFIG.bar_width / 2.0;
        let points = PlotPoints::new(vec![
            [bar.x - half_w, 0.0],
            [bar.x + half_w, 0.0],
            [bar.x + half_w, bar.value],
            [bar.x - half_w, bar.value],
        ]);

        let polygon = Polygon::new(UI_TEXT.plot_selected_day, points)
            .fill_color(Color32::TRANSPARENT)
            .stroke(Stroke::new(2.0, PLOT_CONFIG.reference_day_color));

        plot_ui.polygon(polygon);
    }
}

/// Axis tick text for a day coordinate; wide spans include the year.
pub fn format_day_tick(x: f64, span_days: f64) -> String {
    let format = if span_days > PLOT_CONFIG.short_date_max_span_days {
        TimeUtils::LONG_TICK_FORMAT
    } else {
        TimeUtils::SHORT_TICK_FORMAT
    };
    TimeUtils::plot_x_to_date(x)
        .map(|date| TimeUtils::format_date(date, format))
        .unwrap_or_default()
}
