use eframe::egui::{
    CentralPanel, Color32, Context, Frame, Margin, RichText, ScrollArea, SidePanel, TopBottomPanel,
};

use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_panels::{DatePanel, Panel, SettingsPanel};
use crate::ui::utils::section_heading;

use super::app::DashboardApp;

impl DashboardApp {
    pub(super) fn render_top_panel(&mut self, ctx: &Context) {
        let top_frame = Frame::new()
            .fill(UI_CONFIG.colors.central_panel)
            .inner_margin(Margin::symmetric(16, 10));
        TopBottomPanel::top("title_panel")
            .frame(top_frame)
            .show(ctx, |ui| {
                ui.heading(
                    RichText::new(UI_TEXT.page_title)
                        .size(28.0)
                        .strong()
                        .color(UI_CONFIG.colors.heading),
                );
                ui.label(RichText::new(UI_TEXT.page_caption).color(UI_CONFIG.colors.label));
                ui.add_space(6.0);

                let events = DatePanel::new(self.reference_date).render(ui);
                for event in events {
                    self.handle_settings_event(event);
                }
            });
    }

    pub(super) fn render_side_panel(&mut self, ctx: &Context) {
        let side_panel_frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(Margin::symmetric(8, 4));
        SidePanel::left("settings_panel")
            .min_width(UI_CONFIG.side_panel_min_width)
            .frame(side_panel_frame)
            .show(ctx, |ui| {
                let events = SettingsPanel::new(
                    self.lookback_days,
                    self.visible_days,
                    self.show_value_labels,
                )
                .render(ui);

                for event in events {
                    self.handle_settings_event(event);
                }
            });
    }

    pub(super) fn render_status_panel(&mut self, ctx: &Context) {
        let status_frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(Margin::symmetric(8, 4));
        TopBottomPanel::bottom("status_panel")
            .frame(status_frame)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if let Some(snapshot) = &self.snapshot {
                        ui.metric(
                            UI_TEXT.status_window,
                            &format!(
                                "{} .. {} ({} days)",
                                snapshot.window.start,
                                snapshot.window.end,
                                snapshot.window.day_count()
                            ),
                            Color32::from_rgb(150, 200, 255),
                        );
                        ui.separator();
                        ui.metric(
                            UI_TEXT.status_view,
                            &format!(
                                "{} .. {} ({} days)",
                                snapshot.initial_view.start,
                                snapshot.initial_view.end,
                                snapshot.initial_view.day_count()
                            ),
                            Color32::from_rgb(180, 200, 255),
                        );
                        ui.separator();
                    }
                    match self.seed {
                        Some(seed) => ui.metric(
                            UI_TEXT.status_seed,
                            &seed.to_string(),
                            Color32::from_rgb(255, 215, 0),
                        ),
                        None => ui.label_subdued(format!("{}: random", UI_TEXT.status_seed)),
                    }
                });
            });
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let central_panel_frame = Frame::new()
            .fill(UI_CONFIG.colors.central_panel)
            .inner_margin(Margin::symmetric(16, 8));
        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| {
                let Some(snapshot) = self.snapshot.as_ref() else {
                    ui.vertical_centered(|ui| {
                        ui.add_space(40.0);
                        ui.heading(UI_TEXT.error_heading);
                        ui.add_space(10.0);
                        if let Some(error) = &self.last_error {
                            ui.label_error(format!("Error: {}", error));
                        }
                    });
                    return;
                };

                ScrollArea::vertical().id_salt("dashboard").show(ui, |ui| {
                    section_heading(ui, UI_TEXT.usage_heading);

                    let charts = &snapshot.charts;
                    ui.columns(charts.len(), |columns| {
                        for (column, chart) in columns.iter_mut().zip(charts) {
                            if let Some(card) = &chart.card {
                                column.metric_card(card);
                            }
                        }
                    });
                    ui.add_space(10.0);

                    let chart_view = &mut self.chart_view;
                    let show_value_labels = self.show_value_labels;
                    ui.columns(charts.len(), |columns| {
                        for (column, chart) in columns.iter_mut().zip(charts) {
                            column.label_subheader(chart.metric.label());
                            chart_view.show_chart(column, chart, show_value_labels);
                        }
                    });

                    ui.add_space(30.0);
                    section_heading(ui, UI_TEXT.workload_heading);

                    for row in snapshot.workload.chunks(2) {
                        ui.columns(2, |columns| {
                            for (column, card) in columns.iter_mut().zip(row) {
                                column.metric_card(card);
                            }
                        });
                        ui.add_space(8.0);
                    }
                });
            });
    }
}
