use eframe::egui::{Color32, Frame, Margin, RichText, Stroke, Ui};

use crate::models::{DeltaTone, MetricCard};
use crate::ui::config::UI_CONFIG;
use crate::ui::utils::{format_delta, format_quantity};

/// Extension trait to add semantic styling methods directly to `egui::Ui`.
pub trait UiStyleExt {
    /// Renders small, gray text (good for labels like "Window:").
    fn label_subdued(&mut self, text: impl Into<String>);

    /// Renders a "Label: Value" pair with consistent spacing and styling.
    /// The label is subdued, the value is colored.
    fn metric(&mut self, label: &str, value: &str, color: Color32);

    /// Renders a sub-section header using the configured global color.
    fn label_subheader(&mut self, text: impl Into<String>);

    /// Renders an error message (Red).
    fn label_error(&mut self, text: impl Into<String>);

    /// Renders a card: label, big value, coloured delta, border when `card.border`. Hover shows the help text.
    fn metric_card(&mut self, card: &MetricCard);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(Color32::GRAY));
    }

    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        self.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0; // Tight spacing
            ui.label_subdued(format!("{}:", label));
            ui.label(RichText::new(value).small().color(color));
        });
    }

    fn label_subheader(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).color(UI_CONFIG.colors.subsection_heading));
    }

    fn label_error(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).color(Color32::from_rgb(255, 100, 100)));
    }

    fn metric_card(&mut self, card: &MetricCard) {
        let stroke = if card.border {
            Stroke::new(1.0, UI_CONFIG.colors.card_border)
        } else {
            Stroke::NONE
        };

        let response = Frame::new()
            .fill(UI_CONFIG.colors.card_fill)
            .stroke(stroke)
            .corner_radius(6.0)
            .inner_margin(Margin::same(10))
            .show(self, |ui| {
                ui.set_min_height(UI_CONFIG.card_min_height);
                ui.set_width(ui.available_width());
                ui.vertical(|ui| {
                    ui.label(RichText::new(&card.label).color(UI_CONFIG.colors.label));
                    ui.label(
                        RichText::new(format_quantity(card.value, &card.unit))
                            .size(26.0)
                            .strong()
                            .color(UI_CONFIG.colors.heading),
                    );
                    if let Some(delta) = card.delta {
                        ui.label(
                            RichText::new(format_delta(delta, &card.unit))
                                .color(tone_color(card.delta_tone())),
                        );
                    }
                });
            })
            .response;

        if let Some(help) = &card.help {
            response.on_hover_text(help);
        }
    }
}

pub fn tone_color(tone: DeltaTone) -> Color32 {
    match tone {
        DeltaTone::Good => UI_CONFIG.colors.delta_good,
        DeltaTone::Bad => UI_CONFIG.colors.delta_bad,
        DeltaTone::Neutral => UI_CONFIG.colors.delta_neutral,
    }
}
