use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub card_fill: Color32,
    pub card_border: Color32,
    pub delta_good: Color32,
    pub delta_bad: Color32,
    pub delta_neutral: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub side_panel_min_width: f32,
    pub card_min_height: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,     // This sets every label globally to this color
        heading: Color32::from_rgb(240, 240, 240),
        subsection_heading: Color32::from_rgb(120, 170, 255),
        central_panel: Color32::from_rgb(18, 20, 26),
        side_panel: Color32::from_rgb(28, 30, 36),
        card_fill: Color32::from_rgb(30, 33, 41),
        card_border: Color32::from_rgb(70, 74, 86),
        delta_good: Color32::from_rgb(60, 200, 110),
        delta_bad: Color32::from_rgb(255, 90, 90),
        delta_neutral: Color32::from_gray(150),
    },
    side_panel_min_width: 180.0,
    card_min_height: 84.0,
};
