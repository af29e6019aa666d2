use chrono::NaiveDate;
use eframe::egui::{Color32, RichText, Slider, Ui};
use egui_extras::DatePickerButton;

use crate::config::DASHBOARD;
use crate::ui::config::UI_TEXT;
use crate::ui::utils::{colored_subsection_heading, section_heading, spaced_separator};
use crate::utils::TimeUtils;
use crate::utils::time_utils::local_today;

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum SettingsEvent {
    ReferenceDate(NaiveDate),
    LookbackDays(u32),
    VisibleDays(u32),
    ValueLabels(bool),
    Regenerate,
}

/// Date picker shown above the dashboard
pub struct DatePanel {
    reference_date: NaiveDate,
}

impl DatePanel {
    pub fn new(reference_date: NaiveDate) -> Self {
        Self { reference_date }
    }
}

impl Panel for DatePanel {
    type Event = SettingsEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let previous = self.reference_date;

        ui.horizontal(|ui| {
            ui.label(colored_subsection_heading(UI_TEXT.date_picker_label));
            ui.add(DatePickerButton::new(&mut self.reference_date).id_salt("reference_date"));
            if ui.button(UI_TEXT.today_button).clicked() {
                self.reference_date = local_today();
            }
        });
        ui.label(format!(
            "{}: {}",
            UI_TEXT.showing_date_prefix,
            TimeUtils::format_date(self.reference_date, TimeUtils::STANDARD_DATE_FORMAT)
        ));

        if self.reference_date != previous {
            vec![SettingsEvent::ReferenceDate(self.reference_date)]
        } else {
            Vec::new()
        }
    }
}

/// Panel for window and display options
pub struct SettingsPanel {
    lookback_days: u32,
    visible_days: u32,
    show_value_labels: bool,
}

impl SettingsPanel {
    pub fn new(lookback_days: u32, visible_days: u32, show_value_labels: bool) -> Self {
        Self {
            lookback_days,
            visible_days,
            show_value_labels,
        }
    }

    fn render_lookback_slider(&mut self, ui: &mut Ui) -> Option<u32> {
        ui.label(colored_subsection_heading(UI_TEXT.lookback_heading));

        let response = ui.add(
            Slider::new(
                &mut self.lookback_days,
                DASHBOARD.window.min_lookback_days..=DASHBOARD.window.max_lookback_days,
            )
            .suffix(" days"),
        );

        let helper_text = format!(
            "{}{}{}",
            UI_TEXT.lookback_helper_prefix, self.lookback_days, UI_TEXT.lookback_helper_suffix
        );
        ui.label(RichText::new(helper_text).small().color(Color32::GRAY));

        response.changed().then_some(self.lookback_days)
    }

    fn render_visible_days_slider(&mut self, ui: &mut Ui) -> Option<u32> {
        ui.label(colored_subsection_heading(UI_TEXT.visible_days_heading));

        let response = ui.add(
            Slider::new(
                &mut self.visible_days,
                DASHBOARD.view.min_visible_days..=DASHBOARD.view.max_visible_days,
            )
            .suffix(" days"),
        );
        ui.label(
            RichText::new(UI_TEXT.visible_days_helper)
                .small()
                .color(Color32::GRAY),
        );

        response.changed().then_some(self.visible_days)
    }
}

impl Panel for SettingsPanel {
    type Event = SettingsEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        section_heading(ui, UI_TEXT.settings_heading);

        if let Some(days) = self.render_lookback_slider(ui) {
            events.push(SettingsEvent::LookbackDays(days));
        }
        spaced_separator(ui);

        if let Some(days) = self.render_visible_days_slider(ui) {
            events.push(SettingsEvent::VisibleDays(days));
        }
        spaced_separator(ui);

        if ui
            .checkbox(&mut self.show_value_labels, UI_TEXT.value_labels_toggle)
            .changed()
        {
            events.push(SettingsEvent::ValueLabels(self.show_value_labels));
        }
        ui.add_space(10.0);

        if ui.button(UI_TEXT.regenerate_button).clicked() {
            events.push(SettingsEvent::Regenerate);
        }
        ui.add_space(20.0);
        events
    }
}
