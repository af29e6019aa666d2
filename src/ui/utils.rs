use eframe::egui::{Context, RichText, Ui, Visuals};

use crate::ui::config::UI_CONFIG;

/// Creates a colored heading with uppercase text and monospace font
pub fn colored_heading(text: impl Into<String>) -> RichText {
    let uppercase_text = text.into().to_uppercase();
    RichText::new(uppercase_text)
        .color(UI_CONFIG.colors.heading)
        .monospace()
}

/// Creates a colored sub-section heading using the configured color
pub fn colored_subsection_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).color(UI_CONFIG.colors.subsection_heading)
}

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;

    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;

    ctx.set_visuals(visuals);
}

/// Section heading followed by a full-width divider
pub fn section_heading(ui: &mut Ui, text: impl Into<String>) {
    ui.add_space(10.0);
    ui.heading(colored_heading(text));
    ui.separator();
    ui.add_space(5.0);
}

/// Creates a separator with standard spacing
pub fn spaced_separator(ui: &mut Ui) {
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(10.0);
}

/// Whole-number quantity with thousands separators and a unit: "8,500 kWh".
/// Non-integral values keep one decimal.
pub fn format_quantity(value: f64, unit: &str) -> String {
    let number = format_number(value);
    if unit.is_empty() {
        number
    } else {
        format!("{} {}", number, unit)
    }
}

/// Signed change with unit: "+15 m³", "-200 kWh", "0 KG".
pub fn format_delta(delta: f64, unit: &str) -> String {
    let sign = if delta > 0.0 { "+" } else { "" };
    format!("{}{}", sign, format_quantity(delta, unit))
}

fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rounded = (value * 10.0).round() / 10.0;
    let negative = rounded < 0.0;
    let abs = rounded.abs();
    let whole = abs.trunc() as u64;
    let tenths = ((abs - abs.trunc()) * 10.0).round() as u64;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    if tenths == 0 {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, tenths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_quantity_groups_thousands() {
        assert_eq!(format_quantity(8500.0, "kWh"), "8,500 kWh");
        assert_eq!(format_quantity(350.0, "m³"), "350 m³");
        assert_eq!(format_quantity(1234567.0, ""), "1,234,567");
        assert_eq!(format_quantity(1000.25, "KG"), "1,000.3 KG");
        assert_eq!(format_quantity(0.0, "pcs"), "0 pcs");
    }

    #[test]
    fn test_format_delta_is_signed() {
        assert_eq!(format_delta(15.0, "m³"), "+15 m³");
        assert_eq!(format_delta(-200.0, "kWh"), "-200 kWh");
        assert_eq!(format_delta(-1500.0, "kWh"), "-1,500 kWh");
        assert_eq!(format_delta(0.0, "KG"), "0 KG");
    }
}
