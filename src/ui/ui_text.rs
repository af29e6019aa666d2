/// Every user-facing string, kept in one place.
pub struct UiText {
    pub window_title: &'static str,
    pub page_title: &'static str,
    pub page_caption: &'static str,
    pub date_picker_label: &'static str,
    pub showing_date_prefix: &'static str,
    pub today_button: &'static str,
    pub usage_heading: &'static str,
    pub workload_heading: &'static str,
    pub settings_heading: &'static str,
    pub lookback_heading: &'static str,
    pub lookback_helper_prefix: &'static str,
    pub lookback_helper_suffix: &'static str,
    pub visible_days_heading: &'static str,
    pub visible_days_helper: &'static str,
    pub value_labels_toggle: &'static str,
    pub regenerate_button: &'static str,
    pub plot_x_axis: &'static str,
    pub plot_hover_date: &'static str,
    pub plot_hover_usage: &'static str,
    pub plot_selected_day: &'static str,
    pub no_data: &'static str,
    pub error_heading: &'static str,
    pub status_window: &'static str,
    pub status_view: &'static str,
    pub status_seed: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    window_title: "Plant Dashboard",
    page_title: "Plant Efficiency Analysis",
    page_caption: "Daily utility consumption and laundry workload for the plant.",
    date_picker_label: "Date to inspect",
    showing_date_prefix: "Showing data for",
    today_button: "Today",
    usage_heading: "Usage",
    workload_heading: "Workload",
    settings_heading: "Settings",
    lookback_heading: "Data window",
    lookback_helper_prefix: "Charts cover the ",
    lookback_helper_suffix: " days before the selected date.",
    visible_days_heading: "Initial zoom",
    visible_days_helper: "Most recent days shown when a chart opens. Scroll or drag to see the rest; double-click to reset.",
    value_labels_toggle: "Show values on bars",
    regenerate_button: "🎲 Regenerate data",
    plot_x_axis: "Date",
    plot_hover_date: "Date",
    plot_hover_usage: "Usage",
    plot_selected_day: "Selected day",
    no_data: "No data for this window",
    error_heading: "⚠ Unable to build the dashboard",
    status_window: "Window",
    status_view: "Zoom",
    status_seed: "Seed",
};
