//! Dashboard window configuration

/// Configuration for the data window slider
pub struct WindowConfig {
    // Days reaching back from the selected date (window holds one more day than this)
    pub min_lookback_days: u32,
    pub max_lookback_days: u32,
    pub default_lookback_days: u32,
}

/// Configuration for the default chart zoom
pub struct ViewConfig {
    pub min_visible_days: u32,
    pub max_visible_days: u32,
    pub default_visible_days: u32,
}

/// The Master Dashboard Configuration
pub struct DashboardConfig {
    pub window: WindowConfig,
    pub view: ViewConfig,
    pub show_value_labels: bool,
}

pub const DASHBOARD: DashboardConfig = DashboardConfig {
    window: WindowConfig {
        min_lookback_days: 1,
        max_lookback_days: 365,
        default_lookback_days: 30,
    },

    view: ViewConfig {
        min_visible_days: 1,
        max_visible_days: 90,
        default_visible_days: 10,
    },

    show_value_labels: true,
};
