//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet. All of them are further gated by `cfg(debug_assertions)`.

pub struct DebugFlags {
    /// Emit UI interaction logs (date changes, settings changes, regenerate).
    pub print_ui_interactions: bool,
    /// Emit a line each time the dashboard snapshot is rebuilt, with timing.
    pub print_rebuilds: bool,
    /// Emit details of UI state serialization/deserialization.
    pub print_state_serde: bool,
    /// Emit shutdown app messages.
    pub print_shutdown: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_ui_interactions: true,
    print_rebuilds: false,
    print_state_serde: false,
    print_shutdown: false,
};
