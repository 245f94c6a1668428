//! Color constants for the portfolio theme.
//!
//! Mirrors the CSS custom properties in `styles.rs`.

// === SURFACE ===
pub const SURFACE_TOP: &str = "#ffffff";
pub const SURFACE_BOTTOM: &str = "#f8fafc";
pub const SURFACE_TOP_DARK: &str = "#000000";
pub const SURFACE_BOTTOM_DARK: &str = "#0f172a";

// === PANEL ===
pub const PANEL: &str = "#ffffff";
pub const PANEL_DARK: &str = "#18181b";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#0a0a0a";
pub const TEXT_MUTED: &str = "#52525b";
pub const TEXT_PRIMARY_DARK: &str = "#ededed";
pub const TEXT_MUTED_DARK: &str = "#a1a1aa";

// === OVERLAY ===
pub const SCRIM: &str = "rgba(0, 0, 0, 0.4)";
