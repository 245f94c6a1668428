//! Theme: palette constants and global styles.

mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;

/// `:root` custom properties built from the palette.
///
/// Light values by default, dark values under `prefers-color-scheme: dark`.
pub fn palette_css() -> String {
    use colors::*;

    format!(
        ":root {{\n  --surface-top: {};\n  --surface-bottom: {};\n  --panel: {};\n  \
         --text-primary: {};\n  --text-muted: {};\n  --scrim: {};\n}}\n\
         @media (prefers-color-scheme: dark) {{\n  :root {{\n    --surface-top: {};\n    \
         --surface-bottom: {};\n    --panel: {};\n    --text-primary: {};\n    \
         --text-muted: {};\n  }}\n}}\n",
        SURFACE_TOP,
        SURFACE_BOTTOM,
        PANEL,
        TEXT_PRIMARY,
        TEXT_MUTED,
        SCRIM,
        SURFACE_TOP_DARK,
        SURFACE_BOTTOM_DARK,
        PANEL_DARK,
        TEXT_PRIMARY_DARK,
        TEXT_MUTED_DARK,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_defines_light_and_dark_values() {
        let css = palette_css();
        assert!(css.contains("--surface-top: #ffffff;"));
        assert!(css.contains("--scrim: rgba(0, 0, 0, 0.4);"));
        assert!(css.contains("prefers-color-scheme: dark"));
        assert!(css.contains("--panel: #18181b;"));
    }
}
