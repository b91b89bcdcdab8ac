//! Theme configuration for the desktop app

/// Color palette consumed by components
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg_primary: &'static str,
    pub bg_secondary: &'static str,
    pub bg_tertiary: &'static str,
    pub border: &'static str,
    pub border_light: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub text_muted: &'static str,
    pub accent: &'static str,
    pub accent_text: &'static str,
    pub warning: &'static str,
    pub danger: &'static str,
}

const LIGHT: Palette = Palette {
    bg_primary: "#ffffff",
    bg_secondary: "#f6f7f9",
    bg_tertiary: "#eceef1",
    border: "#d7dbe0",
    border_light: "#e8eaed",
    text_primary: "#1d2129",
    text_secondary: "#555b66",
    text_muted: "#8a909a",
    accent: "#2563eb",
    accent_text: "#ffffff",
    warning: "#b45309",
    danger: "#dc2626",
};

const DARK: Palette = Palette {
    bg_primary: "#15171b",
    bg_secondary: "#1d2026",
    bg_tertiary: "#262a31",
    border: "#343943",
    border_light: "#2b2f37",
    text_primary: "#e8eaee",
    text_secondary: "#aab0ba",
    text_muted: "#6f7682",
    accent: "#3b82f6",
    accent_text: "#ffffff",
    warning: "#d97706",
    danger: "#ef4444",
};

/// Resolved theme (light or dark)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolvedTheme {
    #[default]
    Light,
    Dark,
}

impl ResolvedTheme {
    /// The palette for this theme
    #[must_use]
    pub const fn palette(self) -> &'static Palette {
        match self {
            Self::Light => &LIGHT,
            Self::Dark => &DARK,
        }
    }
}

/// Resolve the theme from `ENVHUB_THEME` (`light`/`dark`), defaulting to light
#[must_use]
pub fn resolve_theme() -> ResolvedTheme {
    match std::env::var("ENVHUB_THEME").as_deref() {
        Ok("dark") => ResolvedTheme::Dark,
        _ => ResolvedTheme::Light,
    }
}
