//! # Theme System
//!
//! Provides the two color themes of the explorer, dark and light.
//!
//! ## Overview
//!
//! The [`Theme`] struct defines all colors used throughout the UI. Rendering
//! code references theme fields instead of hardcoding
//! `ratatui::style::Color` values. [`ThemeMode`] is the persisted choice and
//! maps to one of the built-in themes:
//!
//! - **Dark** (default) - Catppuccin Mocha palette
//! - **Light** - Catppuccin Latte palette

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which built-in theme is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn theme(self) -> &'static Theme {
        match self {
            ThemeMode::Dark => &DARK,
            ThemeMode::Light => &LIGHT,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(ThemeMode::Dark),
            "light" => Ok(ThemeMode::Light),
            other => Err(format!("unknown theme '{other}', expected 'dark' or 'light'")),
        }
    }
}

/// All colors used by the explorer, grouped by semantic role.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Human-readable name shown in the header.
    pub name: &'static str,

    // -- Background colors --
    /// Main content background.
    pub bg: Color,
    /// Sidebar background.
    pub sidebar_bg: Color,

    // -- Foreground / text colors --
    /// Primary text color.
    pub fg: Color,
    /// Muted/secondary text (hints, footer, unfocused borders).
    pub fg_dim: Color,

    // -- Accent / brand colors --
    /// Focused borders, active route, selected menu entries.
    pub accent: Color,
    /// Highlighted array cell.
    pub highlight: Color,

    // -- Semantic status colors --
    /// Freshly added array cell.
    pub success: Color,
    /// Removal cue and errors in the status line.
    pub error: Color,

    // -- Selection --
    /// Background of the selected row in lists.
    pub selection_bg: Color,
}

impl Theme {
    pub fn all() -> [&'static Theme; 2] {
        [&DARK, &LIGHT]
    }
}

static DARK: Theme = Theme {
    name: "Dark",
    bg: Color::Rgb(30, 30, 46),            // base
    sidebar_bg: Color::Rgb(24, 24, 37),    // mantle
    fg: Color::Rgb(205, 214, 244),         // text
    fg_dim: Color::Rgb(108, 112, 134),     // overlay0
    accent: Color::Rgb(137, 180, 250),     // blue
    highlight: Color::Rgb(249, 226, 175),  // yellow
    success: Color::Rgb(166, 227, 161),    // green
    error: Color::Rgb(243, 139, 168),      // red
    selection_bg: Color::Rgb(69, 71, 90),  // surface1
};

static LIGHT: Theme = Theme {
    name: "Light",
    bg: Color::Rgb(239, 241, 245),           // base
    sidebar_bg: Color::Rgb(230, 233, 239),   // mantle
    fg: Color::Rgb(76, 79, 105),             // text
    fg_dim: Color::Rgb(156, 160, 176),       // overlay0
    accent: Color::Rgb(30, 102, 245),        // blue
    highlight: Color::Rgb(223, 142, 29),     // yellow
    success: Color::Rgb(64, 160, 43),        // green
    error: Color::Rgb(210, 15, 57),          // red
    selection_bg: Color::Rgb(188, 192, 204), // surface1
};

#[cfg(test)]
mod tests {
    use super::*;

    /// Convert a catppuccin color to a ratatui Color via its RGB values.
    fn ctp(color: catppuccin::Color) -> Color {
        Color::Rgb(color.rgb.r, color.rgb.g, color.rgb.b)
    }

    #[test]
    fn test_default_mode_is_dark() {
        assert_eq!(ThemeMode::default(), ThemeMode::Dark);
        assert_eq!(ThemeMode::default().theme().name, "Dark");
    }

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!(" LIGHT ".parse::<ThemeMode>(), Ok(ThemeMode::Light));
        assert!("solarized".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn test_dark_matches_mocha_palette() {
        let mocha = catppuccin::PALETTE.mocha.colors;
        let theme = ThemeMode::Dark.theme();
        assert_eq!(theme.bg, ctp(mocha.base));
        assert_eq!(theme.sidebar_bg, ctp(mocha.mantle));
        assert_eq!(theme.fg, ctp(mocha.text));
        assert_eq!(theme.accent, ctp(mocha.blue));
        assert_eq!(theme.highlight, ctp(mocha.yellow));
        assert_eq!(theme.success, ctp(mocha.green));
        assert_eq!(theme.error, ctp(mocha.red));
    }

    #[test]
    fn test_light_matches_latte_palette() {
        let latte = catppuccin::PALETTE.latte.colors;
        let theme = ThemeMode::Light.theme();
        assert_eq!(theme.bg, ctp(latte.base));
        assert_eq!(theme.sidebar_bg, ctp(latte.mantle));
        assert_eq!(theme.fg, ctp(latte.text));
        assert_eq!(theme.accent, ctp(latte.blue));
        assert_eq!(theme.highlight, ctp(latte.yellow));
        assert_eq!(theme.success, ctp(latte.green));
        assert_eq!(theme.error, ctp(latte.red));
    }

    #[test]
    fn test_themes_have_distinct_names() {
        let [dark, light] = Theme::all();
        assert_ne!(dark.name, light.name);
    }
}
