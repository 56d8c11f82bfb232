// SPDX-License-Identifier: MPL-2.0
//! Light/dark color schemes for the site pages.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use serde::Deserialize;

/// Color palette for a theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    // Surface colors
    pub surface_primary: Color,
    pub surface_secondary: Color,
    pub card_background: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,

    // Brand colors
    pub brand_primary: Color,
    pub brand_secondary: Color,
    pub brand_hover: Color,

    // Hero banner
    pub hero_background: Color,
    pub hero_text: Color,
}

impl ColorScheme {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_100,
            card_background: palette::WHITE,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,

            brand_primary: palette::BRAND_500,
            brand_secondary: palette::BRAND_600,
            brand_hover: palette::BRAND_400,

            hero_background: palette::GRAY_900,
            hero_text: palette::WHITE,
        }
    }

    /// Dark theme (Dark mode).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,
            surface_secondary: Color::from_rgb(0.15, 0.15, 0.15),
            card_background: Color::from_rgb(0.18, 0.18, 0.18),

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,

            brand_primary: palette::BRAND_400,
            brand_secondary: palette::BRAND_500,
            brand_hover: Color::from_rgb(0.85, 0.25, 0.25),

            hero_background: palette::BLACK,
            hero_text: palette::WHITE,
        }
    }

    /// Picks the scheme matching the active iced theme.
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        if theme.extended_palette().is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// The iced theme for this mode.
    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.surface_primary.r > 0.9); // Close to white
    }

    #[test]
    fn dark_theme_has_dark_surface() {
        let scheme = ColorScheme::dark();
        assert!(scheme.surface_primary.r < 0.2); // Close to black
    }

    #[test]
    fn both_themes_use_the_red_brand() {
        for scheme in [ColorScheme::light(), ColorScheme::dark()] {
            assert!(scheme.brand_primary.r > scheme.brand_primary.b);
            assert!(scheme.brand_primary.r > scheme.brand_primary.g);
        }
    }

    #[test]
    fn scheme_follows_iced_theme() {
        assert_eq!(ColorScheme::from_theme(&Theme::Dark), ColorScheme::dark());
        assert_eq!(ColorScheme::from_theme(&Theme::Light), ColorScheme::light());
    }

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        assert!(matches!(ThemeMode::Light.iced_theme(), Theme::Light));
        // System mode depends on actual system theme, so we just verify it doesn't panic
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn theme_mode_reads_lowercase_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            mode: ThemeMode,
        }
        let dark: Wrapper = toml::from_str("mode = \"dark\"").expect("deserialize");
        assert_eq!(dark.mode, ThemeMode::Dark);
        let light: Wrapper = toml::from_str("mode = \"light\"").expect("deserialize");
        assert_eq!(light.mode, ThemeMode::Light);
        assert!(toml::from_str::<Wrapper>("mode = \"Dark\"").is_err());
    }
}
