// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::widget::button::Status;
    use iced::{Background, Theme};
    use iced_showcase::ui::design_tokens::{motion, palette, sizing, spacing};
    use iced_showcase::ui::notifications::{style_table, Kind};
    use iced_showcase::ui::styles::{button, container};
    use iced_showcase::ui::theming::{ColorScheme, ThemeMode};

    #[test]
    fn all_button_styles_are_callable() {
        let theme = Theme::Dark;

        let _ = button::primary(&theme, Status::Active);
        let _ = button::outline(&theme, Status::Hovered);
        let _ = button::link(&theme, Status::Pressed);
        let _ = button::nav_link(true)(&theme, Status::Active);
        let _ = button::card(&theme, Status::Active);
    }

    #[test]
    fn disabled_primary_is_dimmed() {
        let theme = Theme::Light;
        let active = button::primary(&theme, Status::Active);
        let disabled = button::primary(&theme, Status::Disabled);

        let alpha = |style: &iced::widget::button::Style| match style.background {
            Some(Background::Color(color)) => color.a,
            _ => 0.0,
        };
        assert!(alpha(&disabled) < alpha(&active));
    }

    #[test]
    fn faded_card_is_transparent() {
        let style = container::card(0.0)(&Theme::Light);
        match style.background {
            Some(Background::Color(color)) => assert_eq!(color.a, 0.0),
            other => panic!("unexpected background: {other:?}"),
        }
    }

    #[test]
    fn toast_kinds_have_distinct_backgrounds() {
        let table = style_table();
        let info = table.get(Kind::Info).background;
        let success = table.get(Kind::Success).background;
        let error = table.get(Kind::Error).background;

        assert_ne!(info, success);
        assert_ne!(success, error);
        assert_ne!(info, error);
        assert_eq!(error, palette::TOAST_ERROR_BG);
    }

    #[test]
    fn design_tokens_are_accessible() {
        let _ = palette::BRAND_500;
        let _ = spacing::MD;
        let _ = sizing::NAVBAR_HEIGHT;
        assert!(motion::GALLERY_HOVER_SCALE > 1.0);
        assert!(motion::GALLERY_PRESS_SCALE < 1.0);
    }

    #[test]
    fn theming_switches_correctly() {
        let light = ColorScheme::from_theme(&ThemeMode::Light.iced_theme());
        let dark = ColorScheme::from_theme(&ThemeMode::Dark.iced_theme());

        // Surface colors should be visually opposite between light and dark
        assert!(light.surface_primary.r > dark.surface_primary.r);

        // Text colors should also be opposite between light and dark
        assert!(light.text_primary.r < dark.text_primary.r);
    }
}
