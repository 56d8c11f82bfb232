// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Shadow, Theme};

/// Scales the alpha channel of `color`.
#[must_use]
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

/// Page background.
pub fn page(theme: &Theme) -> container::Style {
    let colors = ColorScheme::from_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_secondary)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Dark top bar holding the navigation links.
pub fn navbar(theme: &Theme) -> container::Style {
    let colors = ColorScheme::from_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.hero_background)),
        text_color: Some(colors.hero_text),
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Hero banner at the top of each page.
pub fn hero(theme: &Theme) -> container::Style {
    let colors = ColorScheme::from_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.hero_background)),
        text_color: Some(colors.hero_text),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Card surface faded to `alpha`, for revealable blocks.
pub fn card(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::from_theme(theme);
        container::Style {
            background: Some(Background::Color(with_alpha(colors.card_background, alpha))),
            text_color: Some(with_alpha(colors.text_primary, alpha)),
            border: Border {
                radius: radius::MD.into(),
                width: border::WIDTH_SM,
                color: with_alpha(colors.surface_secondary, alpha),
            },
            shadow: Shadow {
                color: with_alpha(shadow::MD.color, alpha),
                ..shadow::MD
            },
            ..Default::default()
        }
    }
}

/// Gallery thumbnail placeholder, tinted per item.
pub fn thumbnail(tint: Color, alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(with_alpha(tint, alpha))),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Static surface for the forms.
pub fn form(theme: &Theme) -> container::Style {
    card(opacity::OPAQUE)(theme)
}

/// Dimmed backdrop behind modal dialogs.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..Color::BLACK
        })),
        ..Default::default()
    }
}

/// Modal dialog surface.
pub fn dialog(theme: &Theme) -> container::Style {
    let colors = ColorScheme::from_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        border: Border {
            radius: radius::LG.into(),
            width: border::WIDTH_SM,
            color: colors.brand_primary,
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}
