// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette::WHITE, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Solid brand button for primary actions (form submits, hero CTA).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::from_theme(theme);
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(colors.brand_primary)),
            text_color: WHITE,
            border: Border {
                color: colors.brand_secondary,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(colors.brand_hover)),
            text_color: WHITE,
            border: Border {
                color: colors.brand_primary,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        // Loading buttons keep their brand color, slightly dimmed.
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_STRONG,
                ..colors.brand_primary
            })),
            text_color: WHITE,
            border: Border {
                color: colors.brand_secondary,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Transparent button with a brand outline, for secondary links.
pub fn outline(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::from_theme(theme);
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..colors.brand_primary
        })),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: colors.hero_text,
        border: Border {
            color: colors.brand_primary,
            width: 2.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Text-only link, such as in-page anchors.
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::from_theme(theme);
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => colors.brand_hover,
        _ => colors.brand_primary,
    };
    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Navigation bar link; `active` marks the link of the current page.
pub fn nav_link(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = ColorScheme::from_theme(theme);
        let highlighted = active || matches!(status, button::Status::Hovered | button::Status::Pressed);

        button::Style {
            background: active.then_some(Background::Color(colors.brand_primary)),
            text_color: if highlighted && !active {
                colors.brand_hover
            } else {
                colors.hero_text
            },
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Invisible button wrapping a clickable card.
pub fn card(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: Color::TRANSPARENT,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}
