// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering the displayed notification.
//!
//! The toast is pinned to the top-right corner: an accent stripe on the left,
//! the message, and a round close button. During the entry and exit slides
//! the whole toast fades and drifts toward the window edge.

use super::manager::{Manager, Message};
use super::notification::{Notification, Phase};
use super::style::ToastStyle;
use crate::ui::design_tokens::{border, opacity, radius, shadow, sizing, spacing, typography};
use crate::ui::styles::with_alpha;
use iced::widget::{button, container, text, Container, Row, Space, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Padding, Theme};
use std::time::Duration;

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders the toast overlay for the manager's current notification.
    ///
    /// `now` is the scheduler time used to evaluate the slide animation.
    pub fn view_overlay<'a>(manager: &'a Manager, now: Duration) -> Element<'a, Message> {
        let (Some(notification), Some(style)) = (manager.current(), manager.current_style())
        else {
            return Space::new().width(Length::Shrink).height(Length::Shrink).into();
        };

        let progress = manager.slide_progress(now);
        let alpha = progress.clamp(opacity::TRANSPARENT, opacity::OPAQUE);

        let message_widget = Text::new(notification.message())
            .size(typography::BODY_LG)
            .style(move |_theme: &Theme| text::Style {
                color: Some(with_alpha(style.text, alpha)),
            });

        let close_glyph = Container::new(
            Text::new("\u{00D7}")
                .size(typography::CLOSE_GLYPH)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(with_alpha(style.text, alpha)),
                }),
        )
        .width(Length::Fixed(sizing::TOAST_CLOSE_BUTTON))
        .height(Length::Fixed(sizing::TOAST_CLOSE_BUTTON))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

        let close_button = button(close_glyph)
            .on_press_maybe(close_message(notification))
            .padding(0)
            .style(move |_theme: &Theme, status| close_button_style(status, style, alpha));

        let body = Row::new()
            .spacing(spacing::MD)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(message_widget).width(Length::Fill))
            .push(close_button);

        let accent = Container::new(Space::new().width(Length::Fixed(border::WIDTH_ACCENT)))
            .height(Length::Fill)
            .style(move |_theme: &Theme| accent_style(style, alpha));

        let card = Container::new(
            Row::new()
                .push(accent)
                .push(Container::new(body).padding([15.0, 20.0]).width(Length::Fill))
                .height(Length::Shrink),
        )
        .max_width(sizing::TOAST_MAX_WIDTH)
        .style(move |_theme: &Theme| toast_container_style(style, alpha));

        // Resting position is TOAST_MARGIN from the top-right corner; while
        // hidden the toast sits flush against the edge.
        Container::new(card)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Top)
            .padding(Padding {
                top: sizing::TOAST_MARGIN,
                right: sizing::TOAST_MARGIN * progress,
                bottom: 0.0,
                left: 0.0,
            })
            .into()
    }
}

/// Close action of the toast; none before the entry tick, while the toast
/// is still hidden.
fn close_message(notification: &Notification) -> Option<Message> {
    (notification.phase() != Phase::Entering).then_some(Message::Dismiss(notification.id()))
}

/// Style function for the toast card.
fn toast_container_style(style: ToastStyle, alpha: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(with_alpha(style.background, alpha))),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: iced::Shadow {
            color: with_alpha(shadow::TOAST.color, alpha),
            ..shadow::TOAST
        },
        text_color: Some(with_alpha(style.text, alpha)),
        ..Default::default()
    }
}

/// Style function for the left accent stripe.
fn accent_style(style: ToastStyle, alpha: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(with_alpha(style.border, alpha))),
        ..Default::default()
    }
}

/// Style function for the round close button.
fn close_button_style(status: button::Status, style: ToastStyle, alpha: f32) -> button::Style {
    let highlight = match status {
        button::Status::Hovered | button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_SOFT * alpha,
            ..Color::WHITE
        })),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background: highlight,
        text_color: with_alpha(style.text, alpha),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::notification::Kind;
    use crate::ui::notifications::style::style_table;

    #[test]
    fn toast_container_uses_kind_background() {
        let style = style_table().get(Kind::Success);
        let container = toast_container_style(style, 1.0);

        assert_eq!(container.background, Some(Background::Color(style.background)));
    }

    #[test]
    fn accent_uses_kind_border_color() {
        let style = style_table().get(Kind::Error);
        let accent = accent_style(style, 1.0);

        assert_eq!(accent.background, Some(Background::Color(style.border)));
    }

    #[test]
    fn hidden_toast_is_transparent() {
        let style = style_table().get(Kind::Info);
        let container = toast_container_style(style, 0.0);

        match container.background {
            Some(Background::Color(color)) => assert_eq!(color.a, 0.0),
            other => panic!("expected color background, got {other:?}"),
        }
    }

    #[test]
    fn close_is_disabled_until_entry_tick() {
        let mut notification = Notification::new(Kind::Info, "x", Duration::ZERO);
        assert!(close_message(&notification).is_none());

        notification.set_phase(Phase::Visible, Duration::from_millis(100));
        assert!(matches!(
            close_message(&notification),
            Some(Message::Dismiss(id)) if id == notification.id()
        ));
    }

    #[test]
    fn close_button_highlights_on_hover() {
        let style = style_table().get(Kind::Info);
        let active = close_button_style(button::Status::Active, style, 1.0);
        let hovered = close_button_style(button::Status::Hovered, style, 1.0);

        assert!(active.background.is_none());
        assert!(hovered.background.is_some());
    }
}
