// SPDX-License-Identifier: MPL-2.0
//! Modal alert dialog with a single acknowledge button.

use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, mouse_area, Column, Container, Text};
use iced::{Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Acknowledge,
    /// Click on the backdrop; swallowed so the page below stays inert.
    BackdropPressed,
}

/// Render the alert with the localized `message_key` over a dimmed backdrop.
pub fn view<'a>(i18n: &I18n, message_key: &str) -> Element<'a, Message> {
    let dialog = Container::new(
        Column::new()
            .spacing(spacing::LG)
            .align_x(Horizontal::Right)
            .push(
                Text::new(i18n.tr(message_key))
                    .size(typography::BODY_LG)
                    .width(Length::Fill),
            )
            .push(
                button(Text::new(i18n.tr("alert-ok")).size(typography::BODY_LG))
                    .on_press(Message::Acknowledge)
                    .padding([spacing::XS, spacing::LG])
                    .style(styles::button::primary),
            ),
    )
    .max_width(sizing::FORM_MAX_WIDTH)
    .padding(spacing::LG)
    .style(styles::container::dialog);

    let backdrop = Container::new(dialog)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::backdrop);

    mouse_area(backdrop)
        .on_press(Message::BackdropPressed)
        .into()
}
