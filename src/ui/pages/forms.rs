// SPDX-License-Identifier: MPL-2.0
//! Contact and login form views.

use super::blocks::cta_button;
use super::{Message, ViewContext};
use crate::site::buttons::ButtonId;
use crate::site::contact::ContactField;
use crate::site::login::LoginField;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{text_input, Column, Container, Text};
use iced::{Element, Length};

fn labeled<'a>(label: String, input: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::BODY))
        .push(input)
        .into()
}

fn form_card<'a>(title: String, body: Column<'a, Message>, height: f32) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::MD)
        .push(Text::new(title).size(typography::TITLE_LG))
        .push(body);

    Container::new(
        Container::new(content)
            .max_width(sizing::FORM_MAX_WIDTH)
            .width(Length::Fill)
            .padding(spacing::LG)
            .style(styles::container::form),
    )
    .width(Length::Fill)
    .height(Length::Fixed(height))
    .align_x(Horizontal::Center)
    .into()
}

pub(super) fn contact<'a>(ctx: &ViewContext<'a>, height: f32) -> Element<'a, Message> {
    let form = ctx.site.contact();
    let i18n = ctx.i18n;
    let field = |field: ContactField, label_key: &str, placeholder_key: &str| {
        labeled(
            i18n.tr(label_key),
            text_input(&i18n.tr(placeholder_key), form.get(field))
                .on_input(move |value| Message::ContactFieldChanged(field, value))
                .on_submit(Message::SubmitContact)
                .padding(spacing::XS)
                .size(typography::BODY_LG),
        )
    };

    let body = Column::new()
        .spacing(spacing::SM)
        .push(field(ContactField::Name, "contact-name-label", "contact-name-placeholder"))
        .push(field(ContactField::Email, "contact-email-label", "contact-email-placeholder"))
        .push(field(ContactField::Subject, "contact-subject-label", "contact-subject-placeholder"))
        .push(field(ContactField::Message, "contact-message-label", "contact-message-placeholder"))
        .push(cta_button(ctx, ButtonId::ContactSubmit));

    form_card(i18n.tr("contact-form-title"), body, height)
}

pub(super) fn login<'a>(ctx: &ViewContext<'a>, height: f32) -> Element<'a, Message> {
    let form = ctx.site.login();
    let i18n = ctx.i18n;

    let email = text_input(&i18n.tr("login-email-placeholder"), &form.email)
        .on_input(|value| Message::LoginFieldChanged(LoginField::Email, value))
        .on_submit(Message::SubmitLogin)
        .padding(spacing::XS)
        .size(typography::BODY_LG);
    let password = text_input(&i18n.tr("login-password-placeholder"), &form.password)
        .on_input(|value| Message::LoginFieldChanged(LoginField::Password, value))
        .on_submit(Message::SubmitLogin)
        .secure(true)
        .padding(spacing::XS)
        .size(typography::BODY_LG);

    let body = Column::new()
        .spacing(spacing::SM)
        .push(labeled(i18n.tr("login-email-label"), email))
        .push(labeled(i18n.tr("login-password-label"), password))
        .push(cta_button(ctx, ButtonId::LoginSubmit));

    form_card(i18n.tr("login-form-title"), body, height)
}
