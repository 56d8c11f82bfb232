// SPDX-License-Identifier: MPL-2.0
//! Rendering of individual page blocks.

use super::layout::{AnchorLink, Hero};
use super::{Message, ViewContext};
use crate::site::buttons::{ButtonId, ButtonTarget};
use crate::site::gallery::{CardState, GalleryItem};
use crate::ui::design_tokens::{motion, palette, sizing, spacing, typography};
use crate::ui::styles::{self, with_alpha};
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::animated_spinner::{self, AnimatedSpinner};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, mouse_area, text, Column, Container, Row, Space, Text};
use iced::{Color, Element, Length, Padding, Theme};

/// Vertical room reserved in each revealable slot for the slide and lift.
const SLOT_SLACK: f32 = motion::REVEAL_OFFSET + motion::GALLERY_HOVER_LIFT;

/// Thumbnail tints of the gallery items, by index.
const THUMBNAIL_TINTS: [Color; 6] = [
    Color::from_rgb(0.36, 0.42, 0.50),
    Color::from_rgb(0.20, 0.38, 0.47),
    Color::from_rgb(0.55, 0.45, 0.33),
    Color::from_rgb(0.45, 0.55, 0.58),
    Color::from_rgb(0.31, 0.42, 0.30),
    Color::from_rgb(0.50, 0.30, 0.28),
];

fn faded_text<'a>(content: impl Into<String>, size: f32, alpha: f32, secondary: bool) -> Text<'a> {
    Text::new(content.into())
        .size(size)
        .style(move |theme: &Theme| {
            let colors = ColorScheme::from_theme(theme);
            let color = if secondary {
                colors.text_secondary
            } else {
                colors.text_primary
            };
            text::Style {
                color: Some(with_alpha(color, alpha)),
            }
        })
}

/// Places `content` in a fixed-height slot, pushed down by `offset` and
/// inset horizontally by `inset`.
fn slot<'a>(
    content: impl Into<Element<'a, Message>>,
    height: f32,
    offset: f32,
    inset: f32,
) -> Element<'a, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .padding(Padding {
            top: offset,
            right: inset,
            bottom: (SLOT_SLACK - offset).max(0.0),
            left: inset,
        })
        .into()
}

pub(super) fn hero<'a>(ctx: &ViewContext<'a>, hero: &'static Hero, height: f32) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr(hero.title_key)).size(typography::DISPLAY);
    let subtitle = Text::new(ctx.i18n.tr(hero.subtitle_key)).size(typography::BODY_LG);

    let mut actions = Row::new().spacing(spacing::MD).align_y(Vertical::Center);
    for id in hero.buttons {
        actions = actions.push(cta_button(ctx, *id));
    }
    for link in hero.anchors {
        actions = actions.push(anchor_link(ctx, link));
    }

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(title)
        .push(subtitle)
        .push(actions);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::hero)
        .into()
}

fn anchor_link<'a>(ctx: &ViewContext<'a>, link: &'static AnchorLink) -> Element<'a, Message> {
    button(Text::new(ctx.i18n.tr(link.label_key)).size(typography::BODY_LG))
        .on_press(Message::AnchorClicked(link.href))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::link)
        .into()
}

/// Call-to-action button; shows the spinner and "Loading..." while busy.
pub(super) fn cta_button<'a>(ctx: &ViewContext<'a>, id: ButtonId) -> Element<'a, Message> {
    let loading = ctx.site.is_button_loading(id);
    let label: Element<'a, Message> = if loading {
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(AnimatedSpinner::new(palette::WHITE, animated_spinner::rotation_at(ctx.now)).into_element::<Message>())
            .push(Text::new(ctx.i18n.tr("button-loading")).size(typography::BODY_LG))
            .into()
    } else {
        Text::new(ctx.i18n.tr(id.label_key()))
            .size(typography::BODY_LG)
            .into()
    };

    let message = match id {
        ButtonId::ContactSubmit => Message::SubmitContact,
        ButtonId::LoginSubmit => Message::SubmitLogin,
        _ => Message::ButtonPressed(id),
    };
    let style = match id.target() {
        ButtonTarget::Link(href) if href != "#" => styles::button::outline,
        _ => styles::button::primary,
    };

    button(
        Container::new(label)
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
            .align_y(Vertical::Center),
    )
    .on_press_maybe((!loading).then_some(message))
    .padding([0.0, spacing::LG])
    .style(style)
    .into()
}

pub(super) fn content_box<'a>(
    ctx: &ViewContext<'a>,
    title_key: &str,
    body_key: &str,
    height: f32,
    reveal_index: usize,
) -> Element<'a, Message> {
    let alpha = ctx.reveal.opacity(reveal_index, ctx.now);
    let offset = ctx.reveal.offset(reveal_index, ctx.now);

    let card = Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(faded_text(ctx.i18n.tr(title_key), typography::TITLE_MD, alpha, false))
            .push(faded_text(ctx.i18n.tr(body_key), typography::BODY_LG, alpha, true)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::LG)
    .style(styles::container::card(alpha));

    slot(card, height, offset + motion::GALLERY_HOVER_LIFT, 0.0)
}

pub(super) fn team_member<'a>(
    ctx: &ViewContext<'a>,
    name: &'static str,
    role_key: &str,
    height: f32,
    reveal_index: usize,
) -> Element<'a, Message> {
    let alpha = ctx.reveal.opacity(reveal_index, ctx.now);
    let offset = ctx.reveal.offset(reveal_index, ctx.now);
    let initials: String = name
        .split_whitespace()
        .filter_map(|part| part.chars().next())
        .collect();

    let avatar = Container::new(
        Text::new(initials)
            .size(typography::TITLE_MD)
            .style(move |_theme: &Theme| text::Style {
                color: Some(with_alpha(palette::WHITE, alpha)),
            }),
    )
    .width(Length::Fixed(sizing::AVATAR))
    .height(Length::Fixed(sizing::AVATAR))
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .style(styles::container::thumbnail(palette::BRAND_500, alpha));

    let card = Container::new(
        Column::new()
            .spacing(spacing::XS)
            .align_x(Horizontal::Center)
            .push(avatar)
            .push(faded_text(name, typography::TITLE_SM, alpha, false))
            .push(faded_text(ctx.i18n.tr(role_key), typography::BODY, alpha, true)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::MD)
    .align_x(Horizontal::Center)
    .style(styles::container::card(alpha));

    slot(card, height, offset + motion::GALLERY_HOVER_LIFT, 0.0)
}

/// Horizontal inset emulating the card scale for each state.
fn scale_inset(state: CardState) -> f32 {
    let scale = match state {
        CardState::Rest => 1.0,
        CardState::Hovered => motion::GALLERY_HOVER_SCALE,
        CardState::Pressed => motion::GALLERY_PRESS_SCALE,
    };
    // Rest sits at an inset of XS; larger scale eats into it.
    (spacing::XS * (1.0 + (1.0 - scale) * 20.0)).max(0.0)
}

pub(super) fn gallery_card<'a>(
    ctx: &ViewContext<'a>,
    index: usize,
    item: &'static GalleryItem,
    height: f32,
    reveal_index: usize,
) -> Element<'a, Message> {
    let alpha = ctx.reveal.opacity(reveal_index, ctx.now);
    let reveal_offset = ctx.reveal.offset(reveal_index, ctx.now);
    let state = ctx.site.gallery().card_state(index);
    let lift = match state {
        CardState::Hovered => 0.0,
        CardState::Rest | CardState::Pressed => motion::GALLERY_HOVER_LIFT,
    };
    let tint = THUMBNAIL_TINTS[index % THUMBNAIL_TINTS.len()];

    let thumbnail = Container::new(Space::new().width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::FillPortion(3))
        .style(styles::container::thumbnail(tint, alpha));

    let card = Container::new(
        Column::new()
            .spacing(spacing::XS)
            .push(thumbnail)
            .push(faded_text(item.title, typography::TITLE_SM, alpha, false))
            .push(faded_text(ctx.i18n.tr(item.caption_key), typography::BODY, alpha, true)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::SM)
    .style(styles::container::card(alpha));

    let clickable = button(card)
        .on_press(Message::GalleryClicked(index))
        .padding(0)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::button::card);

    let hoverable = mouse_area(clickable)
        .on_enter(Message::GalleryHovered(index))
        .on_exit(Message::GalleryUnhovered(index));

    slot(hoverable, height, reveal_offset + lift, scale_inset(state))
}
