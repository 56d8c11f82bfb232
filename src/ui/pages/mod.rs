// SPDX-License-Identifier: MPL-2.0
//! Scrollable page content: hero banners, cards, gallery and forms.
//!
//! Page structure is data ([`content`]) laid out at fixed offsets
//! ([`layout`]), so the app can run the scroll reveal and anchor scrolling
//! from the same numbers the view renders with.

mod blocks;
pub mod content;
mod forms;
pub mod layout;

use crate::i18n::I18n;
use crate::site::buttons::ButtonId;
use crate::site::contact::ContactField;
use crate::site::gallery::ITEMS;
use crate::site::login::LoginField;
use crate::site::Site;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::state::RevealTracker;
use iced::alignment::Horizontal;
use iced::widget::{scrollable, Column, Container, Id, Row};
use iced::{Element, Length};
use layout::{Block, PageLayout, PlacedRow, PAGE_PADDING, ROW_SPACING};
use std::time::Duration;

/// Identifier of the page scrollable, targeted by smooth scrolling.
pub const SCROLLABLE_ID: &str = "page-scroll";

#[must_use]
pub fn scrollable_id() -> Id {
    Id::new(SCROLLABLE_ID)
}

/// Contextual data needed to render a page.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub site: &'a Site,
    pub layout: &'a PageLayout,
    pub reveal: &'a RevealTracker,
    /// Scheduler time driving the animations.
    pub now: Duration,
}

/// Messages emitted by page content.
#[derive(Debug, Clone)]
pub enum Message {
    Scrolled {
        offset: f32,
        viewport_height: f32,
        content_height: f32,
    },
    AnchorClicked(&'static str),
    ButtonPressed(ButtonId),
    ContactFieldChanged(ContactField, String),
    SubmitContact,
    LoginFieldChanged(LoginField, String),
    SubmitLogin,
    GalleryHovered(usize),
    GalleryUnhovered(usize),
    GalleryClicked(usize),
}

/// Render the current page.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(ROW_SPACING)
        .padding(PAGE_PADDING)
        .width(Length::Fill);
    for row in ctx.layout.rows() {
        column = column.push(view_row(&ctx, row));
    }

    let centered = Container::new(Container::new(column).max_width(sizing::CONTENT_MAX_WIDTH))
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    scrollable(centered)
        .id(scrollable_id())
        .on_scroll(|viewport| Message::Scrolled {
            offset: viewport.absolute_offset().y,
            viewport_height: viewport.bounds().height,
            content_height: viewport.content_bounds().height,
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_row<'a>(ctx: &ViewContext<'a>, row: &PlacedRow) -> Element<'a, Message> {
    let height = row.spec.height;
    let mut cells = Row::new().spacing(spacing::LG).width(Length::Fill);

    for (block, reveal_index) in row.blocks() {
        let cell = match (block, reveal_index) {
            (Block::Hero(hero), _) => blocks::hero(ctx, hero, height),
            (Block::ContentBox { title_key, body_key }, Some(index))
            | (Block::FeatureCard { title_key, body_key }, Some(index)) => {
                blocks::content_box(ctx, title_key, body_key, height, index)
            }
            (Block::TeamMember { name, role_key }, Some(index)) => {
                blocks::team_member(ctx, *name, role_key, height, index)
            }
            (Block::GalleryItem(item), Some(index)) => match ITEMS.get(*item) {
                Some(gallery_item) => blocks::gallery_card(ctx, *item, gallery_item, height, index),
                None => continue,
            },
            (Block::ContactForm, _) => forms::contact(ctx, height),
            (Block::LoginForm, _) => forms::login(ctx, height),
            // Revealable blocks always carry a reveal index.
            (_, None) => continue,
        };
        cells = cells.push(Container::new(cell).width(Length::FillPortion(1)));
    }

    cells.into()
}
