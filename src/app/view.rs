// SPDX-License-Identifier: MPL-2.0
//! View composition: navbar over the page, toast and alert overlays on top.

use super::Message;
use crate::i18n::I18n;
use crate::site::Site;
use crate::ui::notifications::Toast;
use crate::ui::pages::{self, layout::PageLayout};
use crate::ui::state::RevealTracker;
use crate::ui::styles;
use crate::ui::{alert, navbar};
use iced::widget::{Column, Container, Stack};
use iced::{Element, Length};
use std::time::Duration;

/// Message shown by the post-login dialog.
const WELCOME_ALERT_KEY: &str = "welcome-alert-body";

/// Contextual data needed to render the application.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub site: &'a Site,
    pub layout: &'a PageLayout,
    pub reveal: &'a RevealTracker,
    pub now: Duration,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar = navbar::view(navbar::ViewContext {
        i18n: ctx.i18n,
        navigation: ctx.site.navigation(),
    })
    .map(Message::Navbar);

    let page = pages::view(pages::ViewContext {
        i18n: ctx.i18n,
        site: ctx.site,
        layout: ctx.layout,
        reveal: ctx.reveal,
        now: ctx.now,
    })
    .map(Message::Page);

    let base = Container::new(Column::new().push(navbar).push(page))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page);

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base)
        .push(Toast::view_overlay(ctx.site.notifications(), ctx.now).map(Message::Notification));

    if ctx.site.welcome_alert_open() {
        stack = stack.push(alert::view(ctx.i18n, WELCOME_ALERT_KEY).map(Message::Alert));
    }

    stack.into()
}
