// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application update loop.
//!
//! Handlers receive an [`UpdateContext`] borrowing the pieces of [`super::App`]
//! they need. Timers scheduled while handling a message are collected by the
//! [`TaskScheduler`] and drained by the caller.

use super::scheduler::TaskScheduler;
use super::Message;
use crate::application::port::timer::TimerHandle;
use crate::i18n::I18n;
use crate::site::buttons::ButtonId;
use crate::site::{anchors, Site, SiteTimer};
use crate::ui::alert;
use crate::ui::design_tokens::sizing;
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::NotificationMessage;
use crate::ui::pages::{self, content, layout::PageLayout};
use crate::ui::state::{RevealTracker, ScrollState};
use iced::widget::operation;
use iced::widget::scrollable::AbsoluteOffset;
use iced::{Size, Task};
use std::time::{Duration, Instant};

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub site: &'a mut Site,
    pub scheduler: &'a mut TaskScheduler,
    pub layout: &'a mut PageLayout,
    pub reveal: &'a mut RevealTracker,
    pub scroll: &'a mut ScrollState,
    pub smooth_scroll: Duration,
    pub now: Duration,
}

impl UpdateContext<'_> {
    /// Reveals blocks brought into view by the current scroll metrics.
    fn observe_reveal(&mut self) {
        let revealed = self.reveal.observe(
            self.layout.reveal_rects(),
            self.scroll.offset(),
            self.scroll.viewport_height(),
            self.now,
        );
        if revealed > 0 {
            tracing::trace!(revealed, offset = self.scroll.offset(), "blocks revealed");
        }
    }
}

fn scroll_page_to(offset: f32) -> Task<Message> {
    operation::scroll_to(pages::scrollable_id(), AbsoluteOffset { x: 0.0, y: offset })
}

/// Lays out the page the site now displays and starts it from the top.
pub fn open_displayed_page(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let page = ctx.site.navigation().displayed_page();
    *ctx.layout = PageLayout::new(content::rows(page));
    ctx.reveal.reset(ctx.layout.reveal_rects().len());
    ctx.scroll.reset();
    ctx.scroll.set_content_height(ctx.layout.content_height());
    ctx.observe_reveal();
    scroll_page_to(0.0)
}

/// Handles navbar component messages.
pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match navbar::update(message, ctx.site.navigation()) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::OpenPage(page) => {
            ctx.site.navigate(page);
            open_displayed_page(ctx)
        }
    }
}

/// Handles page content messages.
pub fn handle_page_message(ctx: &mut UpdateContext<'_>, message: pages::Message) -> Task<Message> {
    match message {
        pages::Message::Scrolled {
            offset,
            viewport_height,
            content_height,
        } => {
            ctx.scroll.on_scroll(offset, viewport_height, content_height);
            ctx.observe_reveal();
            Task::none()
        }
        pages::Message::AnchorClicked(href) => {
            match anchors::resolve(href, ctx.layout.sections()) {
                Some(top) => {
                    let target = ctx.scroll.scroll_to_section(top, ctx.now, ctx.smooth_scroll);
                    tracing::debug!(href, target, "smooth scroll");
                }
                None => tracing::debug!(href, "anchor without target"),
            }
            Task::none()
        }
        pages::Message::ButtonPressed(id) => {
            if ctx.site.is_button_loading(id) {
                return Task::none();
            }
            match ctx.site.press_button(ctx.scheduler, id) {
                Some(_) => open_displayed_page(ctx),
                None => Task::none(),
            }
        }
        pages::Message::ContactFieldChanged(field, value) => {
            ctx.site.edit_contact(field, value);
            Task::none()
        }
        pages::Message::SubmitContact => {
            // A loading submit button is disabled, which also blocks submission.
            if !ctx.site.is_button_loading(ButtonId::ContactSubmit) {
                if let Err(err) = ctx.site.submit_contact(ctx.scheduler, ctx.i18n) {
                    tracing::debug!(%err, "contact form rejected");
                }
            }
            Task::none()
        }
        pages::Message::LoginFieldChanged(field, value) => {
            ctx.site.edit_login(field, value);
            Task::none()
        }
        pages::Message::SubmitLogin => {
            if !ctx.site.is_button_loading(ButtonId::LoginSubmit) {
                if let Err(err) = ctx.site.submit_login(ctx.scheduler, ctx.i18n) {
                    tracing::debug!(%err, "login form rejected");
                }
            }
            Task::none()
        }
        pages::Message::GalleryHovered(index) => {
            ctx.site.hover_gallery(index);
            Task::none()
        }
        pages::Message::GalleryUnhovered(index) => {
            ctx.site.unhover_gallery(index);
            Task::none()
        }
        pages::Message::GalleryClicked(index) => {
            ctx.site.click_gallery(ctx.scheduler, ctx.i18n, index);
            Task::none()
        }
    }
}

/// Handles toast close buttons.
pub fn handle_notification_message(ctx: &mut UpdateContext<'_>, message: NotificationMessage) -> Task<Message> {
    ctx.site.handle_notification(ctx.scheduler, message);
    Task::none()
}

pub fn handle_alert_message(ctx: &mut UpdateContext<'_>, message: alert::Message) -> Task<Message> {
    match message {
        alert::Message::Acknowledge => ctx.site.acknowledge_welcome(),
        alert::Message::BackdropPressed => {}
    }
    Task::none()
}

/// Applies a fired timer unless it was cancelled after its task started.
pub fn handle_timer(ctx: &mut UpdateContext<'_>, handle: TimerHandle, event: SiteTimer) -> Task<Message> {
    if !ctx.scheduler.fired(handle) {
        tracing::trace!(?event, "dropping cancelled timer");
        return Task::none();
    }
    ctx.site.handle_timer(ctx.scheduler, ctx.i18n, event);
    Task::none()
}

/// Advances the smooth scroll, if one is running.
pub fn handle_tick(ctx: &mut UpdateContext<'_>, _instant: Instant) -> Task<Message> {
    match ctx.scroll.tick(ctx.now) {
        Some(offset) => {
            ctx.observe_reveal();
            scroll_page_to(offset)
        }
        None => Task::none(),
    }
}

pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) -> Task<Message> {
    ctx.scroll
        .set_viewport_height((size.height - sizing::NAVBAR_HEIGHT).max(0.0));
    ctx.observe_reveal();
    Task::none()
}
