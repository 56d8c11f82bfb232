// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the site and the views.
//!
//! The `App` struct wires together the site state, localization, the page
//! layout and its animations, and translates messages into side effects such
//! as scheduled timers or scroll operations.

mod message;
pub mod paths;
pub mod scheduler;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::i18n::I18n;
use crate::site::Site;
use crate::ui::design_tokens::sizing;
use crate::ui::notifications::Kind;
use crate::ui::pages::{content, layout::PageLayout};
use crate::ui::state::{RevealTracker, ScrollState};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use scheduler::TaskScheduler;
use std::fmt;
use std::time::Duration;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    site: Site,
    scheduler: TaskScheduler,
    layout: PageLayout,
    reveal: RevealTracker,
    scroll: ScrollState,
    theme_mode: ThemeMode,
    smooth_scroll: Duration,
    /// Scheduler time of the message being processed.
    now: Duration,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("page", &self.site.navigation().current_file())
            .field("notification", &self.site.notifications().current())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 720;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot function; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || App::new(boot_state.borrow_mut().take().unwrap_or_default());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the configuration, opens the start page and reports a broken
    /// settings file as an error toast.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let start_path = flags.page.as_deref().unwrap_or(crate::site::navigation::INDEX_FILE);
        let site = Site::new(&config, start_path);
        let layout = PageLayout::new(content::rows(site.navigation().displayed_page()));
        let initial_viewport = WINDOW_DEFAULT_HEIGHT as f32 - sizing::NAVBAR_HEIGHT;

        tracing::info!(
            locale = %i18n.current_locale(),
            page = site.navigation().current_file(),
            "starting"
        );

        let mut app = App {
            reveal: RevealTracker::new(layout.reveal_rects().len(), config.animations.reveal()),
            scroll: ScrollState::new(initial_viewport),
            theme_mode: config.general.theme_mode,
            smooth_scroll: config.animations.smooth_scroll(),
            scheduler: TaskScheduler::new(),
            now: Duration::ZERO,
            i18n,
            site,
            layout,
        };

        let open = update::open_displayed_page(&mut app.update_context());
        if let Some(key) = config_warning {
            let message = app.i18n.tr(&key);
            app.site.present(&mut app.scheduler, message, Kind::Error);
        }
        let timers = app.scheduler.drain();
        (app, Task::batch([open, timers]))
    }

    fn title(&self) -> String {
        let page = self.i18n.tr(self.site.navigation().displayed_page().label_key());
        format!("{} - {}", page, self.i18n.tr("window-title"))
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn is_animating(&self) -> bool {
        self.site.notifications().is_animating(self.now)
            || self.reveal.is_animating(self.now)
            || self.scroll.is_animating()
            || self.site.any_button_loading()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.is_animating()),
        ])
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            i18n: &self.i18n,
            site: &mut self.site,
            scheduler: &mut self.scheduler,
            layout: &mut self.layout,
            reveal: &mut self.reveal,
            scroll: &mut self.scroll,
            smooth_scroll: self.smooth_scroll,
            now: self.now,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        use crate::application::port::timer::Scheduler;

        self.now = match &message {
            Message::Tick(instant) => self.scheduler.elapsed_at(*instant),
            _ => self.scheduler.now(),
        };

        let mut ctx = self.update_context();
        let task = match message {
            Message::Navbar(msg) => update::handle_navbar_message(&mut ctx, msg),
            Message::Page(msg) => update::handle_page_message(&mut ctx, msg),
            Message::Notification(msg) => update::handle_notification_message(&mut ctx, msg),
            Message::Alert(msg) => update::handle_alert_message(&mut ctx, msg),
            Message::Timer(handle, event) => update::handle_timer(&mut ctx, handle, event),
            Message::Tick(instant) => update::handle_tick(&mut ctx, instant),
            Message::WindowResized(size) => update::handle_window_resized(&mut ctx, size),
        };

        Task::batch([task, self.scheduler.drain()])
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            site: &self.site,
            layout: &self.layout,
            reveal: &self.reveal,
            now: self.now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::navigation::Page;
    use crate::ui::navbar;
    use crate::ui::pages;

    fn app() -> App {
        let config = config::Config::default();
        let i18n = I18n::new(Some("en-US".into()), &config);
        let site = Site::new(&config, "index.html");
        let layout = PageLayout::new(content::rows(Page::Home));
        App {
            reveal: RevealTracker::new(layout.reveal_rects().len(), config.animations.reveal()),
            scroll: ScrollState::new(600.0),
            theme_mode: ThemeMode::Light,
            smooth_scroll: config.animations.smooth_scroll(),
            scheduler: TaskScheduler::new(),
            now: Duration::ZERO,
            i18n,
            site,
            layout,
        }
    }

    #[test]
    fn navbar_switches_page_and_layout() {
        let mut app = app();
        let _ = app.update(Message::Navbar(navbar::Message::Navigate(Page::Gallery)));
        assert_eq!(app.site.navigation().current_page(), Some(Page::Gallery));
        assert_eq!(app.layout, PageLayout::new(content::rows(Page::Gallery)));
        assert_eq!(app.scroll.offset(), 0.0);
    }

    #[test]
    fn invalid_contact_submit_shows_error_toast() {
        let mut app = app();
        let _ = app.update(Message::Page(pages::Message::SubmitContact));
        let current = app.site.notifications().current().map(|n| n.kind());
        assert_eq!(current, Some(Kind::Error));
    }

    #[test]
    fn submit_is_ignored_while_button_is_loading() {
        let mut app = app();
        let _ = app.update(Message::Page(pages::Message::SubmitContact));
        let first = app.site.notifications().current().map(|n| n.id());
        let _ = app.update(Message::Page(pages::Message::SubmitContact));
        let second = app.site.notifications().current().map(|n| n.id());
        assert_eq!(first, second);
    }

    #[test]
    fn anchor_click_starts_smooth_scroll() {
        let mut app = app();
        app.scroll.set_content_height(app.layout.content_height());
        let _ = app.update(Message::Page(pages::Message::AnchorClicked("#features")));
        assert!(app.scroll.is_animating());
        assert!(app.is_animating());
    }

    #[test]
    fn bare_hash_anchor_does_nothing() {
        let mut app = app();
        let _ = app.update(Message::Page(pages::Message::AnchorClicked("#")));
        assert!(!app.scroll.is_animating());
    }
}
