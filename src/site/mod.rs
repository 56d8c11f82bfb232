// SPDX-License-Identifier: MPL-2.0
//! Runtime-independent state of the showcase site.
//!
//! [`Site`] owns the notification manager and the small collaborators that
//! feed it: navigation, the contact and login forms, the gallery, and the
//! button loading simulation. Every delayed behavior is scheduled on a
//! [`Scheduler`] whose events are [`SiteTimer`]s, so the same code runs under
//! the iced runtime and under a virtual clock in tests.
//!
//! # Example
//!
//! ```
//! use iced_showcase::application::port::timer::ManualScheduler;
//! use iced_showcase::config::Config;
//! use iced_showcase::i18n::I18n;
//! use iced_showcase::site::{Site, SiteTimer};
//! use iced_showcase::site::contact::ContactField;
//!
//! let config = Config::default();
//! let i18n = I18n::new(Some("en-US".into()), &config);
//! let mut scheduler = ManualScheduler::<SiteTimer>::new();
//! let mut site = Site::new(&config, "index.html");
//!
//! site.edit_contact(ContactField::Name, "Ada".into());
//! assert!(site.submit_contact(&mut scheduler, &i18n).is_err());
//! assert_eq!(site.notifications().visible_count(), 1);
//! ```

pub mod anchors;
pub mod buttons;
pub mod contact;
pub mod gallery;
pub mod login;
pub mod navigation;

use crate::application::port::timer::Scheduler;
use crate::config::Config;
use crate::error::FormError;
use crate::i18n::I18n;
use crate::ui::notifications::{
    Kind, Manager, NotificationId, NotificationMessage, TimerEvent,
};
use buttons::{ButtonId, ButtonLoading};
use contact::{ContactField, ContactForm, ContactSubmission};
use gallery::Gallery;
use login::{Credentials, LoginField, LoginForm};
use navigation::{Navigation, Page};
use std::time::Duration;

/// Every delayed event the site schedules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteTimer {
    Notification(TimerEvent),
    /// Simulated login round-trip finished.
    LoginVerify(Credentials),
    /// Show the post-login welcome dialog.
    WelcomeAlert,
    ButtonReset(ButtonId),
    GalleryRelease(usize),
}

impl From<TimerEvent> for SiteTimer {
    fn from(event: TimerEvent) -> Self {
        SiteTimer::Notification(event)
    }
}

/// Delays and thresholds taken from the `[forms]` and `[animations]` config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteTimings {
    pub login_delay: Duration,
    pub redirect_delay: Duration,
    pub min_password_len: usize,
    pub button_loading: Duration,
    pub gallery_press: Duration,
}

impl From<&Config> for SiteTimings {
    fn from(config: &Config) -> Self {
        Self {
            login_delay: config.forms.login_delay(),
            redirect_delay: config.forms.redirect_delay(),
            min_password_len: config.forms.min_password_len(),
            button_loading: config.animations.button_loading(),
            gallery_press: config.animations.gallery_press(),
        }
    }
}

/// Site state driven by user actions and [`SiteTimer`] events.
#[derive(Debug)]
pub struct Site {
    notifications: Manager,
    navigation: Navigation,
    contact: ContactForm,
    login: LoginForm,
    gallery: Gallery,
    buttons: ButtonLoading,
    welcome_alert: bool,
    timings: SiteTimings,
}

impl Site {
    /// Creates the site at `start_path` (file name or full location).
    #[must_use]
    pub fn new(config: &Config, start_path: &str) -> Self {
        Self {
            notifications: Manager::from_config(&config.notifications),
            navigation: Navigation::new(start_path),
            contact: ContactForm::default(),
            login: LoginForm::default(),
            gallery: Gallery::default(),
            buttons: ButtonLoading::default(),
            welcome_alert: false,
            timings: SiteTimings::from(config),
        }
    }

    #[must_use]
    pub fn notifications(&self) -> &Manager {
        &self.notifications
    }

    #[must_use]
    pub fn navigation(&self) -> &Navigation {
        &self.navigation
    }

    #[must_use]
    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    #[must_use]
    pub fn login(&self) -> &LoginForm {
        &self.login
    }

    #[must_use]
    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    #[must_use]
    pub fn timings(&self) -> SiteTimings {
        self.timings
    }

    #[must_use]
    pub fn is_button_loading(&self, id: ButtonId) -> bool {
        self.buttons.is_loading(id)
    }

    #[must_use]
    pub fn any_button_loading(&self) -> bool {
        self.buttons.any_loading()
    }

    #[must_use]
    pub fn welcome_alert_open(&self) -> bool {
        self.welcome_alert
    }

    /// Shows `message` as a toast, replacing any current one.
    pub fn present<S>(&mut self, scheduler: &mut S, message: impl Into<String>, kind: Kind) -> NotificationId
    where
        S: Scheduler<Event = SiteTimer>,
    {
        self.notifications.present(scheduler, message, kind)
    }

    pub fn handle_notification<S>(&mut self, scheduler: &mut S, message: NotificationMessage) -> bool
    where
        S: Scheduler<Event = SiteTimer>,
    {
        self.notifications.handle_message(scheduler, message)
    }

    pub fn navigate(&mut self, page: Page) {
        tracing::debug!(%page, "navigate");
        self.navigation.navigate(page);
    }

    pub fn edit_contact(&mut self, field: ContactField, value: String) {
        self.contact.set(field, value);
    }

    pub fn edit_login(&mut self, field: LoginField, value: String) {
        self.login.set(field, value);
    }

    /// Presses a call-to-action button. Eligible buttons enter the loading
    /// state; link buttons navigate and return the page they lead to.
    pub fn press_button<S>(&mut self, scheduler: &mut S, id: ButtonId) -> Option<Page>
    where
        S: Scheduler<Event = SiteTimer>,
    {
        if self.buttons.start(id) {
            scheduler.schedule(self.timings.button_loading, SiteTimer::ButtonReset(id));
        }
        let page = id.target().page()?;
        self.navigate(page);
        Some(page)
    }

    /// Validates the contact form. On success the submission is logged and
    /// the form is cleared; on failure the fields are left untouched.
    pub fn submit_contact<S>(
        &mut self,
        scheduler: &mut S,
        i18n: &I18n,
    ) -> Result<ContactSubmission, FormError>
    where
        S: Scheduler<Event = SiteTimer>,
    {
        self.press_button(scheduler, ButtonId::ContactSubmit);
        match self.contact.validate() {
            Ok(submission) => {
                tracing::info!(
                    name = %submission.name,
                    email = %submission.email,
                    subject = submission.subject.as_deref().unwrap_or_default(),
                    "contact form submitted"
                );
                self.notifications.present(
                    scheduler,
                    i18n.tr("notification-contact-success"),
                    Kind::Success,
                );
                self.contact.reset();
                Ok(submission)
            }
            Err(err) => {
                self.notifications
                    .present(scheduler, i18n.tr(err.i18n_key()), Kind::Error);
                Err(err)
            }
        }
    }

    /// Starts the simulated login. The credentials are judged when the
    /// scheduled [`SiteTimer::LoginVerify`] fires; the form is never cleared.
    pub fn submit_login<S>(&mut self, scheduler: &mut S, i18n: &I18n) -> Result<(), FormError>
    where
        S: Scheduler<Event = SiteTimer>,
    {
        self.press_button(scheduler, ButtonId::LoginSubmit);
        let credentials = match self.login.credentials() {
            Ok(credentials) => credentials,
            Err(err) => {
                self.notifications
                    .present(scheduler, i18n.tr(err.i18n_key()), Kind::Error);
                return Err(err);
            }
        };
        tracing::info!(email = credentials.email(), "login submitted");
        self.notifications.present(
            scheduler,
            i18n.tr("notification-login-pending"),
            Kind::Info,
        );
        scheduler.schedule(self.timings.login_delay, SiteTimer::LoginVerify(credentials));
        Ok(())
    }

    pub fn hover_gallery(&mut self, index: usize) {
        self.gallery.hover(index);
    }

    pub fn unhover_gallery(&mut self, index: usize) {
        self.gallery.unhover(index);
    }

    /// Announces the clicked project and plays the press feedback.
    pub fn click_gallery<S>(
        &mut self,
        scheduler: &mut S,
        i18n: &I18n,
        index: usize,
    ) -> Option<NotificationId>
    where
        S: Scheduler<Event = SiteTimer>,
    {
        let item = self.gallery.press(index)?;
        let message = i18n.tr_with_args("notification-gallery-open", &[("title", item.title)]);
        let id = self.notifications.present(scheduler, message, Kind::Info);
        scheduler.schedule(self.timings.gallery_press, SiteTimer::GalleryRelease(index));
        Some(id)
    }

    pub fn acknowledge_welcome(&mut self) {
        self.welcome_alert = false;
    }

    /// Applies a fired timer. Returns whether any visible state changed.
    pub fn handle_timer<S>(&mut self, scheduler: &mut S, i18n: &I18n, event: SiteTimer) -> bool
    where
        S: Scheduler<Event = SiteTimer>,
    {
        match event {
            SiteTimer::Notification(event) => self.notifications.handle_timer(scheduler, event),
            SiteTimer::LoginVerify(credentials) => {
                match credentials.verify(self.timings.min_password_len) {
                    Ok(()) => {
                        tracing::info!(email = credentials.email(), "login accepted");
                        self.notifications.present(
                            scheduler,
                            i18n.tr("notification-login-success"),
                            Kind::Success,
                        );
                        scheduler.schedule(self.timings.redirect_delay, SiteTimer::WelcomeAlert);
                    }
                    Err(err) => {
                        tracing::info!(email = credentials.email(), "login rejected");
                        self.notifications
                            .present(scheduler, i18n.tr(err.i18n_key()), Kind::Error);
                    }
                }
                true
            }
            SiteTimer::WelcomeAlert => {
                self.welcome_alert = true;
                true
            }
            SiteTimer::ButtonReset(id) => self.buttons.reset(id),
            SiteTimer::GalleryRelease(index) => {
                let was_pressed = self.gallery.is_pressed(index);
                self.gallery.release(index);
                was_pressed
            }
        }
    }
}
