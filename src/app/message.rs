// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::port::timer::TimerHandle;
use crate::site::SiteTimer;
use crate::ui::alert;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::pages;
use iced::Size;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Page(pages::Message),
    Notification(notifications::NotificationMessage),
    Alert(alert::Message),
    /// A scheduled timer elapsed.
    Timer(TimerHandle, SiteTimer),
    /// Animation frame while something is moving.
    Tick(Instant),
    WindowResized(Size),
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override (e.g. `fr`).
    pub lang: Option<String>,
    /// Page file to open first (e.g. `contact.html`). Unknown names open the
    /// home content with no active navigation link.
    pub page: Option<String>,
    /// Optional config directory override.
    pub config_dir: Option<String>,
}
