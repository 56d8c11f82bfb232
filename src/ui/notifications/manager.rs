// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns at most one displayed notification. Presenting a new
//! one evicts the current one on the spot, then schedules the entry tick and
//! the auto-dismiss deadline against a [`Scheduler`]. Dismissal (manual or
//! automatic) starts the exit slide and schedules the final removal.
//!
//! Every timer event carries the id of the notification it was scheduled
//! for. Events that no longer match the current notification, or whose phase
//! precondition no longer holds, are ignored, so removal is idempotent even
//! when timers are left running.

use super::notification::{Kind, Notification, NotificationId, Phase};
use super::style::{style_table, StyleTable, ToastStyle};
use crate::application::port::timer::{Scheduler, TimerHandle};
use crate::config::NotificationsConfig;
use std::time::Duration;

/// Delay between attaching a toast and starting its slide-in.
pub const DEFAULT_ENTER_DELAY: Duration = Duration::from_millis(100);
/// Lifetime of a toast that is not closed by the user.
pub const DEFAULT_AUTO_DISMISS: Duration = Duration::from_millis(5000);
/// Duration of the slide transition, in and out.
pub const DEFAULT_EXIT: Duration = Duration::from_millis(300);

/// Timer events owned by the manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Entry tick: `Entering` becomes `Visible`.
    Enter(NotificationId),
    /// Auto-dismiss deadline reached.
    AutoDismiss(NotificationId),
    /// Exit slide finished; detach the toast.
    Remove(NotificationId),
}

/// Messages for notification state changes.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Close button pressed on a specific notification.
    Dismiss(NotificationId),
    /// A scheduled timer fired.
    Timer(TimerEvent),
}

/// Delays used by the manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationTimings {
    pub enter_delay: Duration,
    pub auto_dismiss: Duration,
    pub exit: Duration,
}

impl Default for NotificationTimings {
    fn default() -> Self {
        Self {
            enter_delay: DEFAULT_ENTER_DELAY,
            auto_dismiss: DEFAULT_AUTO_DISMISS,
            exit: DEFAULT_EXIT,
        }
    }
}

impl From<&NotificationsConfig> for NotificationTimings {
    fn from(config: &NotificationsConfig) -> Self {
        let defaults = Self::default();
        Self {
            enter_delay: config
                .enter_delay_ms
                .map_or(defaults.enter_delay, Duration::from_millis),
            auto_dismiss: config
                .auto_dismiss_ms
                .map_or(defaults.auto_dismiss, Duration::from_millis),
            exit: config.exit_ms.map_or(defaults.exit, Duration::from_millis),
        }
    }
}

/// Outstanding timers of the current notification.
#[derive(Debug, Default)]
struct Timers {
    enter: Option<TimerHandle>,
    auto_dismiss: Option<TimerHandle>,
    remove: Option<TimerHandle>,
}

impl Timers {
    fn cancel_all<S: Scheduler>(&mut self, scheduler: &mut S) {
        for handle in [
            self.enter.take(),
            self.auto_dismiss.take(),
            self.remove.take(),
        ]
        .into_iter()
        .flatten()
        {
            scheduler.cancel(handle);
        }
    }
}

/// Owns the single displayed notification and its timers.
#[derive(Debug)]
pub struct Manager {
    current: Option<Notification>,
    timers: Timers,
    timings: NotificationTimings,
    /// Cancel the pending auto-dismiss when the user closes the toast.
    cancel_auto_dismiss_on_close: bool,
    styles: &'static StyleTable,
}

impl Default for Manager {
    fn default() -> Self {
        Self::new()
    }
}

impl Manager {
    /// Creates an empty manager with default timings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_timings(NotificationTimings::default())
    }

    /// Creates an empty manager with custom timings.
    #[must_use]
    pub fn with_timings(timings: NotificationTimings) -> Self {
        Self {
            current: None,
            timers: Timers::default(),
            timings,
            cancel_auto_dismiss_on_close: true,
            styles: style_table(),
        }
    }

    /// Creates a manager configured from the `[notifications]` section.
    #[must_use]
    pub fn from_config(config: &NotificationsConfig) -> Self {
        let mut manager = Self::with_timings(NotificationTimings::from(config));
        manager.cancel_auto_dismiss_on_close = config.cancel_auto_dismiss_on_close.unwrap_or(true);
        manager
    }

    /// Chooses whether closing a toast cancels its auto-dismiss timer.
    ///
    /// When disabled, the timer still fires later and finds nothing to do.
    pub fn set_cancel_auto_dismiss_on_close(&mut self, cancel: bool) {
        self.cancel_auto_dismiss_on_close = cancel;
    }

    #[must_use]
    pub fn timings(&self) -> NotificationTimings {
        self.timings
    }

    /// Presents a message, replacing any notification currently displayed.
    ///
    /// The previous notification is dropped without an exit animation and its
    /// timers are cancelled.
    pub fn present<S>(&mut self, scheduler: &mut S, message: impl Into<String>, kind: Kind) -> NotificationId
    where
        S: Scheduler,
        S::Event: From<TimerEvent>,
    {
        if let Some(previous) = self.current.take() {
            tracing::debug!(id = ?previous.id(), "evicting notification");
            self.timers.cancel_all(scheduler);
        }

        let notification = Notification::new(kind, message, scheduler.now());
        let id = notification.id();
        tracing::debug!(?id, kind = kind.as_str(), "presenting notification");

        self.timers.enter =
            Some(scheduler.schedule(self.timings.enter_delay, TimerEvent::Enter(id).into()));
        self.timers.auto_dismiss = Some(
            scheduler.schedule(self.timings.auto_dismiss, TimerEvent::AutoDismiss(id).into()),
        );
        self.current = Some(notification);
        id
    }

    /// Starts the exit slide of notification `id`.
    ///
    /// Returns `true` if the notification was displayed and not already
    /// leaving.
    pub fn dismiss<S>(&mut self, scheduler: &mut S, id: NotificationId) -> bool
    where
        S: Scheduler,
        S::Event: From<TimerEvent>,
    {
        if !self.begin_exit(scheduler, id) {
            return false;
        }
        tracing::debug!(?id, "notification closed by user");
        if self.cancel_auto_dismiss_on_close {
            if let Some(handle) = self.timers.auto_dismiss.take() {
                scheduler.cancel(handle);
            }
        }
        true
    }

    /// Applies a fired timer event.
    ///
    /// Returns `true` if the event changed the displayed notification.
    pub fn handle_timer<S>(&mut self, scheduler: &mut S, event: TimerEvent) -> bool
    where
        S: Scheduler,
        S::Event: From<TimerEvent>,
    {
        match event {
            TimerEvent::Enter(id) => {
                let now = scheduler.now();
                match self.current.as_mut() {
                    Some(current) if current.id() == id && current.phase() == Phase::Entering => {
                        self.timers.enter = None;
                        current.set_phase(Phase::Visible, now);
                        true
                    }
                    _ => false,
                }
            }
            TimerEvent::AutoDismiss(id) => {
                if self.current_id() == Some(id) {
                    self.timers.auto_dismiss = None;
                }
                let dismissed = self.begin_exit(scheduler, id);
                if dismissed {
                    tracing::debug!(?id, "notification expired");
                }
                dismissed
            }
            TimerEvent::Remove(id) => {
                let leaving = self
                    .current
                    .as_ref()
                    .is_some_and(|c| c.id() == id && c.phase() == Phase::Dismissing);
                if leaving {
                    tracing::debug!(?id, "notification removed");
                    self.current = None;
                    if !self.cancel_auto_dismiss_on_close {
                        // Left running; it fires later with a stale id.
                        self.timers.auto_dismiss = None;
                    }
                    self.timers.cancel_all(scheduler);
                }
                leaving
            }
        }
    }

    /// Handles a notification message.
    pub fn handle_message<S>(&mut self, scheduler: &mut S, message: Message) -> bool
    where
        S: Scheduler,
        S::Event: From<TimerEvent>,
    {
        match message {
            Message::Dismiss(id) => self.dismiss(scheduler, id),
            Message::Timer(event) => self.handle_timer(scheduler, event),
        }
    }

    /// Drops the current notification immediately and cancels its timers.
    pub fn clear<S: Scheduler>(&mut self, scheduler: &mut S) {
        self.current = None;
        self.timers.cancel_all(scheduler);
    }

    /// Returns the displayed notification, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Returns the number of displayed notifications (0 or 1).
    #[must_use]
    pub fn visible_count(&self) -> usize {
        usize::from(self.current.is_some())
    }

    #[must_use]
    pub fn has_notification(&self) -> bool {
        self.current.is_some()
    }

    /// Returns the colors of the displayed notification.
    #[must_use]
    pub fn current_style(&self) -> Option<ToastStyle> {
        self.current.as_ref().map(|n| self.styles.get(n.kind()))
    }

    /// How far the toast is from its off-screen position, from 0.0 (hidden)
    /// to 1.0 (at rest), at time `now`.
    #[must_use]
    pub fn slide_progress(&self, now: Duration) -> f32 {
        let Some(current) = &self.current else {
            return 0.0;
        };
        let elapsed = now.saturating_sub(current.phase_since());
        let fraction = fraction_of(elapsed, self.timings.exit);
        match current.phase() {
            Phase::Entering => 0.0,
            Phase::Visible => fraction,
            Phase::Dismissing => current.exit_from() * (1.0 - fraction),
        }
    }

    /// Whether the toast is mid-slide at time `now` and needs frame updates.
    #[must_use]
    pub fn is_animating(&self, now: Duration) -> bool {
        match &self.current {
            Some(current) => match current.phase() {
                Phase::Entering => false,
                Phase::Visible => now.saturating_sub(current.phase_since()) < self.timings.exit,
                Phase::Dismissing => true,
            },
            None => false,
        }
    }

    fn current_id(&self) -> Option<NotificationId> {
        self.current.as_ref().map(Notification::id)
    }

    fn begin_exit<S>(&mut self, scheduler: &mut S, id: NotificationId) -> bool
    where
        S: Scheduler,
        S::Event: From<TimerEvent>,
    {
        let now = scheduler.now();
        let progress = self.slide_progress(now);
        match self.current.as_mut() {
            Some(current) if current.id() == id && current.phase() != Phase::Dismissing => {
                current.start_exit(now, progress);
                if let Some(handle) = self.timers.enter.take() {
                    scheduler.cancel(handle);
                }
                self.timers.remove =
                    Some(scheduler.schedule(self.timings.exit, TimerEvent::Remove(id).into()));
                true
            }
            _ => false,
        }
    }
}

fn fraction_of(elapsed: Duration, total: Duration) -> f32 {
    if total.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
}
