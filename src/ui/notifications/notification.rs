// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct, its `Kind` and the
//! `Phase` it moves through while on screen.

use std::time::Duration;

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Classification of a notification, driving its color treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Kind {
    /// Neutral message on a dark surface.
    #[default]
    Info,
    /// Operation completed (green tones).
    Success,
    /// Validation or credential failure (red tones).
    Error,
}

impl Kind {
    /// All kinds, in style-table order.
    pub const ALL: [Kind; 3] = [Kind::Info, Kind::Success, Kind::Error];

    /// Stable lowercase name, used in logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Info => "info",
            Kind::Success => "success",
            Kind::Error => "error",
        }
    }
}

/// Visibility phase of a displayed notification.
///
/// A removed notification is simply no longer held by the manager, so there
/// is no `Removed` variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Attached off-screen, waiting for the entry tick.
    Entering,
    /// At rest in the corner.
    Visible,
    /// Sliding out; removal is scheduled.
    Dismissing,
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    kind: Kind,
    /// Already-localized text.
    message: String,
    phase: Phase,
    /// Scheduler time at which `phase` started.
    phase_since: Duration,
    /// Slide progress at which the exit started.
    exit_from: f32,
}

impl Notification {
    /// Creates a notification in the `Entering` phase.
    pub fn new(kind: Kind, message: impl Into<String>, now: Duration) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            message: message.into(),
            phase: Phase::Entering,
            phase_since: now,
            exit_from: 1.0,
        }
    }

    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns when the current phase started.
    #[must_use]
    pub fn phase_since(&self) -> Duration {
        self.phase_since
    }

    /// Slide progress the exit animation starts from, 1.0 when the toast
    /// was fully shown.
    #[must_use]
    pub fn exit_from(&self) -> f32 {
        self.exit_from
    }

    /// Moves to `phase`, recording the transition time.
    pub(super) fn set_phase(&mut self, phase: Phase, now: Duration) {
        self.phase = phase;
        self.phase_since = now;
    }

    /// Enters `Dismissing`, sliding out from `progress` rather than from
    /// the resting position.
    pub(super) fn start_exit(&mut self, now: Duration, progress: f32) {
        self.set_phase(Phase::Dismissing, now);
        self.exit_from = progress.clamp(0.0, 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::new(Kind::Info, "test", Duration::ZERO);
        let n2 = Notification::new(Kind::Info, "test", Duration::ZERO);
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn default_kind_is_info() {
        assert_eq!(Kind::default(), Kind::Info);
    }

    #[test]
    fn new_notification_starts_entering() {
        let now = Duration::from_millis(42);
        let notification = Notification::new(Kind::Success, "saved", now);

        assert_eq!(notification.phase(), Phase::Entering);
        assert_eq!(notification.phase_since(), now);
        assert_eq!(notification.exit_from(), 1.0);
        assert_eq!(notification.message(), "saved");
    }

    #[test]
    fn set_phase_records_transition_time() {
        let mut notification = Notification::new(Kind::Error, "oops", Duration::ZERO);
        notification.set_phase(Phase::Dismissing, Duration::from_millis(900));

        assert_eq!(notification.phase(), Phase::Dismissing);
        assert_eq!(notification.phase_since(), Duration::from_millis(900));
    }

    #[test]
    fn start_exit_keeps_clamped_progress() {
        let mut notification = Notification::new(Kind::Info, "bye", Duration::ZERO);
        notification.start_exit(Duration::from_millis(30), 0.1);
        assert_eq!(notification.phase(), Phase::Dismissing);
        assert_eq!(notification.exit_from(), 0.1);

        notification.start_exit(Duration::from_millis(40), 2.0);
        assert_eq!(notification.exit_from(), 1.0);
    }

    #[test]
    fn kind_names_are_lowercase() {
        let names: Vec<_> = Kind::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(names, vec!["info", "success", "error"]);
    }
}
