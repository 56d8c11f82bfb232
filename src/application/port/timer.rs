// SPDX-License-Identifier: MPL-2.0
//! Timer port definition.
//!
//! Every delayed behavior in the application (toast entry/exit, auto-dismiss,
//! simulated login latency, button loading reset, gallery press feedback) is
//! expressed as an event scheduled against a [`Scheduler`]. The event is
//! delivered back to its owner once the delay elapses, unless the returned
//! [`TimerHandle`] was cancelled first.
//!
//! Two adapters exist:
//! - [`ManualScheduler`] - deterministic virtual clock, advanced explicitly.
//!   Used by tests and headless drivers.
//! - `app::scheduler::TaskScheduler` - wraps tokio sleeps in abortable
//!   `iced::Task`s for the running application.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};
use std::time::Duration;

/// Identifies one scheduled event so it can be cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

impl TimerHandle {
    /// Wraps a raw sequence number.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw sequence number.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Port for scheduling delayed, cancellable events.
///
/// Time is measured as a [`Duration`] since the scheduler's origin, which keeps
/// the port independent from wall-clock `Instant`s and lets the virtual
/// scheduler drive time by hand.
pub trait Scheduler {
    /// Event type delivered when a timer fires.
    type Event;

    /// Current time since the scheduler's origin.
    fn now(&self) -> Duration;

    /// Schedules `event` to fire once after `delay`.
    fn schedule(&mut self, delay: Duration, event: Self::Event) -> TimerHandle;

    /// Cancels a pending timer. Cancelling a timer that already fired or was
    /// already cancelled is a no-op.
    fn cancel(&mut self, handle: TimerHandle);
}

// =============================================================================
// ManualScheduler
// =============================================================================

#[derive(Debug)]
struct Pending<E> {
    due: Duration,
    handle: TimerHandle,
    event: E,
}

impl<E> PartialEq for Pending<E> {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.handle == other.handle
    }
}

impl<E> Eq for Pending<E> {}

impl<E> PartialOrd for Pending<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E> Ord for Pending<E> {
    // Reversed so the max-heap pops the earliest due time first; ties break
    // on scheduling order.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due
            .cmp(&self.due)
            .then_with(|| other.handle.cmp(&self.handle))
    }
}

/// Deterministic scheduler driven by explicit calls to [`advance`](Self::advance).
///
/// Events fire in order of due time; events due at the same instant fire in
/// the order they were scheduled.
#[derive(Debug)]
pub struct ManualScheduler<E> {
    now: Duration,
    next_handle: u64,
    pending: BinaryHeap<Pending<E>>,
    cancelled: HashSet<TimerHandle>,
}

impl<E> Default for ManualScheduler<E> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            next_handle: 0,
            pending: BinaryHeap::new(),
            cancelled: HashSet::new(),
        }
    }
}

impl<E> ManualScheduler<E> {
    /// Creates a scheduler at time zero with nothing pending.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of timers that are scheduled and not cancelled.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending
            .iter()
            .filter(|p| !self.cancelled.contains(&p.handle))
            .count()
    }

    /// Due time of the earliest live timer, if any.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.pending
            .iter()
            .filter(|p| !self.cancelled.contains(&p.handle))
            .map(|p| p.due)
            .min()
    }

    /// Pops the next live event due at or before `deadline`, moving the clock
    /// to its due time.
    pub fn pop_due(&mut self, deadline: Duration) -> Option<E> {
        while let Some(top) = self.pending.peek() {
            if top.due > deadline {
                return None;
            }
            let Some(pending) = self.pending.pop() else {
                return None;
            };
            if self.cancelled.remove(&pending.handle) {
                continue;
            }
            self.now = self.now.max(pending.due);
            return Some(pending.event);
        }
        None
    }

    /// Advances the clock by `by`, returning every event that became due, in
    /// firing order.
    ///
    /// Events scheduled while handling the returned events are not included;
    /// callers that need cascading delivery should use [`pop_due`](Self::pop_due).
    pub fn advance(&mut self, by: Duration) -> Vec<E> {
        let deadline = self.now + by;
        let mut fired = Vec::new();
        while let Some(event) = self.pop_due(deadline) {
            fired.push(event);
        }
        self.now = deadline;
        fired
    }

    /// Moves the clock forward to `deadline` without firing anything.
    ///
    /// Intended for use after draining with [`pop_due`](Self::pop_due).
    pub fn set_now(&mut self, deadline: Duration) {
        self.now = self.now.max(deadline);
    }
}

impl<E> Scheduler for ManualScheduler<E> {
    type Event = E;

    fn now(&self) -> Duration {
        self.now
    }

    fn schedule(&mut self, delay: Duration, event: E) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.pending.push(Pending {
            due: self.now + delay,
            handle,
            event,
        });
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if self.pending.iter().any(|p| p.handle == handle) {
            self.cancelled.insert(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn events_fire_in_due_order() {
        let mut scheduler = ManualScheduler::new();
        scheduler.schedule(ms(300), "late");
        scheduler.schedule(ms(100), "early");

        assert_eq!(scheduler.advance(ms(500)), vec!["early", "late"]);
        assert_eq!(scheduler.now(), ms(500));
    }

    #[test]
    fn ties_fire_in_scheduling_order() {
        let mut scheduler = ManualScheduler::new();
        scheduler.schedule(ms(100), 1);
        scheduler.schedule(ms(100), 2);
        scheduler.schedule(ms(100), 3);

        assert_eq!(scheduler.advance(ms(100)), vec![1, 2, 3]);
    }

    #[test]
    fn events_not_yet_due_stay_pending() {
        let mut scheduler = ManualScheduler::new();
        scheduler.schedule(ms(1000), ());

        assert!(scheduler.advance(ms(999)).is_empty());
        assert_eq!(scheduler.pending_count(), 1);
        assert_eq!(scheduler.advance(ms(1)).len(), 1);
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn cancelled_events_never_fire() {
        let mut scheduler = ManualScheduler::new();
        let handle = scheduler.schedule(ms(100), "cancelled");
        scheduler.schedule(ms(200), "kept");
        scheduler.cancel(handle);

        assert_eq!(scheduler.pending_count(), 1);
        assert_eq!(scheduler.advance(ms(300)), vec!["kept"]);
    }

    #[test]
    fn cancelling_a_fired_timer_is_a_noop() {
        let mut scheduler = ManualScheduler::new();
        let handle = scheduler.schedule(ms(10), ());
        scheduler.advance(ms(10));
        scheduler.cancel(handle);

        assert!(scheduler.cancelled.is_empty());
    }

    #[test]
    fn pop_due_moves_clock_to_event_time() {
        let mut scheduler = ManualScheduler::new();
        scheduler.schedule(ms(250), ());

        assert!(scheduler.pop_due(ms(1000)).is_some());
        assert_eq!(scheduler.now(), ms(250));
        assert_eq!(scheduler.next_due(), None);
    }
}
