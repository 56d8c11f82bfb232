// SPDX-License-Identifier: MPL-2.0
//! [`Scheduler`] adapter backed by iced tasks.
//!
//! Each scheduled event becomes an abortable [`Task`] sleeping on the tokio
//! timer. Tasks are collected until the next [`TaskScheduler::drain`], which
//! hands them to the runtime as a single batch. When a task completes, the
//! app routes the resulting [`Message::Timer`] back through
//! [`TaskScheduler::fired`] before applying the event.

use super::Message;
use crate::application::port::timer::{Scheduler, TimerHandle};
use crate::site::SiteTimer;
use iced::task::Handle;
use iced::Task;
use std::collections::HashMap;
use std::time::{Duration, Instant};

pub struct TaskScheduler {
    origin: Instant,
    next_handle: u64,
    queued: Vec<Task<Message>>,
    running: HashMap<TimerHandle, Handle>,
}

impl std::fmt::Debug for TaskScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskScheduler")
            .field("queued", &self.queued.len())
            .field("running", &self.running.len())
            .finish()
    }
}

impl Default for TaskScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            next_handle: 0,
            queued: Vec::new(),
            running: HashMap::new(),
        }
    }

    /// Converts a runtime instant to scheduler time.
    #[must_use]
    pub fn elapsed_at(&self, instant: Instant) -> Duration {
        instant.saturating_duration_since(self.origin)
    }

    /// Takes every task scheduled since the last drain.
    pub fn drain(&mut self) -> Task<Message> {
        if self.queued.is_empty() {
            return Task::none();
        }
        Task::batch(std::mem::take(&mut self.queued))
    }

    /// Forgets a timer whose task completed. Returns `false` when the timer
    /// had been cancelled in the meantime, in which case the event must be
    /// dropped.
    pub fn fired(&mut self, handle: TimerHandle) -> bool {
        self.running.remove(&handle).is_some()
    }

    /// Number of timers started and not yet fired or cancelled.
    #[must_use]
    pub fn running_count(&self) -> usize {
        self.running.len()
    }
}

impl Scheduler for TaskScheduler {
    type Event = SiteTimer;

    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn schedule(&mut self, delay: Duration, event: SiteTimer) -> TimerHandle {
        let handle = TimerHandle::from_raw(self.next_handle);
        self.next_handle += 1;

        let (task, abort) = Task::perform(
            async move {
                tokio::time::sleep(delay).await;
                (handle, event)
            },
            |(handle, event)| Message::Timer(handle, event),
        )
        .abortable();

        self.queued.push(task);
        self.running.insert(handle, abort);
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if let Some(abort) = self.running.remove(&handle) {
            abort.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_are_unique_and_tracked() {
        let mut scheduler = TaskScheduler::new();
        let first = scheduler.schedule(Duration::from_millis(10), SiteTimer::WelcomeAlert);
        let second = scheduler.schedule(Duration::from_millis(10), SiteTimer::WelcomeAlert);
        assert_ne!(first, second);
        assert_eq!(scheduler.running_count(), 2);
    }

    #[test]
    fn cancelled_timer_is_not_reported_as_fired() {
        let mut scheduler = TaskScheduler::new();
        let handle = scheduler.schedule(Duration::from_millis(10), SiteTimer::WelcomeAlert);
        scheduler.cancel(handle);
        assert!(!scheduler.fired(handle));
        assert_eq!(scheduler.running_count(), 0);
    }

    #[test]
    fn fired_timer_is_forgotten() {
        let mut scheduler = TaskScheduler::new();
        let handle = scheduler.schedule(Duration::from_millis(10), SiteTimer::WelcomeAlert);
        assert!(scheduler.fired(handle));
        assert!(!scheduler.fired(handle));
    }

    #[test]
    fn elapsed_at_never_goes_negative() {
        let scheduler = TaskScheduler::new();
        let Some(before) = scheduler.origin.checked_sub(Duration::from_millis(5)) else {
            return;
        };
        assert_eq!(scheduler.elapsed_at(before), Duration::ZERO);
    }
}
