// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`timer`]: Delayed, cancellable event scheduling
//!
//! # Design Notes
//!
//! - Ports use plain std types only (no Iced handles)
//! - No `async fn` - the iced adapter turns scheduled events into `Task`s

pub mod timer;

pub use timer::{ManualScheduler, Scheduler, TimerHandle};
