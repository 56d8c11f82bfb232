// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily in the top-right corner to report the
//! outcome of form submissions and gallery actions without blocking
//! interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with its kind and phase
//! - [`manager`] - `Manager` owning the single displayed toast and its timers
//! - [`style`] - Kind-to-colors table, registered once per process
//! - [`toast`] - Toast widget component for rendering the notification
//!
//! # Usage
//!
//! ```
//! use iced_showcase::application::port::timer::ManualScheduler;
//! use iced_showcase::ui::notifications::{Kind, Manager, TimerEvent};
//!
//! let mut scheduler = ManualScheduler::<TimerEvent>::new();
//! let mut manager = Manager::new();
//!
//! manager.present(&mut scheduler, "Saved", Kind::Success);
//! assert_eq!(manager.visible_count(), 1);
//! ```
//!
//! # Design Considerations
//!
//! - One toast at a time: presenting evicts the current one without animation
//! - Entry tick after 100ms, auto-dismiss after 5s, 300ms exit slide
//! - Timer events are tagged by notification id; stale events are no-ops

pub mod manager;
pub mod notification;
pub mod style;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, NotificationTimings, TimerEvent};
pub use notification::{Kind, Notification, NotificationId, Phase};
pub use style::{style_table, ToastStyle};
pub use toast::Toast;
