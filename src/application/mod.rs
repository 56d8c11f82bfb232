// SPDX-License-Identifier: MPL-2.0
//! Application layer - ports that decouple behavior from the runtime.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - The site controller and the notification manager depend on ports only
//! - The iced application provides the runtime adapters
//! - Tests drive the same code through the deterministic adapters
//!
//! # Example
//!
//! ```
//! use iced_showcase::application::port::timer::{ManualScheduler, Scheduler};
//! use std::time::Duration;
//!
//! let mut scheduler = ManualScheduler::new();
//! scheduler.schedule(Duration::from_millis(300), "exit");
//! assert_eq!(scheduler.advance(Duration::from_millis(300)), vec!["exit"]);
//! ```

pub mod port;
