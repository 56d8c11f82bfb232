// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Animation state kept apart from the App struct: easing curves, the
//! scroll reveal tracker and page scrolling.

pub mod reveal;
pub mod scroll;
pub mod transition;

// Re-export commonly used types for convenience
pub use reveal::{BlockRect, RevealTracker};
pub use scroll::{ScrollState, SmoothScroll};
pub use transition::{Easing, Transition};
