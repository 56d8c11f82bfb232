// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for all UI components.

pub mod button;
pub mod container;

pub use container::with_alpha;
