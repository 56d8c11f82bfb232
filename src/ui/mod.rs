// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Views
//!
//! - [`navbar`] - Page links with the active page highlighted
//! - [`pages`] - Scrollable page content (hero, cards, gallery, forms)
//! - [`notifications`] - Toast notification system for user feedback
//! - [`alert`] - Modal dialog with a single acknowledge button
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Animation state (scroll reveal, smooth scroll, transitions)
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod alert;
pub mod design_tokens;
pub mod navbar;
pub mod notifications;
pub mod pages;
pub mod state;
pub mod styles;
pub mod theming;
pub mod widgets;
