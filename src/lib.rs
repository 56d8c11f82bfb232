// SPDX-License-Identifier: MPL-2.0
//! `iced_showcase` is a small studio website rendered as an Iced desktop app.
//!
//! It shows how a multi-page site with forms, a project gallery and toast
//! notifications maps onto the Elm architecture: the site state lives in
//! [`site`], time-based behavior goes through the scheduler port in
//! [`application`], and [`ui`] renders it.

pub mod app;
pub mod application;
pub mod config;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod site;
pub mod ui;
