// SPDX-License-Identifier: MPL-2.0
//! Data-driven color treatment for toasts.
//!
//! The table maps each [`Kind`] to its background, accent border and text
//! colors. It is built once per process and shared by every manager.

use super::notification::Kind;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Colors applied to one toast kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToastStyle {
    pub background: Color,
    pub border: Color,
    pub text: Color,
}

/// Lookup table from kind to toast colors.
#[derive(Debug, Clone)]
pub struct StyleTable {
    entries: [(Kind, ToastStyle); 3],
}

impl StyleTable {
    fn build() -> Self {
        Self {
            entries: [
                (
                    Kind::Info,
                    ToastStyle {
                        background: palette::TOAST_INFO_BG,
                        border: palette::TOAST_INFO_BORDER,
                        text: palette::WHITE,
                    },
                ),
                (
                    Kind::Success,
                    ToastStyle {
                        background: palette::TOAST_SUCCESS_BG,
                        border: palette::TOAST_SUCCESS_BORDER,
                        text: palette::WHITE,
                    },
                ),
                (
                    Kind::Error,
                    ToastStyle {
                        background: palette::TOAST_ERROR_BG,
                        border: palette::TOAST_ERROR_BORDER,
                        text: palette::WHITE,
                    },
                ),
            ],
        }
    }

    /// Returns the colors for `kind`.
    #[must_use]
    pub fn get(&self, kind: Kind) -> ToastStyle {
        self.entries
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, style)| *style)
            .unwrap_or(self.entries[0].1)
    }
}

static TABLE: OnceLock<StyleTable> = OnceLock::new();
static REGISTRATIONS: AtomicUsize = AtomicUsize::new(0);

/// Returns the process-wide style table, registering it on first use.
pub fn style_table() -> &'static StyleTable {
    TABLE.get_or_init(|| {
        REGISTRATIONS.fetch_add(1, Ordering::Relaxed);
        tracing::debug!("registered toast style table");
        StyleTable::build()
    })
}

/// Number of times the style table has been built in this process (0 or 1).
#[must_use]
pub fn registration_count() -> usize {
    REGISTRATIONS.load(Ordering::Relaxed)
}
