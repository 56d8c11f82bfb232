// SPDX-License-Identifier: MPL-2.0
//! Page scroll position and smooth anchor scrolling.

use super::transition::{lerp, Easing, Transition};
use crate::site::anchors;
use std::time::Duration;

/// An in-flight smooth scroll between two offsets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothScroll {
    from: f32,
    to: f32,
    transition: Transition,
}

impl SmoothScroll {
    #[must_use]
    pub fn new(from: f32, to: f32, now: Duration, duration: Duration) -> Self {
        Self {
            from,
            to,
            transition: Transition::new(now, duration, Easing::EaseInOut),
        }
    }

    #[must_use]
    pub fn offset_at(&self, now: Duration) -> f32 {
        lerp(self.from, self.to, self.transition.progress(now))
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    #[must_use]
    pub fn is_finished(&self, now: Duration) -> bool {
        self.transition.is_finished(now)
    }
}

/// Scroll metrics of the page scrollable.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollState {
    offset: f32,
    viewport_height: f32,
    content_height: f32,
    animation: Option<SmoothScroll>,
}

impl ScrollState {
    #[must_use]
    pub fn new(viewport_height: f32) -> Self {
        Self {
            viewport_height,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    #[must_use]
    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    /// Records metrics reported by the scrollable.
    pub fn on_scroll(&mut self, offset: f32, viewport_height: f32, content_height: f32) {
        self.offset = offset;
        self.viewport_height = viewport_height;
        self.content_height = content_height;
    }

    pub fn set_viewport_height(&mut self, viewport_height: f32) {
        self.viewport_height = viewport_height;
    }

    pub fn set_content_height(&mut self, content_height: f32) {
        self.content_height = content_height;
    }

    /// Back to the top with no animation, for a freshly opened page.
    pub fn reset(&mut self) {
        self.offset = 0.0;
        self.animation = None;
    }

    /// Starts a smooth scroll bringing `section_top` to the top of the
    /// viewport. Returns the clamped destination offset.
    pub fn scroll_to_section(&mut self, section_top: f32, now: Duration, duration: Duration) -> f32 {
        let target = anchors::scroll_target(section_top, self.viewport_height, self.content_height);
        self.animation = Some(SmoothScroll::new(self.offset, target, now, duration));
        target
    }

    /// Advances the animation; returns the offset to apply, if animating.
    pub fn tick(&mut self, now: Duration) -> Option<f32> {
        let animation = self.animation?;
        let offset = animation.offset_at(now);
        self.offset = offset;
        if animation.is_finished(now) {
            self.animation = None;
        }
        Some(offset)
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }
}
