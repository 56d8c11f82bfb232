// SPDX-License-Identifier: MPL-2.0
//! Scroll-triggered, one-shot reveal of page blocks.
//!
//! A block becomes revealed the first time at least 10% of its height lies
//! inside the observation area: the viewport shrunk by 50 px at the bottom.
//! It then fades in and slides up over the reveal duration and never hides
//! again.

use super::transition::{lerp, Easing, Transition};
use crate::ui::design_tokens::motion;
use std::time::Duration;

/// Minimum visible fraction of a block for it to be revealed.
pub const REVEAL_THRESHOLD: f32 = 0.1;

/// Bottom margin removed from the viewport before intersecting.
pub const ROOT_MARGIN_BOTTOM: f32 = 50.0;

/// Vertical extent of a block in content coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockRect {
    pub top: f32,
    pub height: f32,
}

impl BlockRect {
    #[must_use]
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Fraction of `block` inside the observation area of a viewport scrolled to
/// `viewport_top`.
#[must_use]
pub fn visible_fraction(block: BlockRect, viewport_top: f32, viewport_height: f32) -> f32 {
    if block.height <= 0.0 {
        return 0.0;
    }
    let area_bottom = viewport_top + (viewport_height - ROOT_MARGIN_BOTTOM).max(0.0);
    let overlap = block.bottom().min(area_bottom) - block.top.max(viewport_top);
    (overlap.max(0.0) / block.height).min(1.0)
}

/// Whether `block` crosses the reveal threshold.
#[must_use]
pub fn should_reveal(block: BlockRect, viewport_top: f32, viewport_height: f32) -> bool {
    let fraction = visible_fraction(block, viewport_top, viewport_height);
    fraction > 0.0 && fraction >= REVEAL_THRESHOLD
}

/// Reveal state of every block on the current page.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealTracker {
    revealed: Vec<Option<Transition>>,
    duration: Duration,
}

impl RevealTracker {
    #[must_use]
    pub fn new(block_count: usize, duration: Duration) -> Self {
        Self {
            revealed: vec![None; block_count],
            duration,
        }
    }

    /// Hides every block again, for a freshly opened page.
    pub fn reset(&mut self, block_count: usize) {
        self.revealed.clear();
        self.revealed.resize(block_count, None);
    }

    /// Reveals blocks that entered the observation area. Returns how many
    /// blocks were newly revealed.
    pub fn observe(
        &mut self,
        blocks: &[BlockRect],
        viewport_top: f32,
        viewport_height: f32,
        now: Duration,
    ) -> usize {
        let mut newly_revealed = 0;
        for (slot, block) in self.revealed.iter_mut().zip(blocks) {
            if slot.is_none() && should_reveal(*block, viewport_top, viewport_height) {
                *slot = Some(Transition::new(now, self.duration, Easing::Ease));
                newly_revealed += 1;
            }
        }
        newly_revealed
    }

    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        matches!(self.revealed.get(index), Some(Some(_)))
    }

    fn progress(&self, index: usize, now: Duration) -> f32 {
        match self.revealed.get(index) {
            Some(Some(transition)) => transition.progress(now),
            _ => 0.0,
        }
    }

    /// Opacity of block `index` at `now`, from 0.0 to 1.0.
    #[must_use]
    pub fn opacity(&self, index: usize, now: Duration) -> f32 {
        self.progress(index, now)
    }

    /// Downward offset of block `index` at `now`, from 20 px to 0.
    #[must_use]
    pub fn offset(&self, index: usize, now: Duration) -> f32 {
        lerp(motion::REVEAL_OFFSET, 0.0, self.progress(index, now))
    }

    /// Whether any reveal transition is still running.
    #[must_use]
    pub fn is_animating(&self, now: Duration) -> bool {
        self.revealed
            .iter()
            .flatten()
            .any(|transition| !transition.is_finished(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn bottom_margin_shrinks_the_observation_area() {
        // Viewport 0..600, observation area 0..550.
        let block = BlockRect::new(540.0, 100.0);
        assert!((visible_fraction(block, 0.0, 600.0) - 0.1).abs() < EPSILON);
        assert!(should_reveal(block, 0.0, 600.0));

        let lower = BlockRect::new(541.0, 100.0);
        assert!(!should_reveal(lower, 0.0, 600.0));
    }

    #[test]
    fn blocks_above_the_viewport_are_not_visible() {
        let block = BlockRect::new(0.0, 100.0);
        assert_eq!(visible_fraction(block, 200.0, 600.0), 0.0);
    }

    #[test]
    fn zero_height_blocks_never_reveal() {
        assert!(!should_reveal(BlockRect::new(10.0, 0.0), 0.0, 600.0));
    }

    #[test]
    fn reveal_is_one_shot() {
        let blocks = [BlockRect::new(100.0, 200.0), BlockRect::new(1200.0, 200.0)];
        let mut tracker = RevealTracker::new(blocks.len(), ms(600));

        assert_eq!(tracker.observe(&blocks, 0.0, 600.0, ms(0)), 1);
        assert!(tracker.is_revealed(0));
        assert!(!tracker.is_revealed(1));

        // Scrolling past the first block keeps it revealed.
        assert_eq!(tracker.observe(&blocks, 1000.0, 600.0, ms(100)), 1);
        assert!(tracker.is_revealed(0));
        assert!(tracker.is_revealed(1));
        assert_eq!(tracker.observe(&blocks, 0.0, 600.0, ms(200)), 0);
    }

    #[test]
    fn revealed_block_fades_and_slides_in() {
        let blocks = [BlockRect::new(0.0, 100.0)];
        let mut tracker = RevealTracker::new(1, ms(600));
        assert_eq!(tracker.opacity(0, ms(0)), 0.0);
        assert_eq!(tracker.offset(0, ms(0)), motion::REVEAL_OFFSET);

        tracker.observe(&blocks, 0.0, 600.0, ms(1000));
        assert!(tracker.is_animating(ms(1300)));
        let mid = tracker.opacity(0, ms(1300));
        assert!(mid > 0.0 && mid < 1.0);

        assert!((tracker.opacity(0, ms(1600)) - 1.0).abs() < EPSILON);
        assert!(tracker.offset(0, ms(1600)).abs() < EPSILON);
        assert!(!tracker.is_animating(ms(1600)));
    }

    #[test]
    fn reset_hides_every_block() {
        let blocks = [BlockRect::new(0.0, 100.0)];
        let mut tracker = RevealTracker::new(1, ms(600));
        tracker.observe(&blocks, 0.0, 600.0, ms(0));
        tracker.reset(3);
        assert!((0..3).all(|i| !tracker.is_revealed(i)));
    }
}
