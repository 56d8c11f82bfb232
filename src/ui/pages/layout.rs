// SPDX-License-Identifier: MPL-2.0
//! Deterministic vertical layout of page content.
//!
//! Pages are stacks of fixed-height rows, each holding one to three blocks
//! side by side. Fixed heights make block positions known without querying
//! the renderer, which the scroll reveal and anchor scrolling rely on.

use crate::site::buttons::ButtonId;
use crate::ui::design_tokens::spacing;
use crate::ui::state::reveal::BlockRect;

/// Padding above the first row and below the last one.
pub const PAGE_PADDING: f32 = spacing::XL;

/// Vertical gap between rows.
pub const ROW_SPACING: f32 = spacing::XL;

/// An in-page link such as `#team`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorLink {
    pub label_key: &'static str,
    pub href: &'static str,
}

/// Page banner with heading, tagline and call-to-action buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hero {
    pub title_key: &'static str,
    pub subtitle_key: &'static str,
    pub buttons: &'static [ButtonId],
    pub anchors: &'static [AnchorLink],
}

/// A unit of page content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    Hero(Hero),
    ContentBox {
        title_key: &'static str,
        body_key: &'static str,
    },
    FeatureCard {
        title_key: &'static str,
        body_key: &'static str,
    },
    TeamMember {
        name: &'static str,
        role_key: &'static str,
    },
    /// Index into the gallery items.
    GalleryItem(usize),
    ContactForm,
    LoginForm,
}

impl Block {
    /// Whether the block fades in when scrolled into view.
    #[must_use]
    pub fn is_revealable(&self) -> bool {
        matches!(
            self,
            Block::ContentBox { .. }
                | Block::FeatureCard { .. }
                | Block::TeamMember { .. }
                | Block::GalleryItem(_)
        )
    }
}

/// One row of blocks, optionally the target of an anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowSpec {
    pub anchor: Option<&'static str>,
    pub height: f32,
    pub blocks: &'static [Block],
}

/// A row placed at its content offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedRow {
    pub spec: &'static RowSpec,
    pub top: f32,
    /// Reveal index of the row's first revealable block.
    pub first_reveal: usize,
}

impl PlacedRow {
    /// Pairs each block with its reveal index, if it is revealable.
    pub fn blocks(&self) -> impl Iterator<Item = (&'static Block, Option<usize>)> {
        let mut next = self.first_reveal;
        self.spec.blocks.iter().map(move |block| {
            if block.is_revealable() {
                next += 1;
                (block, Some(next - 1))
            } else {
                (block, None)
            }
        })
    }
}

/// Offsets of every row and revealable block of a page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    rows: Vec<PlacedRow>,
    reveal_rects: Vec<BlockRect>,
    content_height: f32,
}

impl PageLayout {
    #[must_use]
    pub fn new(specs: &'static [RowSpec]) -> Self {
        let mut rows = Vec::with_capacity(specs.len());
        let mut reveal_rects = Vec::new();
        let mut top = PAGE_PADDING;

        for (index, spec) in specs.iter().enumerate() {
            if index > 0 {
                top += ROW_SPACING;
            }
            rows.push(PlacedRow {
                spec,
                top,
                first_reveal: reveal_rects.len(),
            });
            let revealable = spec.blocks.iter().filter(|block| block.is_revealable()).count();
            reveal_rects.extend(std::iter::repeat_n(
                BlockRect::new(top, spec.height),
                revealable,
            ));
            top += spec.height;
        }

        Self {
            rows,
            reveal_rects,
            content_height: top + PAGE_PADDING,
        }
    }

    #[must_use]
    pub fn rows(&self) -> &[PlacedRow] {
        &self.rows
    }

    /// Rectangles of the revealable blocks, by reveal index.
    #[must_use]
    pub fn reveal_rects(&self) -> &[BlockRect] {
        &self.reveal_rects
    }

    #[must_use]
    pub fn content_height(&self) -> f32 {
        self.content_height
    }

    /// Anchor ids with the top offset of their row.
    pub fn sections(&self) -> impl Iterator<Item = (&'static str, f32)> + '_ {
        self.rows
            .iter()
            .filter_map(|row| row.spec.anchor.map(|anchor| (anchor, row.top)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOX: Block = Block::ContentBox {
        title_key: "t",
        body_key: "b",
    };
    const HERO: Block = Block::Hero(Hero {
        title_key: "t",
        subtitle_key: "s",
        buttons: &[],
        anchors: &[],
    });
    static ROWS: [RowSpec; 3] = [
        RowSpec {
            anchor: Some("top"),
            height: 300.0,
            blocks: &[HERO],
        },
        RowSpec {
            anchor: Some("features"),
            height: 200.0,
            blocks: &[BOX, BOX, BOX],
        },
        RowSpec {
            anchor: None,
            height: 100.0,
            blocks: &[Block::ContactForm, BOX],
        },
    ];

    #[test]
    fn rows_are_stacked_with_padding_and_spacing() {
        let layout = PageLayout::new(&ROWS);
        let tops: Vec<f32> = layout.rows().iter().map(|row| row.top).collect();
        assert_eq!(tops, vec![PAGE_PADDING, PAGE_PADDING + 300.0 + ROW_SPACING, PAGE_PADDING + 500.0 + 2.0 * ROW_SPACING]);
        assert_eq!(layout.content_height(), 2.0 * PAGE_PADDING + 600.0 + 2.0 * ROW_SPACING);
    }

    #[test]
    fn only_revealable_blocks_get_rects() {
        let layout = PageLayout::new(&ROWS);
        assert_eq!(layout.reveal_rects().len(), 4);

        let last_row: Vec<Option<usize>> = layout.rows()[2].blocks().map(|(_, i)| i).collect();
        assert_eq!(last_row, vec![None, Some(3)]);
    }

    #[test]
    fn sections_report_row_tops() {
        let layout = PageLayout::new(&ROWS);
        let sections: Vec<_> = layout.sections().collect();
        assert_eq!(sections, vec![("top", PAGE_PADDING), ("features", PAGE_PADDING + 300.0 + ROW_SPACING)]);
    }
}
