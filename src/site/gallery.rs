// SPDX-License-Identifier: MPL-2.0
//! Gallery items and their hover / press feedback state.

/// A project shown in the gallery grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryItem {
    /// Project name; shown as the card heading and quoted in notifications.
    pub title: &'static str,
    /// Localization key of the one-line caption.
    pub caption_key: &'static str,
}

pub const ITEMS: [GalleryItem; 6] = [
    GalleryItem {
        title: "Bridge Project",
        caption_key: "gallery-caption-bridge",
    },
    GalleryItem {
        title: "Harbor Pavilion",
        caption_key: "gallery-caption-harbor",
    },
    GalleryItem {
        title: "Riverside Library",
        caption_key: "gallery-caption-library",
    },
    GalleryItem {
        title: "Glass Atrium",
        caption_key: "gallery-caption-atrium",
    },
    GalleryItem {
        title: "Mountain Retreat",
        caption_key: "gallery-caption-retreat",
    },
    GalleryItem {
        title: "Urban Loft",
        caption_key: "gallery-caption-loft",
    },
];

/// Visual state of a single card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardState {
    #[default]
    Rest,
    Hovered,
    Pressed,
}

/// Hover and press tracking for the gallery grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    hovered: Option<usize>,
    pressed: [bool; ITEMS.len()],
}

impl Default for Gallery {
    fn default() -> Self {
        Self {
            hovered: None,
            pressed: [false; ITEMS.len()],
        }
    }
}

impl Gallery {
    #[must_use]
    pub fn items(&self) -> &'static [GalleryItem] {
        &ITEMS
    }

    pub fn hover(&mut self, index: usize) {
        if index < ITEMS.len() {
            self.hovered = Some(index);
        }
    }

    pub fn unhover(&mut self, index: usize) {
        if self.hovered == Some(index) {
            self.hovered = None;
        }
    }

    /// Marks the card pressed and returns its item, or `None` for an
    /// out-of-range index.
    pub fn press(&mut self, index: usize) -> Option<&'static GalleryItem> {
        let item = ITEMS.get(index)?;
        self.pressed[index] = true;
        Some(item)
    }

    pub fn release(&mut self, index: usize) {
        if let Some(pressed) = self.pressed.get_mut(index) {
            *pressed = false;
        }
    }

    #[must_use]
    pub fn is_pressed(&self, index: usize) -> bool {
        self.pressed.get(index).copied().unwrap_or(false)
    }

    /// Press feedback wins over hover.
    #[must_use]
    pub fn card_state(&self, index: usize) -> CardState {
        if self.is_pressed(index) {
            CardState::Pressed
        } else if self.hovered == Some(index) {
            CardState::Hovered
        } else {
            CardState::Rest
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn there_are_six_items_including_the_bridge() {
        assert_eq!(ITEMS.len(), 6);
        assert!(ITEMS.iter().any(|item| item.title == "Bridge Project"));
    }

    #[test]
    fn hover_moves_between_cards() {
        let mut gallery = Gallery::default();
        gallery.hover(1);
        gallery.hover(2);
        assert_eq!(gallery.card_state(1), CardState::Rest);
        assert_eq!(gallery.card_state(2), CardState::Hovered);

        gallery.unhover(1);
        assert_eq!(gallery.card_state(2), CardState::Hovered);
        gallery.unhover(2);
        assert_eq!(gallery.card_state(2), CardState::Rest);
    }

    #[test]
    fn press_overrides_hover_until_release() {
        let mut gallery = Gallery::default();
        gallery.hover(0);
        let item = gallery.press(0).expect("index in range");
        assert_eq!(item.title, "Bridge Project");
        assert_eq!(gallery.card_state(0), CardState::Pressed);

        gallery.release(0);
        assert_eq!(gallery.card_state(0), CardState::Hovered);
    }

    #[test]
    fn out_of_range_indices_are_ignored() {
        let mut gallery = Gallery::default();
        assert!(gallery.press(42).is_none());
        gallery.hover(42);
        gallery.release(42);
        assert!((0..ITEMS.len()).all(|i| gallery.card_state(i) == CardState::Rest));
    }
}
