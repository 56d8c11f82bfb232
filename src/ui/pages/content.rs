// SPDX-License-Identifier: MPL-2.0
//! Row definitions of the five pages.

use super::layout::{AnchorLink, Block, Hero, RowSpec};
use crate::site::buttons::ButtonId;
use crate::site::navigation::Page;

const HERO_HEIGHT: f32 = 340.0;
const BANNER_HEIGHT: f32 = 220.0;
const CARD_HEIGHT: f32 = 220.0;
const BOX_HEIGHT: f32 = 190.0;
const MEMBER_HEIGHT: f32 = 200.0;
const GALLERY_ROW_HEIGHT: f32 = 250.0;

static HOME: [RowSpec; 4] = [
    RowSpec {
        anchor: Some("top"),
        height: HERO_HEIGHT,
        blocks: &[Block::Hero(Hero {
            title_key: "home-hero-title",
            subtitle_key: "home-hero-subtitle",
            buttons: &[ButtonId::GetStarted, ButtonId::ViewGallery],
            anchors: &[AnchorLink {
                label_key: "home-explore-link",
                href: "#features",
            }],
        })],
    },
    RowSpec {
        anchor: Some("features"),
        height: CARD_HEIGHT,
        blocks: &[
            Block::FeatureCard {
                title_key: "feature-design-title",
                body_key: "feature-design-body",
            },
            Block::FeatureCard {
                title_key: "feature-build-title",
                body_key: "feature-build-body",
            },
            Block::FeatureCard {
                title_key: "feature-care-title",
                body_key: "feature-care-body",
            },
        ],
    },
    RowSpec {
        anchor: None,
        height: BOX_HEIGHT,
        blocks: &[Block::ContentBox {
            title_key: "home-approach-title",
            body_key: "home-approach-body",
        }],
    },
    RowSpec {
        anchor: Some("studio"),
        height: BOX_HEIGHT,
        blocks: &[Block::ContentBox {
            title_key: "home-studio-title",
            body_key: "home-studio-body",
        }],
    },
];

static ABOUT: [RowSpec; 5] = [
    RowSpec {
        anchor: Some("top"),
        height: BANNER_HEIGHT,
        blocks: &[Block::Hero(Hero {
            title_key: "about-hero-title",
            subtitle_key: "about-hero-subtitle",
            buttons: &[ButtonId::JoinTeam],
            anchors: &[AnchorLink {
                label_key: "about-team-link",
                href: "#team",
            }],
        })],
    },
    RowSpec {
        anchor: Some("story"),
        height: BOX_HEIGHT,
        blocks: &[Block::ContentBox {
            title_key: "about-story-title",
            body_key: "about-story-body",
        }],
    },
    RowSpec {
        anchor: None,
        height: BOX_HEIGHT,
        blocks: &[Block::ContentBox {
            title_key: "about-mission-title",
            body_key: "about-mission-body",
        }],
    },
    RowSpec {
        anchor: Some("team"),
        height: MEMBER_HEIGHT,
        blocks: &[
            Block::TeamMember {
                name: "Elena Marsh",
                role_key: "team-role-principal",
            },
            Block::TeamMember {
                name: "Tomás Reyes",
                role_key: "team-role-engineer",
            },
            Block::TeamMember {
                name: "Priya Nair",
                role_key: "team-role-interiors",
            },
        ],
    },
    RowSpec {
        anchor: None,
        height: MEMBER_HEIGHT,
        blocks: &[
            Block::TeamMember {
                name: "Jonas Berg",
                role_key: "team-role-project",
            },
            Block::TeamMember {
                name: "Aiko Tanaka",
                role_key: "team-role-landscape",
            },
            Block::TeamMember {
                name: "Samuel Okafor",
                role_key: "team-role-sustainability",
            },
        ],
    },
];

static GALLERY: [RowSpec; 3] = [
    RowSpec {
        anchor: Some("top"),
        height: BANNER_HEIGHT,
        blocks: &[Block::Hero(Hero {
            title_key: "gallery-hero-title",
            subtitle_key: "gallery-hero-subtitle",
            buttons: &[],
            anchors: &[],
        })],
    },
    RowSpec {
        anchor: None,
        height: GALLERY_ROW_HEIGHT,
        blocks: &[
            Block::GalleryItem(0),
            Block::GalleryItem(1),
            Block::GalleryItem(2),
        ],
    },
    RowSpec {
        anchor: None,
        height: GALLERY_ROW_HEIGHT,
        blocks: &[
            Block::GalleryItem(3),
            Block::GalleryItem(4),
            Block::GalleryItem(5),
        ],
    },
];

static CONTACT: [RowSpec; 3] = [
    RowSpec {
        anchor: Some("top"),
        height: BANNER_HEIGHT,
        blocks: &[Block::Hero(Hero {
            title_key: "contact-hero-title",
            subtitle_key: "contact-hero-subtitle",
            buttons: &[],
            anchors: &[AnchorLink {
                label_key: "contact-form-link",
                href: "#message",
            }],
        })],
    },
    RowSpec {
        anchor: None,
        height: BOX_HEIGHT,
        blocks: &[Block::ContentBox {
            title_key: "contact-visit-title",
            body_key: "contact-visit-body",
        }],
    },
    RowSpec {
        anchor: Some("message"),
        height: 560.0,
        blocks: &[Block::ContactForm],
    },
];

static LOGIN: [RowSpec; 2] = [
    RowSpec {
        anchor: Some("top"),
        height: BANNER_HEIGHT,
        blocks: &[Block::Hero(Hero {
            title_key: "login-hero-title",
            subtitle_key: "login-hero-subtitle",
            buttons: &[],
            anchors: &[],
        })],
    },
    RowSpec {
        anchor: None,
        height: 340.0,
        blocks: &[Block::LoginForm],
    },
];

/// Rows of `page`, top to bottom.
#[must_use]
pub fn rows(page: Page) -> &'static [RowSpec] {
    match page {
        Page::Home => &HOME,
        Page::About => &ABOUT,
        Page::Gallery => &GALLERY,
        Page::Contact => &CONTACT,
        Page::Login => &LOGIN,
    }
}
