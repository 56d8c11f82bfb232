// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the site pages, toasts and dialogs.
//!
//! Colors, spacing, sizes, type scale, borders, radii, shadows and the motion
//! distances used to emulate CSS transforms. Widgets and styles read these
//! constants instead of hard-coding values; the scales are checked at
//! compile time at the bottom of this file.
//!
//! ```
//! use iced_showcase::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let backdrop = Color {
//!     a: opacity::OVERLAY_MEDIUM,
//!     ..palette::BLACK
//! };
//! assert!(backdrop.a < 1.0);
//! assert_eq!(spacing::MD, 16.0);
//! ```

use iced::Color;

// --- color palette

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors (deep red scale)
    pub const BRAND_400: Color = Color::from_rgb(0.75, 0.15, 0.15);
    pub const BRAND_500: Color = Color::from_rgb(0.545, 0.0, 0.0); // #8b0000
    pub const BRAND_600: Color = Color::from_rgb(0.42, 0.0, 0.0);

    // Toast backgrounds
    pub const TOAST_ERROR_BG: Color = Color::from_rgb(0.545, 0.0, 0.0); // #8b0000
    pub const TOAST_SUCCESS_BG: Color = Color::from_rgb(0.176, 0.353, 0.153); // #2d5a27
    pub const TOAST_INFO_BG: Color = Color::from_rgb(0.102, 0.102, 0.102); // #1a1a1a

    // Toast accent borders
    pub const TOAST_ERROR_BORDER: Color = Color::from_rgb(1.0, 0.267, 0.267); // #ff4444
    pub const TOAST_SUCCESS_BORDER: Color = Color::from_rgb(0.298, 0.686, 0.314); // #4caf50
    pub const TOAST_INFO_BORDER: Color = BRAND_500;
}

// --- opacity scale

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_SOFT: f32 = 0.3;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Surface background - Semi-transparent panels and containers
    pub const SURFACE: f32 = 0.95;
}

// --- spacing scale (8px baseline grid)

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// --- sizing scale

pub mod sizing {
    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const INPUT_HEIGHT: f32 = 40.0;

    // Toast
    pub const TOAST_MAX_WIDTH: f32 = 400.0;
    /// Distance from the window's top and right edges.
    pub const TOAST_MARGIN: f32 = 20.0;
    pub const TOAST_CLOSE_BUTTON: f32 = 24.0;

    /// Loading spinner shown inside busy buttons.
    pub const SPINNER_SM: f32 = 16.0;

    /// Team member initials badge.
    pub const AVATAR: f32 = 64.0;

    // Page content
    pub const CONTENT_MAX_WIDTH: f32 = 960.0;
    pub const FORM_MAX_WIDTH: f32 = 520.0;
    pub const NAVBAR_HEIGHT: f32 = 64.0;
}

// --- typography scale

pub mod typography {
    //! Font size scale.
    //!
    //! - Titles: Large headings (hero, page titles)
    //! - Body: Primary content text
    //! - Caption: Secondary, supporting text

    /// Hero heading on the home page
    pub const DISPLAY: f32 = 40.0;

    /// Large title - Page headings
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - Brand name, card titles
    pub const TITLE_MD: f32 = 20.0;

    /// Small title - Section headers
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - Form inputs, emphasis text
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - Hints, small info
    pub const CAPTION: f32 = 12.0;

    /// Toast close glyph
    pub const CLOSE_GLYPH: f32 = 20.0;
}

// --- border scale

pub mod border {
    /// Thin border - Subtle separators, input fields
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Emphasis borders
    pub const WIDTH_MD: f32 = 2.0;

    /// Toast accent stripe
    pub const WIDTH_ACCENT: f32 = 4.0;
}

// --- border radius scale

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 5.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// --- shadow definitions

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    /// Toast drop shadow (0 4px 20px rgba(0,0,0,0.3))
    pub const TOAST: Shadow = Shadow {
        color: Color {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 0.3,
        },
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 20.0,
    };
}

// --- motion

pub mod motion {
    /// Initial downward offset of a block waiting to be revealed.
    pub const REVEAL_OFFSET: f32 = 20.0;

    /// Upward lift of a hovered gallery item.
    pub const GALLERY_HOVER_LIFT: f32 = 10.0;

    /// Scale of a hovered gallery item.
    pub const GALLERY_HOVER_SCALE: f32 = 1.02;

    /// Scale of a gallery item while pressed.
    pub const GALLERY_PRESS_SCALE: f32 = 0.95;
}

// --- compile-time validation

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Typography validation
    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);
    assert!(border::WIDTH_ACCENT > border::WIDTH_MD);

    // Motion validation
    assert!(motion::GALLERY_PRESS_SCALE < 1.0);
    assert!(motion::GALLERY_HOVER_SCALE > 1.0);
};
