// SPDX-License-Identifier: MPL-2.0
//! In-page anchor resolution for smooth scrolling.

/// Extracts the section id from an in-page href (`#features` -> `features`).
///
/// A bare `#` or an href that is not in-page yields `None`.
#[must_use]
pub fn section_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Finds the top offset of the section targeted by `href`.
pub fn resolve<'a>(
    href: &str,
    sections: impl IntoIterator<Item = (&'a str, f32)>,
) -> Option<f32> {
    let id = section_id(href)?;
    sections
        .into_iter()
        .find_map(|(section, top)| (section == id).then_some(top))
}

/// Scroll offset that aligns `section_top` with the top of the viewport,
/// clamped to the scrollable range.
#[must_use]
pub fn scroll_target(section_top: f32, viewport_height: f32, content_height: f32) -> f32 {
    let max_offset = (content_height - viewport_height).max(0.0);
    section_top.clamp(0.0, max_offset)
}
