// SPDX-License-Identifier: MPL-2.0
//! Page routing and active-link marking for the navigation bar.
//!
//! A link is active when its href is exactly the file name of the current
//! page. The file name is the last `/` segment of the location, and an empty
//! segment means `index.html`.

use std::fmt;

/// File name used when the location ends with `/` or is empty.
pub const INDEX_FILE: &str = "index.html";

/// The pages reachable from the navigation bar, in link order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    About,
    Gallery,
    Contact,
    Login,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::About,
        Page::Gallery,
        Page::Contact,
        Page::Login,
    ];

    /// The href of this page's navigation link.
    #[must_use]
    pub fn href(self) -> &'static str {
        match self {
            Page::Home => INDEX_FILE,
            Page::About => "about.html",
            Page::Gallery => "gallery.html",
            Page::Contact => "contact.html",
            Page::Login => "login.html",
        }
    }

    /// Localization key of the navigation label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Page::Home => "nav-home",
            Page::About => "nav-about",
            Page::Gallery => "nav-gallery",
            Page::Contact => "nav-contact",
            Page::Login => "nav-login",
        }
    }

    /// Looks up the page whose href equals `file`.
    #[must_use]
    pub fn from_file(file: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|page| page.href() == file)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.href())
    }
}

/// Returns the file name of `path`: its last `/` segment, or `index.html`
/// when that segment is empty.
#[must_use]
pub fn current_page_file(path: &str) -> &str {
    match path.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => segment,
        _ => INDEX_FILE,
    }
}

/// Whether the link with `link_href` is the active one for `current_file`.
#[must_use]
pub fn is_active(link_href: &str, current_file: &str) -> bool {
    link_href == current_file
}

/// Tracks the current location and derives the active navigation link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    current_file: String,
}

impl Default for Navigation {
    fn default() -> Self {
        Self::new(INDEX_FILE)
    }
}

impl Navigation {
    /// Starts at `path` (a file name or a full location).
    #[must_use]
    pub fn new(path: &str) -> Self {
        Self {
            current_file: current_page_file(path).to_string(),
        }
    }

    #[must_use]
    pub fn current_file(&self) -> &str {
        &self.current_file
    }

    /// The page matching the current file, if it is one of the known pages.
    #[must_use]
    pub fn current_page(&self) -> Option<Page> {
        Page::from_file(&self.current_file)
    }

    /// The page to render; unknown locations show the home page content.
    #[must_use]
    pub fn displayed_page(&self) -> Page {
        self.current_page().unwrap_or_default()
    }

    pub fn navigate(&mut self, page: Page) {
        page.href().clone_into(&mut self.current_file);
    }

    #[must_use]
    pub fn is_link_active(&self, page: Page) -> bool {
        is_active(page.href(), &self.current_file)
    }

    /// Pages whose links are currently marked active (zero or one).
    pub fn active_links(&self) -> impl Iterator<Item = Page> + '_ {
        Page::ALL
            .into_iter()
            .filter(move |page| self.is_link_active(*page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_page_file_takes_last_segment() {
        assert_eq!(current_page_file("/site/about.html"), "about.html");
        assert_eq!(current_page_file("gallery.html"), "gallery.html");
    }

    #[test]
    fn empty_segment_maps_to_index() {
        assert_eq!(current_page_file("/"), INDEX_FILE);
        assert_eq!(current_page_file(""), INDEX_FILE);
        assert_eq!(current_page_file("/site/"), INDEX_FILE);
    }

    #[test]
    fn matching_is_exact() {
        assert!(is_active("about.html", "about.html"));
        assert!(!is_active("about.html", "About.html"));
        assert!(!is_active("about.html", "about.html?x=1"));
    }

    #[test]
    fn unknown_file_marks_no_link_active() {
        let nav = Navigation::new("/blog.html");
        assert_eq!(nav.active_links().count(), 0);
        assert_eq!(nav.current_page(), None);
        assert_eq!(nav.displayed_page(), Page::Home);
    }

    #[test]
    fn navigate_moves_the_active_link() {
        let mut nav = Navigation::default();
        assert_eq!(nav.active_links().collect::<Vec<_>>(), vec![Page::Home]);

        nav.navigate(Page::Contact);
        assert_eq!(nav.active_links().collect::<Vec<_>>(), vec![Page::Contact]);
        assert!(!nav.is_link_active(Page::Home));
    }

    #[test]
    fn every_page_round_trips_through_its_href() {
        for page in Page::ALL {
            assert_eq!(Page::from_file(page.href()), Some(page));
        }
    }
}
