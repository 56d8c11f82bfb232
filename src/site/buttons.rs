// SPDX-License-Identifier: MPL-2.0
//! Simulated loading state for call-to-action buttons.
//!
//! Form submit buttons and placeholder buttons (href `#`) show a spinner and
//! a "Loading..." label and stay disabled for a fixed time. Buttons that link
//! to another page navigate instead.

use super::navigation::Page;
use std::collections::HashSet;

/// What a button does when pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonTarget {
    /// Submits the enclosing form.
    Submit,
    /// Plain link with the given href.
    Link(&'static str),
}

impl ButtonTarget {
    /// Whether pressing the button shows the loading state.
    #[must_use]
    pub fn shows_loading(self) -> bool {
        matches!(self, ButtonTarget::Submit | ButtonTarget::Link("#"))
    }

    /// The page a link button leads to, if any.
    #[must_use]
    pub fn page(self) -> Option<Page> {
        match self {
            ButtonTarget::Link(href) => Page::from_file(href),
            ButtonTarget::Submit => None,
        }
    }
}

/// Every button that takes part in the loading simulation or page links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonId {
    ContactSubmit,
    LoginSubmit,
    /// Home hero "Get started" (href `#`).
    GetStarted,
    /// Home hero link to the gallery page.
    ViewGallery,
    /// About page "Join the team" (href `#`).
    JoinTeam,
}

impl ButtonId {
    #[must_use]
    pub fn target(self) -> ButtonTarget {
        match self {
            ButtonId::ContactSubmit | ButtonId::LoginSubmit => ButtonTarget::Submit,
            ButtonId::GetStarted | ButtonId::JoinTeam => ButtonTarget::Link("#"),
            ButtonId::ViewGallery => ButtonTarget::Link(Page::Gallery.href()),
        }
    }

    /// Localization key of the resting label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            ButtonId::ContactSubmit => "contact-submit",
            ButtonId::LoginSubmit => "login-submit",
            ButtonId::GetStarted => "home-get-started",
            ButtonId::ViewGallery => "home-view-gallery",
            ButtonId::JoinTeam => "about-join-team",
        }
    }
}

/// Set of buttons currently in their loading state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonLoading {
    loading: HashSet<ButtonId>,
}

impl ButtonLoading {
    /// Enters the loading state. Returns `false` when the button is not
    /// eligible or is already loading.
    pub fn start(&mut self, id: ButtonId) -> bool {
        id.target().shows_loading() && self.loading.insert(id)
    }

    /// Restores the original label. Returns whether the button was loading.
    pub fn reset(&mut self, id: ButtonId) -> bool {
        self.loading.remove(&id)
    }

    #[must_use]
    pub fn is_loading(&self, id: ButtonId) -> bool {
        self.loading.contains(&id)
    }

    #[must_use]
    pub fn any_loading(&self) -> bool {
        !self.loading.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_submit_and_placeholder_buttons_load() {
        assert!(ButtonTarget::Submit.shows_loading());
        assert!(ButtonTarget::Link("#").shows_loading());
        assert!(!ButtonTarget::Link("gallery.html").shows_loading());
        assert!(!ButtonTarget::Link("#team").shows_loading());
    }

    #[test]
    fn loading_button_cannot_start_again() {
        let mut loading = ButtonLoading::default();
        assert!(loading.start(ButtonId::GetStarted));
        assert!(!loading.start(ButtonId::GetStarted));
        assert!(loading.is_loading(ButtonId::GetStarted));
    }

    #[test]
    fn link_buttons_never_load() {
        let mut loading = ButtonLoading::default();
        assert!(!loading.start(ButtonId::ViewGallery));
        assert!(!loading.any_loading());
        assert_eq!(ButtonId::ViewGallery.target().page(), Some(Page::Gallery));
    }

    #[test]
    fn reset_restores_button() {
        let mut loading = ButtonLoading::default();
        loading.start(ButtonId::LoginSubmit);
        assert!(loading.reset(ButtonId::LoginSubmit));
        assert!(!loading.is_loading(ButtonId::LoginSubmit));
        assert!(!loading.reset(ButtonId::LoginSubmit));
    }
}
