// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for page-level navigation.
//!
//! The bar shows the studio name and one link per page. The link whose href
//! matches the current page file is rendered active.

use crate::i18n::I18n;
use crate::site::navigation::{Navigation, Page};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub navigation: &'a Navigation,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Navigate(Page),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// A link to another page was selected.
    OpenPage(Page),
}

/// Process a navbar message and return the corresponding event.
///
/// Selecting the link of the page already shown produces no event.
pub fn update(message: Message, navigation: &Navigation) -> Event {
    match message {
        Message::Navigate(page) if navigation.current_page() == Some(page) => Event::None,
        Message::Navigate(page) => Event::OpenPage(page),
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new(ctx.i18n.tr("nav-brand")).size(typography::TITLE_MD);

    let mut links = Row::new().spacing(spacing::XS).align_y(Vertical::Center);
    for page in Page::ALL {
        let active = ctx.navigation.is_link_active(page);
        links = links.push(
            button(Text::new(ctx.i18n.tr(page.label_key())).size(typography::BODY_LG))
                .on_press(Message::Navigate(page))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::nav_link(active)),
        );
    }

    let row = Row::new()
        .spacing(spacing::MD)
        .padding([0.0, spacing::LG])
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill))
        .push(links);

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .align_x(Horizontal::Left)
        .align_y(Vertical::Center)
        .style(styles::container::navbar)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigating_to_another_page_emits_event() {
        let navigation = Navigation::default();
        assert_eq!(
            update(Message::Navigate(Page::About), &navigation),
            Event::OpenPage(Page::About)
        );
    }

    #[test]
    fn navigating_to_current_page_is_ignored() {
        let navigation = Navigation::new("contact.html");
        assert_eq!(update(Message::Navigate(Page::Contact), &navigation), Event::None);
    }

    #[test]
    fn unknown_location_can_open_any_page() {
        let navigation = Navigation::new("missing.html");
        assert_eq!(
            update(Message::Navigate(Page::Home), &navigation),
            Event::OpenPage(Page::Home)
        );
    }
}
