// SPDX-License-Identifier: MPL-2.0
//! Navigation bar for app-level navigation.
//!
//! Shows the brand title and the screen switcher. The admin entry is always
//! visible (the admin screen itself renders the login form when the session
//! is not authenticated); the logout entry only appears once logged in.

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub authenticated: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    OpenGallery,
    OpenAdmin,
    OpenSettings,
    Logout,
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new(ctx.i18n.tr("navbar-brand")).size(typography::TITLE_MD);

    let gallery_button = nav_button(
        ctx.i18n.tr("navbar-gallery-button"),
        Message::OpenGallery,
        ctx.screen == Screen::Gallery,
    );
    let admin_button = nav_button(
        ctx.i18n.tr("navbar-admin-button"),
        Message::OpenAdmin,
        ctx.screen == Screen::Admin,
    );
    let settings_button = nav_button(
        ctx.i18n.tr("navbar-settings-button"),
        Message::OpenSettings,
        ctx.screen == Screen::Settings,
    );

    let mut row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill).height(Length::Shrink))
        .push(gallery_button)
        .push(admin_button)
        .push(settings_button);

    if ctx.authenticated {
        let logout_button = button(Text::new(ctx.i18n.tr("navbar-logout-button")))
            .on_press(Message::Logout)
            .padding([spacing::XXS, spacing::SM])
            .style(styles::button::destructive);
        row = row.push(logout_button);
    }

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Left)
        .style(styles::container::toolbar)
        .into()
}

/// Build one screen-switcher button, highlighted when active.
fn nav_button<'a>(label: String, message: Message, active: bool) -> Element<'a, Message> {
    let base = button(Text::new(label))
        .on_press(message)
        .padding([spacing::XXS, spacing::SM]);

    if active {
        base.style(styles::button::selected).into()
    } else {
        base.style(styles::button::ghost).into()
    }
}
