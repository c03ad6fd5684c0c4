// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state, with the navbar above every screen and the
//! toast overlay stacked on top.

use super::{Message, Screen};
use crate::gallery::{Carousel, Profile, Work};
use crate::i18n::fluent::I18n;
use crate::ui::admin_page::{self, ViewContext as AdminViewContext};
use crate::ui::gallery_page::{self, ViewContext as GalleryViewContext};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{self, Toast};
use crate::ui::settings::{self, ViewContext as SettingsViewContext};
use crate::ui::theming::ThemeMode;
use iced::widget::image::Handle;
use iced::widget::{Column, Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub authenticated: bool,
    pub profile: &'a Profile,
    pub works: &'a [Work],
    pub images: &'a [Option<Handle>],
    pub carousel: &'a Carousel,
    pub admin: &'a admin_page::State,
    pub theme_mode: ThemeMode,
    pub notifications: &'a notifications::Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        screen: ctx.screen,
        authenticated: ctx.authenticated,
    })
    .map(Message::Navbar);

    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Gallery => view_gallery(&ctx),
        Screen::Admin => view_admin(&ctx),
        Screen::Settings => view_settings(&ctx),
    };

    let base = Column::new().push(navbar_view).push(
        Container::new(current_view)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base)
        .push(toasts)
        .into()
}

fn view_gallery<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    gallery_page::view(GalleryViewContext {
        i18n: ctx.i18n,
        profile: ctx.profile,
        works: ctx.works,
        images: ctx.images,
        carousel: ctx.carousel,
    })
    .map(Message::Gallery)
}

fn view_admin<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    admin_page::view(AdminViewContext {
        i18n: ctx.i18n,
        authenticated: ctx.authenticated,
        state: ctx.admin,
        works: ctx.works,
        images: ctx.images,
    })
    .map(Message::Admin)
}

fn view_settings<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    settings::view(SettingsViewContext {
        i18n: ctx.i18n,
        theme_mode: ctx.theme_mode,
    })
    .map(Message::Settings)
}
