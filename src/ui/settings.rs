// SPDX-License-Identifier: MPL-2.0
//! Settings screen: language and theme preferences.
//!
//! Both preferences persist to `settings.toml` immediately on change; the
//! app pushes a warning notification when the write fails.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::Horizontal,
    widget::{button, pick_list, Column, Container, Row, Text},
    Element, Length,
};
use unic_langid::LanguageIdentifier;

/// Messages emitted by the settings screen.
#[derive(Debug, Clone)]
pub enum Message {
    LanguageSelected(LanguageIdentifier),
    ThemeModeSelected(ThemeMode),
}

/// Contextual data needed to render the settings screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
}

/// Render the settings screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("settings-title"))
        .size(typography::TITLE_LG)
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    let language_row = Row::new()
        .spacing(spacing::MD)
        .push(
            Text::new(ctx.i18n.tr("settings-language-label"))
                .size(typography::BODY_LG)
                .width(Length::Fixed(160.0)),
        )
        .push(pick_list(
            ctx.i18n.available_locales.clone(),
            Some(ctx.i18n.current_locale().clone()),
            Message::LanguageSelected,
        ));

    let mut theme_buttons = Row::new().spacing(spacing::XS);
    for mode in ThemeMode::ALL {
        let label = Text::new(ctx.i18n.tr(mode.label_key()));
        let entry = button(label)
            .on_press(Message::ThemeModeSelected(mode))
            .padding([spacing::XXS, spacing::SM]);
        theme_buttons = theme_buttons.push(if mode == ctx.theme_mode {
            entry.style(styles::button::selected)
        } else {
            entry.style(styles::button::ghost)
        });
    }

    let theme_row = Row::new()
        .spacing(spacing::MD)
        .push(
            Text::new(ctx.i18n.tr("settings-theme-label"))
                .size(typography::BODY_LG)
                .width(Length::Fixed(160.0)),
        )
        .push(theme_buttons);

    let card = Container::new(
        Column::new()
            .spacing(spacing::LG)
            .push(language_row)
            .push(theme_row),
    )
    .width(Length::Fill)
    .padding(spacing::LG)
    .style(styles::container::card);

    Container::new(
        Column::new()
            .spacing(spacing::LG)
            .padding(spacing::LG)
            .push(title)
            .push(card),
    )
    .width(Length::Fill)
    .into()
}
