// SPDX-License-Identifier: MPL-2.0
//! Public gallery screen: profile header and the work carousel.
//!
//! The carousel renders the work at the carousel's current index, previous/
//! next controls, a play/pause toggle (hidden for single-work collections,
//! where auto-advance is suppressed anyway), a thumbnail strip for direct
//! jumps, and the collection counter.

use crate::gallery::{Carousel, Profile, Work};
use crate::i18n::fluent::I18n;
use crate::media::data_url;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, Column, Container, Row, Text},
    Border, Element, Length, Theme,
};

/// Messages emitted by the gallery screen.
#[derive(Debug, Clone)]
pub enum Message {
    NextWork,
    PreviousWork,
    SelectWork(usize),
    TogglePlay,
    /// Fired by the slideshow subscription while auto-advance is active.
    SlideshowTick,
}

/// Contextual data needed to render the gallery screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub profile: &'a Profile,
    pub works: &'a [Work],
    /// Decoded image handles, parallel to `works`; `None` renders a placeholder.
    pub images: &'a [Option<Handle>],
    pub carousel: &'a Carousel,
}

/// Decodes the works' data URLs into renderable image handles.
///
/// Entries that are not data URLs (like the seeded sample's plain path)
/// become `None` and render as placeholders.
#[must_use]
pub fn image_handles(works: &[Work]) -> Vec<Option<Handle>> {
    works
        .iter()
        .map(|work| data_url::decode(&work.image_url).map(|(_, bytes)| Handle::from_bytes(bytes)))
        .collect()
}

/// Initials shown in the avatar circle when no avatar image is available.
#[must_use]
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Render the gallery screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .push(profile_card(ctx.i18n, ctx.profile))
        .push(
            Text::new(ctx.i18n.tr("gallery-featured-works"))
                .size(typography::TITLE_LG)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .push(carousel_section(&ctx));

    iced::widget::scrollable(
        Container::new(content)
            .width(Length::Fill)
            .padding(spacing::MD),
    )
    .into()
}

/// Profile header: avatar initials, name, bio, and contact lines.
fn profile_card<'a>(_i18n: &'a I18n, profile: &'a Profile) -> Element<'a, Message> {
    let avatar = Container::new(
        Text::new(initials(&profile.name))
            .size(typography::TITLE_LG)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
    )
    .width(Length::Fixed(sizing::AVATAR))
    .height(Length::Fixed(sizing::AVATAR))
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .style(avatar_style);

    let mut details = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(&profile.name).size(typography::TITLE_MD))
        .push(Text::new(&profile.bio).size(typography::BODY))
        .push(Text::new(&profile.email).size(typography::BODY));

    if let Some(phone) = &profile.phone {
        details = details.push(Text::new(phone).size(typography::BODY));
    }
    for (platform, url) in &profile.social_links {
        details = details.push(
            Row::new()
                .spacing(spacing::XS)
                .push(Text::new(platform).size(typography::BODY))
                .push(Text::new(url).size(typography::CAPTION)),
        );
    }

    let row = Row::new()
        .spacing(spacing::LG)
        .align_y(Vertical::Center)
        .push(avatar)
        .push(details);

    Container::new(row)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
}

/// The carousel, or the empty-state card when there are no works.
fn carousel_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    if ctx.works.is_empty() {
        return Container::new(Text::new(ctx.i18n.tr("gallery-empty")).size(typography::BODY_LG))
            .width(Length::Fill)
            .padding(spacing::XXL)
            .align_x(Horizontal::Center)
            .style(styles::container::card)
            .into();
    }

    let index = ctx.carousel.current_index();
    let current = &ctx.works[index];

    let mut column = Column::new()
        .spacing(spacing::MD)
        .push(slide(ctx, index, current));

    if ctx.works.len() > 1 {
        column = column.push(thumbnail_strip(ctx, index));
    }

    let counter = ctx.i18n.tr_with_args(
        "gallery-work-count",
        &[("count", &ctx.works.len().to_string())],
    );
    column = column.push(
        Text::new(counter)
            .size(typography::BODY)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    );

    column.into()
}

/// The main slide: current image with controls and the work info caption.
fn slide<'a>(ctx: &ViewContext<'a>, index: usize, current: &'a Work) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match ctx.images.get(index).and_then(Option::as_ref) {
        Some(handle) => Image::new(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(sizing::CAROUSEL_HEIGHT))
            .into(),
        None => placeholder(ctx.i18n, current),
    };

    let mut controls = Row::new().spacing(spacing::XS).align_y(Vertical::Center);
    if ctx.works.len() > 1 {
        controls = controls
            .push(
                button(Text::new("‹").size(typography::TITLE_MD))
                    .on_press(Message::PreviousWork)
                    .style(styles::button::ghost),
            )
            .push(
                button(Text::new(if ctx.carousel.is_playing() { "⏸" } else { "▶" }))
                    .on_press(Message::TogglePlay)
                    .style(styles::button::ghost),
            )
            .push(
                button(Text::new("›").size(typography::TITLE_MD))
                    .on_press(Message::NextWork)
                    .style(styles::button::ghost),
            );
    }

    let mut caption = Column::new().spacing(spacing::XXS);
    if let Some(title) = &current.title {
        caption = caption.push(Text::new(title).size(typography::TITLE_SM));
    }
    if let Some(description) = &current.description {
        caption = caption.push(Text::new(description).size(typography::BODY));
    }

    let footer = Row::new()
        .align_y(Vertical::Center)
        .push(Container::new(caption).width(Length::Fill))
        .push(controls);

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(picture)
            .push(footer),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .style(styles::container::card)
    .into()
}

/// Placeholder card shown when the image URL cannot be decoded.
fn placeholder<'a>(i18n: &'a I18n, work: &'a Work) -> Element<'a, Message> {
    let label = work
        .title
        .clone()
        .unwrap_or_else(|| i18n.tr("gallery-untitled-work"));

    Container::new(Text::new(label).size(typography::TITLE_SM))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::CAROUSEL_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::placeholder)
        .into()
}

/// Thumbnail strip for direct jumps; the active slide gets an accent border.
fn thumbnail_strip<'a>(ctx: &ViewContext<'a>, active: usize) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::XS);

    for index in 0..ctx.works.len() {
        let inner: Element<'a, Message> = match ctx.images.get(index).and_then(Option::as_ref) {
            Some(handle) => Image::new(handle.clone())
                .width(Length::Fixed(sizing::THUMBNAIL))
                .height(Length::Fixed(sizing::THUMBNAIL))
                .into(),
            None => Container::new(Text::new((index + 1).to_string()).size(typography::BODY))
                .width(Length::Fixed(sizing::THUMBNAIL))
                .height(Length::Fixed(sizing::THUMBNAIL))
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center)
                .style(styles::container::placeholder)
                .into(),
        };

        let is_active = index == active;
        let thumb = button(inner)
            .on_press(Message::SelectWork(index))
            .padding(0)
            .style(move |theme: &Theme, status| thumbnail_style(theme, status, is_active));

        row = row.push(thumb);
    }

    Container::new(row).width(Length::Fill).into()
}

fn avatar_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.primary.weak.color.into()),
        border: Border {
            radius: radius::FULL.into(),
            width: 2.0,
            color: palette.primary.strong.color,
        },
        text_color: Some(palette.primary.weak.text),
        ..Default::default()
    }
}

fn thumbnail_style(theme: &Theme, _status: iced::widget::button::Status, active: bool) -> iced::widget::button::Style {
    let palette = theme.extended_palette();

    iced::widget::button::Style {
        background: None,
        text_color: palette.background.base.text,
        border: Border {
            radius: radius::SM.into(),
            width: 2.0,
            color: if active {
                palette.primary.strong.color
            } else {
                palette.background.strong.color
            },
        },
        ..Default::default()
    }
}
