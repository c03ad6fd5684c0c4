// SPDX-License-Identifier: MPL-2.0
//! Admin screen: login gate, upload form, and the works grid.
//!
//! The screen renders the login card until the session is authenticated,
//! then the upload form plus the current works with per-work delete. The
//! component owns only its transient form inputs; every mutation of the
//! collection goes through the store via events handled by the app.

use crate::gallery::Work;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use chrono::DateTime;
use iced::widget::image::{Handle, Image};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, text_input, Column, Container, Row, Text},
    Element, Length,
};

/// Transient form state for the admin screen.
#[derive(Debug, Clone, Default)]
pub struct State {
    pub password_input: String,
    pub title_input: String,
    pub description_input: String,
}

/// Messages emitted by the admin screen.
#[derive(Debug, Clone)]
pub enum Message {
    PasswordChanged(String),
    SubmitLogin,
    TitleChanged(String),
    DescriptionChanged(String),
    PickFiles,
    DeleteWork(String),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Login attempt with the entered password; the input is cleared either way.
    SubmitLogin(String),
    PickFiles,
    DeleteWork(String),
}

/// Process an admin screen message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::PasswordChanged(value) => {
            state.password_input = value;
            Event::None
        }
        Message::SubmitLogin => Event::SubmitLogin(std::mem::take(&mut state.password_input)),
        Message::TitleChanged(value) => {
            state.title_input = value;
            Event::None
        }
        Message::DescriptionChanged(value) => {
            state.description_input = value;
            Event::None
        }
        Message::PickFiles => Event::PickFiles,
        Message::DeleteWork(id) => Event::DeleteWork(id),
    }
}

/// Contextual data needed to render the admin screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub authenticated: bool,
    pub state: &'a State,
    pub works: &'a [Work],
    /// Decoded image handles, parallel to `works`.
    pub images: &'a [Option<Handle>],
}

/// Render the admin screen: login card or admin content.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    if ctx.authenticated {
        admin_content(ctx)
    } else {
        login_card(ctx)
    }
}

fn login_card<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("admin-login-title"))
        .size(typography::TITLE_MD)
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    let password = text_input(
        &ctx.i18n.tr("admin-password-placeholder"),
        &ctx.state.password_input,
    )
    .secure(true)
    .on_input(Message::PasswordChanged)
    .on_submit(Message::SubmitLogin)
    .padding(spacing::XS);

    let submit = button(
        Text::new(ctx.i18n.tr("admin-login-button"))
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .on_press(Message::SubmitLogin)
    .width(Length::Fill)
    .padding(spacing::XS);

    let card = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(title)
            .push(Text::new(ctx.i18n.tr("admin-password-label")).size(typography::BODY))
            .push(password)
            .push(submit),
    )
    .width(Length::Fixed(sizing::LOGIN_CARD_WIDTH))
    .padding(spacing::LG)
    .style(styles::container::card);

    Container::new(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

fn admin_content<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let heading = Text::new(ctx.i18n.tr("admin-title"))
        .size(typography::TITLE_LG)
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    let works_heading = Text::new(ctx.i18n.tr_with_args(
        "admin-works-section",
        &[("count", &ctx.works.len().to_string())],
    ))
    .size(typography::TITLE_SM);

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .push(heading)
        .push(upload_form(ctx.i18n, ctx.state))
        .push(works_heading)
        .push(works_grid(&ctx));

    iced::widget::scrollable(Container::new(content).width(Length::Fill)).into()
}

fn upload_form<'a>(i18n: &'a I18n, state: &'a State) -> Element<'a, Message> {
    let section_title = Text::new(i18n.tr("admin-upload-section")).size(typography::TITLE_SM);

    let title_input = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(i18n.tr("admin-upload-title-label")).size(typography::BODY))
        .push(
            text_input(
                &i18n.tr("admin-upload-title-placeholder"),
                &state.title_input,
            )
            .on_input(Message::TitleChanged)
            .padding(spacing::XS),
        );

    let description_input = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(i18n.tr("admin-upload-description-label")).size(typography::BODY))
        .push(
            text_input(
                &i18n.tr("admin-upload-description-placeholder"),
                &state.description_input,
            )
            .on_input(Message::DescriptionChanged)
            .padding(spacing::XS),
        );

    let fields = Row::new()
        .spacing(spacing::MD)
        .push(title_input)
        .push(description_input);

    let pick_button = button(Text::new(i18n.tr("admin-upload-pick-button")))
        .on_press(Message::PickFiles)
        .padding([spacing::XS, spacing::MD]);

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(section_title)
            .push(fields)
            .push(pick_button),
    )
    .width(Length::Fill)
    .padding(spacing::LG)
    .style(styles::container::card)
    .into()
}

fn works_grid<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    if ctx.works.is_empty() {
        return Container::new(Text::new(ctx.i18n.tr("admin-works-empty")).size(typography::BODY))
            .width(Length::Fill)
            .padding(spacing::XL)
            .align_x(Horizontal::Center)
            .style(styles::container::card)
            .into();
    }

    let mut grid = Column::new().spacing(spacing::SM);
    for (index, work) in ctx.works.iter().enumerate() {
        grid = grid.push(work_card(ctx, index, work));
    }

    grid.into()
}

/// One row of the works grid: preview, title/description/date, delete.
fn work_card<'a>(ctx: &ViewContext<'a>, index: usize, work: &'a Work) -> Element<'a, Message> {
    let preview: Element<'a, Message> = match ctx.images.get(index).and_then(Option::as_ref) {
        Some(handle) => Image::new(handle.clone())
            .width(Length::Fixed(sizing::ADMIN_PREVIEW))
            .height(Length::Fixed(sizing::ADMIN_PREVIEW))
            .into(),
        None => Container::new(Text::new((index + 1).to_string()))
            .width(Length::Fixed(sizing::ADMIN_PREVIEW))
            .height(Length::Fixed(sizing::ADMIN_PREVIEW))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(styles::container::placeholder)
            .into(),
    };

    let mut details = Column::new().spacing(spacing::XXS).width(Length::Fill);
    details = details.push(
        Text::new(
            work.title
                .clone()
                .unwrap_or_else(|| ctx.i18n.tr("gallery-untitled-work")),
        )
        .size(typography::BODY_LG),
    );
    if let Some(description) = &work.description {
        details = details.push(Text::new(description).size(typography::BODY));
    }
    details = details.push(Text::new(format_date(&work.date)).size(typography::CAPTION));

    let delete = button(Text::new(ctx.i18n.tr("admin-delete-button")))
        .on_press(Message::DeleteWork(work.id.clone()))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::destructive);

    Container::new(
        Row::new()
            .spacing(spacing::MD)
            .align_y(Vertical::Center)
            .push(preview)
            .push(details)
            .push(delete),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::container::card)
    .into()
}

/// Formats an RFC 3339 timestamp as a short date, falling back to the raw
/// string when it does not parse.
fn format_date(date: &str) -> String {
    DateTime::parse_from_rfc3339(date)
        .map(|parsed| parsed.format("%b %e, %Y").to_string())
        .unwrap_or_else(|_| date.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_edits_accumulate_in_state() {
        let mut state = State::default();
        let event = update(&mut state, Message::PasswordChanged("secret".into()));
        assert!(matches!(event, Event::None));
        assert_eq!(state.password_input, "secret");
    }

    #[test]
    fn submit_login_takes_and_clears_the_password() {
        let mut state = State {
            password_input: "secret".into(),
            ..State::default()
        };

        let event = update(&mut state, Message::SubmitLogin);
        match event {
            Event::SubmitLogin(password) => assert_eq!(password, "secret"),
            other => panic!("expected SubmitLogin event, got {other:?}"),
        }
        assert!(state.password_input.is_empty(), "input is cleared on submit");
    }

    #[test]
    fn form_edits_update_state_without_events() {
        let mut state = State::default();
        assert!(matches!(
            update(&mut state, Message::TitleChanged("Test".into())),
            Event::None
        ));
        assert!(matches!(
            update(&mut state, Message::DescriptionChanged("Batch".into())),
            Event::None
        ));
        assert_eq!(state.title_input, "Test");
        assert_eq!(state.description_input, "Batch");
    }

    #[test]
    fn pick_and_delete_propagate_as_events() {
        let mut state = State::default();
        assert!(matches!(
            update(&mut state, Message::PickFiles),
            Event::PickFiles
        ));
        match update(&mut state, Message::DeleteWork("42".into())) {
            Event::DeleteWork(id) => assert_eq!(id, "42"),
            other => panic!("expected DeleteWork event, got {other:?}"),
        }
    }

    #[test]
    fn format_date_shortens_rfc3339_timestamps() {
        let formatted = format_date("2025-06-30T18:45:00+00:00");
        assert!(formatted.contains("Jun"));
        assert!(formatted.contains("2025"));
    }

    #[test]
    fn format_date_passes_through_unparseable_values() {
        assert_eq!(format_date("yesterday"), "yesterday");
    }

    #[test]
    fn login_card_renders_when_unauthenticated() {
        let i18n = I18n::default();
        let state = State::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            authenticated: false,
            state: &state,
            works: &[],
            images: &[],
        });
    }

    #[test]
    fn admin_content_renders_when_authenticated() {
        let i18n = I18n::default();
        let state = State::default();
        let works = vec![Work {
            id: "1".into(),
            image_url: "/images/Alone.jpg".into(),
            title: Some("Home Alone".into()),
            description: None,
            date: "2025-01-01T00:00:00Z".into(),
        }];
        let images = vec![None];
        let _element = view(ViewContext {
            i18n: &i18n,
            authenticated: true,
            state: &state,
            works: &works,
            images: &images,
        });
    }
}
