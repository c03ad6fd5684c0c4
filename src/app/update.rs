// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application update loop.
//!
//! Each handler borrows the relevant slices of application state through
//! [`UpdateContext`] and returns the follow-up task, keeping `App::update`
//! itself a thin dispatcher.

use super::message::Message;
use super::persisted_state::AppState;
use super::screen::Screen;
use crate::auth::SessionAuth;
use crate::gallery::{Carousel, GalleryStore};
use crate::i18n::fluent::I18n;
use crate::media::import::{self, ImportOutcome, ImportRequest};
use crate::storage::{FileStorage, SessionStorage};
use crate::ui::admin_page::{self, Event as AdminEvent};
use crate::ui::gallery_page;
use crate::ui::navbar;
use crate::ui::notifications::{self, Notification};
use crate::ui::settings;
use crate::ui::theming::ThemeMode;
use crate::config;
use iced::widget::image::Handle;
use iced::Task;
use std::path::PathBuf;

/// Mutable view over the application state for one update.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub screen: &'a mut Screen,
    pub store: &'a mut GalleryStore<FileStorage>,
    pub auth: &'a mut SessionAuth<SessionStorage>,
    pub work_images: &'a mut Vec<Option<Handle>>,
    pub carousel: &'a mut Carousel,
    pub admin: &'a mut admin_page::State,
    pub theme_mode: &'a mut ThemeMode,
    pub persisted: &'a mut AppState,
    pub notifications: &'a mut notifications::Manager,
}

impl UpdateContext<'_> {
    /// Pushes a warning toast for a fail-soft storage problem, if any.
    fn warn(&mut self, warning: Option<String>) {
        if let Some(key) = warning {
            self.notifications.push(Notification::warning(key));
        }
    }

    /// Refreshes the decoded image cache and the carousel index invariant
    /// after the works collection changed.
    fn refresh_works_view(&mut self) {
        *self.work_images = gallery_page::image_handles(self.store.works());
        self.carousel.clamp_to(self.store.works().len());
    }

    /// Persists the current preferences, warning on failure.
    fn persist_preferences(&mut self) {
        let config = config::Config {
            language: Some(self.i18n.current_locale().to_string()),
            theme_mode: *self.theme_mode,
        };
        if config::save(&config).is_err() {
            self.notifications
                .push(Notification::warning("notification-config-save-error"));
        }
    }
}

/// Handles navbar messages: screen switches and logout.
pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match message {
        navbar::Message::OpenGallery => {
            *ctx.screen = Screen::Gallery;
        }
        navbar::Message::OpenAdmin => {
            // The admin screen gates itself on the auth flag.
            *ctx.screen = Screen::Admin;
        }
        navbar::Message::OpenSettings => {
            *ctx.screen = Screen::Settings;
        }
        navbar::Message::Logout => {
            ctx.auth.logout();
            *ctx.screen = Screen::Gallery;
            ctx.notifications
                .push(Notification::info("notification-logout"));
        }
    }
    Task::none()
}

/// Handles an external screen-switch request (initial fragment, tests).
pub fn handle_screen_switch(ctx: &mut UpdateContext<'_>, target: Screen) -> Task<Message> {
    *ctx.screen = target;
    Task::none()
}

/// Handles gallery carousel messages.
pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery_page::Message,
) -> Task<Message> {
    let len = ctx.store.works().len();

    match message {
        gallery_page::Message::NextWork => ctx.carousel.next(len),
        gallery_page::Message::PreviousWork => ctx.carousel.previous(len),
        gallery_page::Message::SelectWork(index) => {
            if !ctx.carousel.go_to(index, len) {
                ctx.notifications
                    .push(Notification::warning("notification-work-index-invalid"));
            }
        }
        gallery_page::Message::TogglePlay => ctx.carousel.toggle_play(),
        gallery_page::Message::SlideshowTick => {
            // The subscription is already gated, but the collection may have
            // shrunk between the tick being scheduled and handled.
            if ctx.carousel.should_auto_advance(len) {
                ctx.carousel.next(len);
            }
        }
    }

    Task::none()
}

/// Handles admin screen messages: login, form edits, upload, delete.
pub fn handle_admin_message(
    ctx: &mut UpdateContext<'_>,
    message: admin_page::Message,
) -> Task<Message> {
    match admin_page::update(ctx.admin, message) {
        AdminEvent::None => Task::none(),
        AdminEvent::SubmitLogin(password) => {
            if ctx.auth.login(&password) {
                *ctx.screen = Screen::Admin;
                ctx.notifications
                    .push(Notification::success("notification-login-success"));
            } else {
                ctx.notifications
                    .push(Notification::error("notification-login-failed"));
            }
            Task::none()
        }
        AdminEvent::PickFiles => handle_pick_files(ctx),
        AdminEvent::DeleteWork(id) => {
            let warning = ctx.store.delete_work(&id);
            ctx.warn(warning);
            ctx.refresh_works_view();
            ctx.notifications
                .push(Notification::success("notification-work-deleted"));
            Task::none()
        }
    }
}

/// Opens the native multi-file picker for the upload flow.
fn handle_pick_files(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let last_directory = ctx.persisted.last_upload_directory.clone();

    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new()
                .add_filter("Images", crate::media::IMAGE_EXTENSIONS)
                .add_filter("All files", &["*"]);

            if let Some(dir) = last_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.pick_files().await.map(|handles| {
                handles
                    .into_iter()
                    .map(|handle| handle.path().to_path_buf())
                    .collect::<Vec<_>>()
            })
        },
        Message::UploadFilesSelected,
    )
}

/// Handles the file dialog result by importing the selection off-loop.
pub fn handle_upload_files_selected(
    ctx: &mut UpdateContext<'_>,
    paths: Option<Vec<PathBuf>>,
) -> Task<Message> {
    let Some(paths) = paths else {
        // Dialog cancelled.
        return Task::none();
    };

    if paths.is_empty() {
        ctx.notifications
            .push(Notification::warning("notification-upload-empty"));
        return Task::none();
    }

    // Remember where the user picked from for the next dialog.
    ctx.persisted.set_last_upload_directory_from_file(&paths[0]);
    let warning = ctx.persisted.save();
    ctx.warn(warning);

    let request = ImportRequest {
        paths,
        title: ctx.admin.title_input.clone(),
        description: ctx.admin.description_input.clone(),
    };

    Task::perform(
        async move { import::import_files(&request) },
        Message::UploadFinished,
    )
}

/// Applies an import outcome: per-file reports, then the batch append.
pub fn handle_upload_finished(
    ctx: &mut UpdateContext<'_>,
    outcome: ImportOutcome,
) -> Task<Message> {
    for name in &outcome.skipped {
        ctx.notifications.push(
            Notification::warning("notification-upload-skipped")
                .with_arg("filename", name.as_str()),
        );
    }
    for name in &outcome.failed {
        ctx.notifications.push(
            Notification::error("notification-upload-read-error")
                .with_arg("filename", name.as_str()),
        );
    }

    if outcome.works.is_empty() {
        return Task::none();
    }

    let count = outcome.works.len();
    let warning = ctx.store.add_works(outcome.works);
    ctx.warn(warning);
    ctx.refresh_works_view();

    // Reset the shared form fields after a successful batch.
    ctx.admin.title_input.clear();
    ctx.admin.description_input.clear();

    ctx.notifications.push(
        Notification::success("notification-upload-success")
            .with_arg("count", count.to_string()),
    );

    Task::none()
}

/// Handles settings changes, persisting preferences immediately.
pub fn handle_settings_message(
    ctx: &mut UpdateContext<'_>,
    message: settings::Message,
) -> Task<Message> {
    match message {
        settings::Message::LanguageSelected(locale) => {
            ctx.i18n.set_locale(locale);
            ctx.persist_preferences();
        }
        settings::Message::ThemeModeSelected(mode) => {
            *ctx.theme_mode = mode;
            ctx.persist_preferences();
        }
    }
    Task::none()
}
