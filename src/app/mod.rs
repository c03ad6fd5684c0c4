// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery, admin, and
//! settings screens.
//!
//! The `App` struct wires together the domains (gallery store, session auth,
//! carousel, localization, preferences) and translates messages into side
//! effects like storage writes or file dialogs. This file intentionally keeps
//! policy decisions (initial routing, window sizing, persistence warnings)
//! close to the main update loop so it is easy to audit user-facing behavior.

pub mod message;
pub mod paths;
pub mod persisted_state;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::auth::SessionAuth;
use crate::config;
use crate::gallery::{Carousel, GalleryStore, Profile};
use crate::i18n::fluent::I18n;
use crate::storage::{FileStorage, SessionStorage};
use crate::ui::admin_page;
use crate::ui::gallery_page;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use iced::widget::image::Handle;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Root Iced application state that bridges the gallery store, session auth,
/// localization, and persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    store: GalleryStore<FileStorage>,
    auth: SessionAuth<SessionStorage>,
    profile: Profile,
    /// Decoded image handles, parallel to the store's works.
    work_images: Vec<Option<Handle>>,
    carousel: Carousel,
    admin: admin_page::State,
    theme_mode: ThemeMode,
    /// Persisted application state (last upload directory).
    persisted: persisted_state::AppState,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("work_count", &self.store.works().len())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from persisted data and `Flags`.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        Self::new_with_data_dir(&flags, None)
    }

    /// Initialization with an explicit data directory override (for tests).
    fn new_with_data_dir(flags: &Flags, data_dir: Option<PathBuf>) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let storage_dir = paths::get_app_data_dir_with_override(data_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."));
        let mut store = GalleryStore::new(FileStorage::new(storage_dir));
        let mut notifications = notifications::Manager::new();

        if let Some(key) = config_warning {
            notifications.push(notifications::Notification::warning(key));
        }

        // Load the works collection (seeding on first run) and the profile.
        if let Some(key) = store.load_works() {
            notifications.push(notifications::Notification::warning(key));
        }
        let (profile, profile_warning) = store.load_profile();
        if let Some(key) = profile_warning {
            notifications.push(notifications::Notification::warning(key));
        }
        let work_images = gallery_page::image_handles(store.works());

        // Load application state (last upload directory).
        let (persisted, state_warning) = persisted_state::AppState::load_from(data_dir);
        if let Some(key) = state_warning {
            notifications.push(notifications::Notification::warning(key));
        }

        let screen = flags
            .page
            .as_deref()
            .map(Screen::from_fragment)
            .unwrap_or(Screen::Gallery);

        let app = App {
            i18n,
            screen,
            store,
            auth: SessionAuth::new(SessionStorage::new()),
            profile,
            work_images,
            carousel: Carousel::new(),
            admin: admin_page::State::default(),
            theme_mode: config.theme_mode,
            persisted,
            notifications,
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        match self.screen {
            Screen::Gallery => app_name,
            Screen::Admin => format!("{} - {app_name}", self.i18n.tr("admin-title")),
            Screen::Settings => format!("{} - {app_name}", self.i18n.tr("settings-title")),
        }
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.screen);
        let slideshow_sub = subscription::create_slideshow_subscription(
            self.screen,
            &self.carousel,
            self.store.works().len(),
        );
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());

        Subscription::batch([event_sub, slideshow_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            screen: &mut self.screen,
            store: &mut self.store,
            auth: &mut self.auth,
            work_images: &mut self.work_images,
            carousel: &mut self.carousel,
            admin: &mut self.admin,
            theme_mode: &mut self.theme_mode,
            persisted: &mut self.persisted,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::Admin(admin_message) => update::handle_admin_message(&mut ctx, admin_message),
            Message::Settings(settings_message) => {
                update::handle_settings_message(&mut ctx, settings_message)
            }
            Message::SwitchScreen(target) => update::handle_screen_switch(&mut ctx, target),
            Message::UploadFilesSelected(paths) => {
                update::handle_upload_files_selected(&mut ctx, paths)
            }
            Message::UploadFinished(outcome) => update::handle_upload_finished(&mut ctx, outcome),
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(_instant) => {
                // Periodic tick drives notification auto-dismiss.
                self.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            authenticated: self.auth.is_authenticated(),
            profile: &self.profile,
            works: self.store.works(),
            images: &self.work_images,
            carousel: &self.carousel,
            admin: &self.admin,
            theme_mode: self.theme_mode,
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::Work;
    use crate::media::import::{self, ImportOutcome, ImportRequest};
    use crate::ui::admin_page;
    use crate::ui::gallery_page;
    use crate::ui::navbar;
    use std::fs;
    use tempfile::tempdir;

    const PASSWORD: &str = "muhammadilhamhakiki2399";

    fn boot(temp_dir: &tempfile::TempDir) -> App {
        let (app, _task) =
            App::new_with_data_dir(&Flags::default(), Some(temp_dir.path().to_path_buf()));
        app
    }

    fn boot_with_page(temp_dir: &tempfile::TempDir, page: &str) -> App {
        let flags = Flags {
            page: Some(page.to_string()),
            ..Flags::default()
        };
        let (app, _task) = App::new_with_data_dir(&flags, Some(temp_dir.path().to_path_buf()));
        app
    }

    fn login(app: &mut App) {
        let _ = app.update(Message::Admin(admin_page::Message::PasswordChanged(
            PASSWORD.to_string(),
        )));
        let _ = app.update(Message::Admin(admin_page::Message::SubmitLogin));
    }

    fn uploaded_work(id: &str, title: &str) -> Work {
        Work {
            id: id.to_string(),
            image_url: format!("data:image/png;base64,{id}"),
            title: Some(title.to_string()),
            description: None,
            date: "2025-01-01T00:00:00Z".to_string(),
        }
    }

    fn upload(app: &mut App, works: Vec<Work>) {
        let _ = app.update(Message::UploadFinished(ImportOutcome {
            works,
            skipped: Vec::new(),
            failed: Vec::new(),
        }));
    }

    #[test]
    fn new_starts_on_gallery_with_the_seeded_work() {
        let temp_dir = tempdir().expect("create temp dir");
        let app = boot(&temp_dir);

        assert_eq!(app.screen, Screen::Gallery);
        assert!(!app.auth.is_authenticated());
        assert_eq!(app.store.works().len(), 1);
        assert_eq!(app.store.works()[0].title.as_deref(), Some("Home Alone"));
        assert_eq!(app.work_images.len(), 1);
    }

    #[test]
    fn page_flag_selects_the_initial_screen() {
        let temp_dir = tempdir().expect("create temp dir");
        assert_eq!(boot_with_page(&temp_dir, "admin").screen, Screen::Admin);
        assert_eq!(boot_with_page(&temp_dir, "user").screen, Screen::Gallery);
        assert_eq!(boot_with_page(&temp_dir, "bogus").screen, Screen::Gallery);
    }

    #[test]
    fn login_with_the_correct_password_authenticates() {
        let temp_dir = tempdir().expect("create temp dir");
        let mut app = boot(&temp_dir);

        login(&mut app);

        assert!(app.auth.is_authenticated());
        assert_eq!(app.screen, Screen::Admin);
        assert!(app.admin.password_input.is_empty());
        assert!(app.notifications.has_notifications());
    }

    #[test]
    fn login_with_a_wrong_password_fails_and_clears_the_input() {
        let temp_dir = tempdir().expect("create temp dir");
        let mut app = boot(&temp_dir);

        let _ = app.update(Message::Admin(admin_page::Message::PasswordChanged(
            "admin123".to_string(),
        )));
        let _ = app.update(Message::Admin(admin_page::Message::SubmitLogin));

        assert!(!app.auth.is_authenticated());
        assert!(app.admin.password_input.is_empty());
        assert!(app.notifications.has_notifications());
    }

    #[test]
    fn logout_clears_the_session_and_returns_to_the_gallery() {
        let temp_dir = tempdir().expect("create temp dir");
        let mut app = boot(&temp_dir);
        login(&mut app);

        let _ = app.update(Message::Navbar(navbar::Message::Logout));

        assert!(!app.auth.is_authenticated());
        assert_eq!(app.screen, Screen::Gallery);
    }

    #[test]
    fn navbar_switches_screens() {
        let temp_dir = tempdir().expect("create temp dir");
        let mut app = boot(&temp_dir);

        let _ = app.update(Message::Navbar(navbar::Message::OpenAdmin));
        assert_eq!(app.screen, Screen::Admin);

        let _ = app.update(Message::Navbar(navbar::Message::OpenSettings));
        assert_eq!(app.screen, Screen::Settings);

        let _ = app.update(Message::Navbar(navbar::Message::OpenGallery));
        assert_eq!(app.screen, Screen::Gallery);
    }

    #[test]
    fn slideshow_tick_advances_while_playing() {
        let temp_dir = tempdir().expect("create temp dir");
        let mut app = boot(&temp_dir);
        upload(
            &mut app,
            vec![uploaded_work("a", "A"), uploaded_work("b", "B")],
        );
        assert_eq!(app.store.works().len(), 3);

        let _ = app.update(Message::Gallery(gallery_page::Message::TogglePlay));
        let _ = app.update(Message::Gallery(gallery_page::Message::SlideshowTick));

        assert_eq!(app.carousel.current_index(), 1);
    }

    #[test]
    fn slideshow_tick_is_inert_with_a_single_work() {
        let temp_dir = tempdir().expect("create temp dir");
        let mut app = boot(&temp_dir);

        let _ = app.update(Message::Gallery(gallery_page::Message::TogglePlay));
        let _ = app.update(Message::Gallery(gallery_page::Message::SlideshowTick));

        assert!(app.carousel.is_playing());
        assert_eq!(app.carousel.current_index(), 0);
    }

    #[test]
    fn manual_navigation_wraps_around_the_collection() {
        let temp_dir = tempdir().expect("create temp dir");
        let mut app = boot(&temp_dir);
        upload(&mut app, vec![uploaded_work("a", "A")]);

        let _ = app.update(Message::Gallery(gallery_page::Message::PreviousWork));
        assert_eq!(app.carousel.current_index(), 1);

        let _ = app.update(Message::Gallery(gallery_page::Message::NextWork));
        assert_eq!(app.carousel.current_index(), 0);
    }

    #[test]
    fn selecting_an_out_of_range_work_warns_without_moving() {
        let temp_dir = tempdir().expect("create temp dir");
        let mut app = boot(&temp_dir);

        let _ = app.update(Message::Gallery(gallery_page::Message::SelectWork(5)));

        assert_eq!(app.carousel.current_index(), 0);
        assert!(app.notifications.has_notifications());
    }

    #[test]
    fn deleting_the_last_work_clamps_the_carousel_index() {
        let temp_dir = tempdir().expect("create temp dir");
        let mut app = boot(&temp_dir);
        upload(
            &mut app,
            vec![uploaded_work("a", "A"), uploaded_work("b", "B")],
        );

        let _ = app.update(Message::Gallery(gallery_page::Message::SelectWork(2)));
        let _ = app.update(Message::Admin(admin_page::Message::DeleteWork("b".into())));

        assert_eq!(app.store.works().len(), 2);
        assert_eq!(app.carousel.current_index(), 1);
        assert_eq!(app.work_images.len(), 2);
    }

    #[test]
    fn upload_then_delete_end_to_end() {
        let temp_dir = tempdir().expect("create temp dir");
        let mut app = boot(&temp_dir);

        // Starting from empty storage, the gallery holds exactly the seed.
        assert_eq!(app.store.works().len(), 1);
        let seed_id = app.store.works()[0].id.clone();

        // Two valid images and one non-image, all titled "Test".
        let files_dir = tempdir().expect("create files dir");
        let image = image_rs::RgbaImage::from_pixel(2, 2, image_rs::Rgba([1, 2, 3, 255]));
        let first = files_dir.path().join("first.png");
        let second = files_dir.path().join("second.png");
        image.save(&first).expect("write first png");
        image.save(&second).expect("write second png");
        let notes = files_dir.path().join("notes.txt");
        fs::write(&notes, "not an image").expect("write notes");

        let _ = app.update(Message::Admin(admin_page::Message::TitleChanged(
            "Test".to_string(),
        )));

        // Run the import synchronously and feed its result back, simulating
        // the background task completing.
        let outcome = import::import_files(&ImportRequest {
            paths: vec![first, second, notes],
            title: app.admin.title_input.clone(),
            description: app.admin.description_input.clone(),
        });
        assert_eq!(outcome.skipped, vec!["notes.txt".to_string()]);
        let _ = app.update(Message::UploadFinished(outcome));

        // 1 seed + 2 uploads; every upload titled "Test".
        assert_eq!(app.store.works().len(), 3);
        for work in &app.store.works()[1..] {
            assert_eq!(work.title.as_deref(), Some("Test"));
        }
        assert!(app.admin.title_input.is_empty(), "form resets after upload");

        // Deleting the seed leaves the two uploads, in upload order.
        let upload_ids: Vec<String> =
            app.store.works()[1..].iter().map(|w| w.id.clone()).collect();
        let _ = app.update(Message::Admin(admin_page::Message::DeleteWork(seed_id)));

        let remaining: Vec<String> =
            app.store.works().iter().map(|w| w.id.clone()).collect();
        assert_eq!(remaining, upload_ids);

        // And the new collection is what a fresh load sees.
        let (reloaded, _task) =
            App::new_with_data_dir(&Flags::default(), Some(temp_dir.path().to_path_buf()));
        let reloaded_ids: Vec<String> =
            reloaded.store.works().iter().map(|w| w.id.clone()).collect();
        assert_eq!(reloaded_ids, remaining);
    }

    #[test]
    fn cancelled_upload_dialog_changes_nothing() {
        let temp_dir = tempdir().expect("create temp dir");
        let mut app = boot(&temp_dir);

        let _ = app.update(Message::UploadFilesSelected(None));

        assert_eq!(app.store.works().len(), 1);
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn empty_upload_selection_warns() {
        let temp_dir = tempdir().expect("create temp dir");
        let mut app = boot(&temp_dir);

        let _ = app.update(Message::UploadFilesSelected(Some(Vec::new())));

        assert_eq!(app.store.works().len(), 1);
        assert!(app.notifications.has_notifications());
    }

    #[test]
    fn title_follows_the_active_screen() {
        let temp_dir = tempdir().expect("create temp dir");
        let mut app = boot(&temp_dir);

        assert_eq!(app.title(), "IcedFolio");

        let _ = app.update(Message::SwitchScreen(Screen::Admin));
        assert_eq!(app.title(), "Portfolio Administration - IcedFolio");
    }

    #[test]
    fn dismissing_a_notification_removes_it() {
        let temp_dir = tempdir().expect("create temp dir");
        let mut app = boot(&temp_dir);

        let _ = app.update(Message::Gallery(gallery_page::Message::SelectWork(9)));
        let id = app
            .notifications
            .visible()
            .next()
            .expect("a warning should be visible")
            .id();

        let _ = app.update(Message::Notification(
            crate::ui::notifications::Message::Dismiss(id),
        ));
        assert!(!app.notifications.has_notifications());
    }
}
