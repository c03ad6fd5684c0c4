// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::media::import::ImportOutcome;
use crate::ui::admin_page;
use crate::ui::gallery_page;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::settings;
use std::path::PathBuf;
use std::time::Instant;

use super::Screen;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Gallery(gallery_page::Message),
    Admin(admin_page::Message),
    Settings(settings::Message),
    Notification(notifications::Message),
    SwitchScreen(Screen),
    /// Result from the upload file dialog; `None` means it was cancelled.
    UploadFilesSelected(Option<Vec<PathBuf>>),
    /// Result from importing the selected files in the background.
    UploadFinished(ImportOutcome),
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Initial page fragment (`user`, `admin`, `settings`).
    pub page: Option<String>,
    /// Optional data directory override (storage area and state file).
    /// Takes precedence over `ICED_FOLIO_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_FOLIO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
