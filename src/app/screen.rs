// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration and fragment routing.
//!
//! The original deployment routed on a URL hash; the fragment vocabulary is
//! preserved so `--page admin` opens the same view `#admin` did. Unknown or
//! empty fragments fall back to the public gallery.

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Gallery,
    Admin,
    Settings,
}

impl Screen {
    /// Resolves a fragment string to a screen, defaulting to the gallery.
    #[must_use]
    pub fn from_fragment(fragment: &str) -> Self {
        match fragment {
            "admin" => Screen::Admin,
            "settings" => Screen::Settings,
            // "user" and everything else, including the empty fragment.
            _ => Screen::Gallery,
        }
    }

    /// Returns the fragment this screen is addressed by.
    #[must_use]
    pub fn as_fragment(self) -> &'static str {
        match self {
            Screen::Gallery => "user",
            Screen::Admin => "admin",
            Screen::Settings => "settings",
        }
    }
}
