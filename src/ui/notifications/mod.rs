// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for transient user feedback.
//!
//! Notifications carry i18n message keys (with optional Fluent arguments)
//! rather than rendered text, so the toast widget resolves them against the
//! active locale at render time.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
