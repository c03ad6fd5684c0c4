// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a personal portfolio gallery built with the Iced GUI framework.
//!
//! It shows a public gallery screen (profile header plus an auto-playing work
//! carousel) and a password-gated admin screen for uploading and deleting
//! works, with all data persisted to a local key-value storage area. It also
//! demonstrates internationalization with Fluent, user preference management,
//! and modular UI design.

pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod media;
pub mod storage;
pub mod ui;
