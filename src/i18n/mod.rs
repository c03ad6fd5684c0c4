// SPDX-License-Identifier: MPL-2.0
//! Localization via Fluent bundles embedded at compile time.

pub mod fluent;

pub use fluent::I18n;
