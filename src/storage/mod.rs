// SPDX-License-Identifier: MPL-2.0
//! Key-value storage areas backing the gallery store and the auth flag.
//!
//! Two areas exist, mirroring the two browser storage scopes the stored data
//! format comes from: [`FileStorage`] persists each key as a JSON text file
//! under the application data directory and survives restarts, while
//! [`SessionStorage`] lives in memory for the lifetime of the process.
//! Both are reached through the [`StorageArea`] trait so the store and auth
//! logic stay testable without touching platform directories.

pub mod file;
pub mod session;

pub use file::FileStorage;
pub use session::SessionStorage;

use crate::error::Result;

/// Key for the persisted works collection (JSON array).
pub const WORKS_KEY: &str = "portfolioWorks";

/// Key for the persisted profile record (JSON object).
pub const PROFILE_KEY: &str = "portfolioProfile";

/// Key for the session-scoped authentication flag.
pub const AUTH_KEY: &str = "portfolioAuth";

/// A flat string-keyed value store.
///
/// Writes replace the whole value for a key in one operation; readers never
/// observe a partially written value through this interface.
pub trait StorageArea {
    /// Returns the stored value for `key`, or `None` when absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be written to the backing medium.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes the value stored under `key`, if any.
    fn remove(&mut self, key: &str);
}
