// SPDX-License-Identifier: MPL-2.0
//! Session-scoped key-value area.
//!
//! Values live in memory for the lifetime of the process, which is the
//! desktop equivalent of browser session storage: nothing survives a restart.

use super::StorageArea;
use crate::error::Result;
use std::collections::HashMap;

/// In-memory storage area cleared when the process exits.
#[derive(Debug, Clone, Default)]
pub struct SessionStorage {
    values: HashMap<String, String>,
}

impl SessionStorage {
    /// Creates an empty session area.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageArea for SessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}
