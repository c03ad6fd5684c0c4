// SPDX-License-Identifier: MPL-2.0
//! Session-scoped authentication flag gating the admin screen.
//!
//! This is demo auth, not production auth: the secret is a static string
//! compiled into the binary and the comparison happens client-side. The
//! module boundary exists so a real credential check could replace it
//! without touching any caller.

use crate::storage::{StorageArea, AUTH_KEY};

/// The static admin secret, carried over from the original deployment.
const ADMIN_SECRET: &str = "muhammadilhamhakiki2399";

/// Stored flag value; anything else (or absence) means unauthenticated.
const AUTH_VALUE: &str = "true";

/// Authenticator over a session-scoped storage area.
///
/// The flag lives only as long as the session area does, so closing the
/// application always logs out.
#[derive(Debug)]
pub struct SessionAuth<S: StorageArea> {
    storage: S,
}

impl<S: StorageArea> SessionAuth<S> {
    /// Creates an authenticator over the given session area.
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Attempts a login with the candidate password.
    ///
    /// Exact string comparison: whitespace or case differences fail. On
    /// mismatch the flag is left unchanged.
    pub fn login(&mut self, candidate: &str) -> bool {
        if candidate == ADMIN_SECRET {
            self.storage.set(AUTH_KEY, AUTH_VALUE).is_ok()
        } else {
            false
        }
    }

    /// Returns whether the session is authenticated; `false` when unset.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.storage.get(AUTH_KEY).as_deref() == Some(AUTH_VALUE)
    }

    /// Clears the session flag.
    pub fn logout(&mut self) {
        self.storage.remove(AUTH_KEY);
    }
}
