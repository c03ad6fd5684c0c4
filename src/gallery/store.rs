// SPDX-License-Identifier: MPL-2.0
//! Persisted gallery store.
//!
//! The store is the single owner of the canonical works collection and the
//! profile record. Every mutation rewrites the whole collection under one
//! storage key, so callers never observe a partially written state. Reads
//! fail soft: absent or malformed data falls back to a default (seeding the
//! sample collection for works, the hardcoded profile otherwise) and the
//! problem is reported as a notification message key rather than an error.
//!
//! Works are stored with their images inlined as base64 data URLs; no upper
//! bound is enforced on the encoded payload size.

use super::{sample_works, Profile, Work};
use crate::storage::{StorageArea, PROFILE_KEY, WORKS_KEY};
use chrono::Utc;

/// Warning key pushed when the persisted works collection fails to parse.
pub const WORKS_PARSE_WARNING: &str = "notification-works-parse-error";

/// Warning key pushed when the works collection cannot be written.
pub const WORKS_WRITE_WARNING: &str = "notification-works-write-error";

/// Warning key pushed when the persisted profile fails to parse.
pub const PROFILE_PARSE_WARNING: &str = "notification-profile-parse-error";

/// Store for the works collection and the profile record.
///
/// Keeps an in-memory cache of the works that mirrors the persisted value;
/// the cache is refreshed by [`load_works`](Self::load_works) and updated by
/// every mutation before the new collection is written back.
#[derive(Debug)]
pub struct GalleryStore<S: StorageArea> {
    storage: S,
    works: Vec<Work>,
}

impl<S: StorageArea> GalleryStore<S> {
    /// Creates a store over the given persistent area with an empty cache.
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            works: Vec::new(),
        }
    }

    /// Returns the cached works collection, in insertion order.
    #[must_use]
    pub fn works(&self) -> &[Work] {
        &self.works
    }

    /// Loads the works collection from storage into the cache.
    ///
    /// When the stored value is absent — or malformed, which is treated
    /// exactly like absent — the collection is initialized with the seeded
    /// sample work and persisted before returning. Returns a warning
    /// notification key when something went wrong along the way.
    pub fn load_works(&mut self) -> Option<String> {
        match self.storage.get(WORKS_KEY) {
            Some(raw) => match serde_json::from_str::<Vec<Work>>(&raw) {
                Ok(works) => {
                    self.works = works;
                    None
                }
                Err(_) => self
                    .seed()
                    .or(Some(WORKS_PARSE_WARNING.to_string())),
            },
            None => self.seed(),
        }
    }

    /// Replaces the whole collection and persists it with a single key write.
    pub fn save_works(&mut self, works: Vec<Work>) -> Option<String> {
        self.works = works;
        self.persist()
    }

    /// Appends `new_works` to the collection, then saves.
    pub fn add_works(&mut self, new_works: Vec<Work>) -> Option<String> {
        self.works.extend(new_works);
        self.persist()
    }

    /// Removes the work with the given id, then saves.
    ///
    /// Deleting an unknown id leaves the collection unchanged; the write
    /// still happens, matching the whole-collection persistence model.
    pub fn delete_work(&mut self, id: &str) -> Option<String> {
        self.works.retain(|work| work.id != id);
        self.persist()
    }

    /// Loads the profile, falling back to the hardcoded default when absent
    /// or malformed. The default is never auto-persisted; only an explicit
    /// [`save_profile`](Self::save_profile) writes the profile key.
    pub fn load_profile(&self) -> (Profile, Option<String>) {
        match self.storage.get(PROFILE_KEY) {
            Some(raw) => match serde_json::from_str::<Profile>(&raw) {
                Ok(profile) => (profile, None),
                Err(_) => (Profile::default(), Some(PROFILE_PARSE_WARNING.to_string())),
            },
            None => (Profile::default(), None),
        }
    }

    /// Overwrites the persisted profile.
    pub fn save_profile(&mut self, profile: &Profile) -> Option<String> {
        match serde_json::to_string(profile) {
            Ok(json) => self
                .storage
                .set(PROFILE_KEY, &json)
                .err()
                .map(|_| WORKS_WRITE_WARNING.to_string()),
            Err(_) => Some(WORKS_WRITE_WARNING.to_string()),
        }
    }

    fn seed(&mut self) -> Option<String> {
        self.works = sample_works(&Utc::now().to_rfc3339());
        self.persist()
    }

    fn persist(&mut self) -> Option<String> {
        match serde_json::to_string(&self.works) {
            Ok(json) => self
                .storage
                .set(WORKS_KEY, &json)
                .err()
                .map(|_| WORKS_WRITE_WARNING.to_string()),
            Err(_) => Some(WORKS_WRITE_WARNING.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileStorage, SessionStorage};
    use tempfile::tempdir;

    fn store_in(dir: &std::path::Path) -> GalleryStore<FileStorage> {
        GalleryStore::new(FileStorage::new(dir.to_path_buf()))
    }

    fn work(id: &str, title: &str) -> Work {
        Work {
            id: id.to_string(),
            image_url: format!("data:image/png;base64,{id}"),
            title: Some(title.to_string()),
            description: None,
            date: "2025-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn empty_storage_is_seeded_with_home_alone() {
        let temp_dir = tempdir().expect("create temp dir");
        let mut store = store_in(temp_dir.path());

        let warning = store.load_works();
        assert!(warning.is_none());
        assert_eq!(store.works().len(), 1);
        assert_eq!(store.works()[0].title.as_deref(), Some("Home Alone"));

        // The seed must be persisted before load returns.
        let mut second = store_in(temp_dir.path());
        second.load_works();
        assert_eq!(second.works(), store.works());
    }

    #[test]
    fn persisted_collection_matches_memory_after_each_mutation() {
        let temp_dir = tempdir().expect("create temp dir");
        let mut store = store_in(temp_dir.path());
        store.load_works();

        store.add_works(vec![work("100", "First"), work("101", "Second")]);
        let mut reread = store_in(temp_dir.path());
        reread.load_works();
        assert_eq!(reread.works(), store.works());

        store.delete_work("100");
        let mut reread = store_in(temp_dir.path());
        reread.load_works();
        assert_eq!(reread.works(), store.works());
        assert_eq!(store.works().len(), 2); // seed + "101"
    }

    #[test]
    fn add_works_appends_in_insertion_order() {
        let temp_dir = tempdir().expect("create temp dir");
        let mut store = store_in(temp_dir.path());
        store.load_works();

        store.add_works(vec![work("a", "A")]);
        store.add_works(vec![work("b", "B"), work("c", "C")]);

        let ids: Vec<&str> = store.works().iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "a", "b", "c"]);
    }

    #[test]
    fn delete_unknown_id_leaves_collection_unchanged() {
        let temp_dir = tempdir().expect("create temp dir");
        let mut store = store_in(temp_dir.path());
        store.load_works();
        let before = store.works().to_vec();

        let warning = store.delete_work("does-not-exist");
        assert!(warning.is_none());
        assert_eq!(store.works(), before.as_slice());
    }

    #[test]
    fn round_trip_preserves_every_field() {
        let temp_dir = tempdir().expect("create temp dir");
        let mut store = store_in(temp_dir.path());
        store.load_works();

        let full = Work {
            id: "7".to_string(),
            image_url: "data:image/jpeg;base64,QUJDREVG".to_string(),
            title: Some("Titled".to_string()),
            description: Some("Described".to_string()),
            date: "2025-03-04T05:06:07+00:00".to_string(),
        };
        store.add_works(vec![full.clone()]);

        let mut reread = store_in(temp_dir.path());
        reread.load_works();
        assert_eq!(reread.works().last(), Some(&full));
    }

    #[test]
    fn malformed_works_json_is_treated_as_absent() {
        let temp_dir = tempdir().expect("create temp dir");
        {
            let mut storage = FileStorage::new(temp_dir.path().to_path_buf());
            storage.set(WORKS_KEY, "{ not json").expect("write garbage");
        }

        let mut store = store_in(temp_dir.path());
        let warning = store.load_works();

        assert_eq!(warning.as_deref(), Some(WORKS_PARSE_WARNING));
        assert_eq!(store.works().len(), 1, "collection is reseeded");
        assert_eq!(store.works()[0].title.as_deref(), Some("Home Alone"));
    }

    #[test]
    fn profile_defaults_when_absent_and_is_not_persisted() {
        let temp_dir = tempdir().expect("create temp dir");
        let store = store_in(temp_dir.path());

        let (profile, warning) = store.load_profile();
        assert!(warning.is_none());
        assert_eq!(profile, Profile::default());

        // Asymmetry with load_works: the default profile is never written.
        let storage = FileStorage::new(temp_dir.path().to_path_buf());
        assert_eq!(storage.get(PROFILE_KEY), None);
    }

    #[test]
    fn malformed_profile_falls_back_to_default_with_warning() {
        let temp_dir = tempdir().expect("create temp dir");
        {
            let mut storage = FileStorage::new(temp_dir.path().to_path_buf());
            storage.set(PROFILE_KEY, "][").expect("write garbage");
        }

        let store = store_in(temp_dir.path());
        let (profile, warning) = store.load_profile();
        assert_eq!(warning.as_deref(), Some(PROFILE_PARSE_WARNING));
        assert_eq!(profile, Profile::default());
    }

    #[test]
    fn saved_profile_overwrites_the_default() {
        let temp_dir = tempdir().expect("create temp dir");
        let mut store = store_in(temp_dir.path());

        let mut profile = Profile::default();
        profile.name = "Someone Else".to_string();
        assert!(store.save_profile(&profile).is_none());

        let (loaded, warning) = store.load_profile();
        assert!(warning.is_none());
        assert_eq!(loaded.name, "Someone Else");
    }

    #[test]
    fn store_works_over_session_storage_too() {
        // The port makes the store indifferent to the backing area.
        let mut store = GalleryStore::new(SessionStorage::new());
        store.load_works();
        store.add_works(vec![work("9", "Ephemeral")]);
        assert_eq!(store.works().len(), 2);
    }
}
