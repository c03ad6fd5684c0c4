// SPDX-License-Identifier: MPL-2.0
//! Gallery domain: the portfolio work records, the owner profile, the
//! persisted store, and the carousel state machine.

pub mod carousel;
pub mod store;

pub use carousel::Carousel;
pub use store::GalleryStore;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single portfolio entry.
///
/// Works are append-only: they are created once on upload, never mutated,
/// and removed only by deletion. Field names serialize in camelCase so the
/// stored JSON matches the format the collection originated in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Work {
    /// Caller-generated unique id, timestamp-derived for uploads.
    pub id: String,
    /// Inline `data:` URL for uploads; the seeded sample keeps a plain path.
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// RFC 3339 creation timestamp.
    pub date: String,
}

/// The singleton owner-identity record shown on the gallery screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub bio: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Platform name to URL, in stable display order.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub social_links: BTreeMap<String, String>,
}

impl Default for Profile {
    fn default() -> Self {
        let mut social_links = BTreeMap::new();
        social_links.insert(
            "GitHub".to_string(),
            "https://github.com/IlhamSKie-10".to_string(),
        );
        social_links.insert(
            "Instagram".to_string(),
            "https://www.instagram.com/mh_ilhamhakiki?igsh=Y2l6NWRydm1pMjR3".to_string(),
        );

        Self {
            name: "Muhammad Ilham Hakiki".to_string(),
            bio: "Envisioning growth through art — where creativity evolves and vision inspires \
                  every creation."
                .to_string(),
            email: "ilhamhakiki2304@gmail.com".to_string(),
            phone: Some("+62 838-7237-3094".to_string()),
            avatar: Some("/images/profil.jpg".to_string()),
            social_links,
        }
    }
}

/// The collection a fresh installation is seeded with: one sample work.
#[must_use]
pub fn sample_works(now: &str) -> Vec<Work> {
    vec![Work {
        id: "1".to_string(),
        image_url: "/images/Alone.jpg".to_string(),
        title: Some("Home Alone".to_string()),
        description: Some("A modern abstract piece exploring form and color".to_string()),
        date: now.to_string(),
    }]
}
