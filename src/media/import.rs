// SPDX-License-Identifier: MPL-2.0
//! Converts user-picked files into portfolio works.
//!
//! Import is batch-tolerant: a file that fails validation or reading is
//! reported individually and the rest of the batch continues. Accepted
//! files become one work each, with the image embedded as a data URL.

use super::{data_url, mime_for_path};
use crate::gallery::Work;
use chrono::Utc;
use std::path::{Path, PathBuf};

/// A batch of files to import, with the shared form fields.
#[derive(Debug, Clone)]
pub struct ImportRequest {
    pub paths: Vec<PathBuf>,
    /// Shared title; empty means "use each file's stem".
    pub title: String,
    /// Shared description; empty means none.
    pub description: String,
}

/// Result of an import batch.
#[derive(Debug, Clone, Default)]
pub struct ImportOutcome {
    /// Works built from the accepted files, in selection order.
    pub works: Vec<Work>,
    /// File names rejected because they do not declare an image type.
    pub skipped: Vec<String>,
    /// File names that declared an image type but could not be read.
    pub failed: Vec<String>,
}

/// Imports the requested files into works.
///
/// Each accepted file gets a millisecond-timestamp id suffixed with its
/// batch index, so ids stay unique within a batch and across quick
/// successive batches.
#[must_use]
pub fn import_files(request: &ImportRequest) -> ImportOutcome {
    let mut outcome = ImportOutcome::default();
    let now = Utc::now();

    for (index, path) in request.paths.iter().enumerate() {
        let name = display_name(path);

        let Some(mime) = mime_for_path(path).filter(|m| m.starts_with("image/")) else {
            outcome.skipped.push(name);
            continue;
        };

        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(_) => {
                outcome.failed.push(name);
                continue;
            }
        };

        let title = if request.title.trim().is_empty() {
            file_stem(path)
        } else {
            Some(request.title.clone())
        };
        let description = if request.description.trim().is_empty() {
            None
        } else {
            Some(request.description.clone())
        };

        outcome.works.push(Work {
            id: format!("{}{}", now.timestamp_millis(), index),
            image_url: data_url::encode(mime, &bytes),
            title,
            description,
            date: now.to_rfc3339(),
        });
    }

    outcome
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn file_stem(path: &Path) -> Option<String> {
    path.file_stem().map(|s| s.to_string_lossy().into_owned())
}
