// SPDX-License-Identifier: MPL-2.0
//! Media typing and import for uploaded works.
//!
//! Uploads are validated by declared media type only: a file is accepted
//! when the MIME type derived from its extension starts with `image/`.
//! The bytes themselves are not decoded here.

pub mod data_url;
pub mod import;

use std::path::Path;

/// Image file extensions offered in the upload file dialog.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "webp", "bmp", "tiff", "tif", "ico", "svg",
];

/// Returns the MIME type declared by the path's extension.
#[must_use]
pub fn mime_for_path<P: AsRef<Path>>(path: P) -> Option<&'static str> {
    let extension = path
        .as_ref()
        .extension()
        .and_then(|s| s.to_str())
        .map(str::to_lowercase)?;

    match extension.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "bmp" => Some("image/bmp"),
        "tiff" | "tif" => Some("image/tiff"),
        "ico" => Some("image/x-icon"),
        "svg" => Some("image/svg+xml"),
        "mp4" => Some("video/mp4"),
        "webm" => Some("video/webm"),
        "txt" => Some("text/plain"),
        "pdf" => Some("application/pdf"),
        _ => None,
    }
}

/// Whether the path declares an image media type.
#[must_use]
pub fn is_image<P: AsRef<Path>>(path: P) -> bool {
    mime_for_path(path).is_some_and(|mime| mime.starts_with("image/"))
}
