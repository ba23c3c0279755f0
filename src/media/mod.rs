// SPDX-License-Identifier: MPL-2.0
//! Image files: decoding for display and EXIF metadata access.

pub mod image;
pub mod metadata;
pub mod metadata_writer;

use std::path::{Path, PathBuf};

// Re-export commonly used types
pub use image::{load_preview, load_thumbnail, ImageData};
pub use metadata_writer::ExifMetadataStore;

/// Supported media extensions
pub mod extensions {
    /// Extensions offered by the open dialog. Every one of them carries an
    /// EXIF container that can be read and rewritten.
    pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "tif", "tiff"];
}

pub use extensions::IMAGE_EXTENSIONS;

/// Returns `true` if the extension of `path` is one of [`IMAGE_EXTENSIONS`],
/// ignoring case.
#[must_use]
pub fn is_supported<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

/// Keeps the supported files of `paths`, preserving their order.
///
/// Used for files passed on the command line, which bypass the dialog filter.
#[must_use]
pub fn filter_supported(paths: impl IntoIterator<Item = PathBuf>) -> Vec<PathBuf> {
    paths
        .into_iter()
        .filter(|path| {
            let keep = is_supported(path);
            if !keep {
                tracing::debug!(path = %path.display(), "skipping unsupported file");
            }
            keep
        })
        .collect()
}
