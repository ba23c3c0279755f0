// SPDX-License-Identifier: MPL-2.0
//! EXIF writing for the title and capture date fields.
//!
//! Writing uses the `little_exif` crate, which rewrites the container in place
//! and keeps every tag it does not touch. Reading is delegated to
//! [`super::metadata`].

use super::metadata;
use crate::application::port::metadata::{MetadataError, MetadataPort};
use crate::domain::metadata::{CaptureDate, ExifTimestamp};
use little_exif::exif_tag::ExifTag;
use little_exif::metadata::Metadata;
use std::fs::File;
use std::io::Read;
use std::panic;
use std::path::Path;

/// EXIF container of a file, and whether it was read from disk or started
/// empty.
struct Container {
    metadata: Metadata,
    fresh: bool,
}

/// Loads the container of `path`, or starts an empty one when the file has
/// no EXIF data yet.
///
/// An empty container is only written into JPEG and TIFF files. `little_exif`
/// drops a fresh container on PNG without reporting it, so those files are
/// refused with [`MetadataError::NoExifContainer`].
fn load_container(path: &Path) -> Result<Container, MetadataError> {
    if !super::is_supported(path) {
        return Err(MetadataError::WriteFailed(format!(
            "unsupported format: {}",
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(MetadataError::IoError(format!(
            "file not found: {}",
            path.display()
        )));
    }

    let writable = if accepts_fresh_container(path) {
        has_jpeg_or_tiff_signature(path)
    } else {
        metadata::has_exif_container(path)
    };
    if !writable {
        tracing::debug!(path = %path.display(), "no EXIF container to update");
        return Err(MetadataError::NoExifContainer);
    }

    let read_result = panic::catch_unwind(panic::AssertUnwindSafe(|| {
        Metadata::new_from_path(path)
    }));

    match read_result {
        Ok(Ok(metadata)) => Ok(Container {
            metadata,
            fresh: false,
        }),
        Ok(Err(err)) if accepts_fresh_container(path) => {
            tracing::debug!(path = %path.display(), error = ?err, "starting a new EXIF container");
            Ok(Container {
                metadata: Metadata::new(),
                fresh: true,
            })
        }
        Ok(Err(err)) => {
            tracing::debug!(path = %path.display(), error = ?err, "no EXIF container to update");
            Err(MetadataError::NoExifContainer)
        }
        Err(_) => {
            tracing::debug!(path = %path.display(), "EXIF reader panicked");
            Err(MetadataError::NoExifContainer)
        }
    }
}

fn accepts_fresh_container(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            ["jpg", "jpeg", "tif", "tiff"]
                .iter()
                .any(|candidate| ext.eq_ignore_ascii_case(candidate))
        })
}

/// JPEG starts with SOI, TIFF with a byte order mark and the magic 42.
fn has_jpeg_or_tiff_signature(path: &Path) -> bool {
    let mut header = [0u8; 4];
    let read = File::open(path).and_then(|mut file| file.read_exact(&mut header));
    if read.is_err() {
        return false;
    }

    header.starts_with(&[0xFF, 0xD8, 0xFF])
        || header == *b"II*\0"
        || header == *b"MM\0*"
}

fn store_container(container: &Container, path: &Path) -> Result<(), MetadataError> {
    let write_result = panic::catch_unwind(panic::AssertUnwindSafe(|| {
        container.metadata.write_to_file(path)
    }));

    match write_result {
        Ok(Ok(())) => Ok(()),
        Ok(Err(err)) if container.fresh => {
            tracing::debug!(path = %path.display(), error = ?err, "new EXIF container rejected");
            Err(MetadataError::NoExifContainer)
        }
        Ok(Err(err)) => Err(MetadataError::WriteFailed(format!(
            "Failed to write EXIF metadata to '{}': {:?}",
            path.display(),
            err
        ))),
        Err(_) if container.fresh => Err(MetadataError::NoExifContainer),
        Err(_) => Err(MetadataError::WriteFailed(format!(
            "EXIF writer failed on '{}'",
            path.display()
        ))),
    }
}

/// Replaces the image description of `path` with `title`.
///
/// # Errors
///
/// Returns a [`MetadataError`] if the container cannot be loaded or the file
/// cannot be rewritten.
pub fn write_title(path: &Path, title: &str) -> Result<(), MetadataError> {
    let mut container = load_container(path)?;
    container
        .metadata
        .set_tag(ExifTag::ImageDescription(title.to_string()));
    store_container(&container, path)
}

/// Writes `timestamp` into both the original and the digitized date fields.
///
/// # Errors
///
/// Returns a [`MetadataError`] if the container cannot be loaded or the file
/// cannot be rewritten.
pub fn write_timestamp(path: &Path, timestamp: &ExifTimestamp) -> Result<(), MetadataError> {
    let mut container = load_container(path)?;
    container
        .metadata
        .set_tag(ExifTag::DateTimeOriginal(timestamp.as_str().to_string()));
    // little_exif names DateTimeDigitized (0x9004) `CreateDate`.
    container
        .metadata
        .set_tag(ExifTag::CreateDate(timestamp.as_str().to_string()));
    store_container(&container, path)
}

/// Writes `date` at noon plus `sequence_index` seconds into both date fields.
///
/// # Errors
///
/// Returns a [`MetadataError`] if the timestamp overflows or the file cannot
/// be rewritten.
pub fn write_captured_date(
    path: &Path,
    date: CaptureDate,
    sequence_index: u32,
) -> Result<(), MetadataError> {
    let timestamp = date.timestamp_for(sequence_index).ok_or_else(|| {
        MetadataError::WriteFailed(format!("timestamp out of range for index {sequence_index}"))
    })?;
    write_timestamp(path, &timestamp)
}

/// [`MetadataPort`] backed by the image files on disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExifMetadataStore;

impl MetadataPort for ExifMetadataStore {
    fn read_title(&self, path: &Path) -> Result<String, MetadataError> {
        metadata::read_title(path)
    }

    fn write_title(&self, path: &Path, title: &str) -> Result<(), MetadataError> {
        write_title(path, title)
    }

    fn write_captured_date(
        &self,
        path: &Path,
        date: CaptureDate,
        sequence_index: u32,
    ) -> Result<(), MetadataError> {
        write_captured_date(path, date, sequence_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn write_title_rejects_unsupported_extension() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("clip.mp4");
        fs::write(&path, b"not an image").expect("failed to write file");

        let result = write_title(&path, "Title");

        assert!(matches!(result, Err(MetadataError::WriteFailed(msg)) if msg.contains("unsupported")));
        assert_eq!(fs::read(&path).expect("readable"), b"not an image");
    }

    #[test]
    fn write_title_missing_file_is_io_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let result = write_title(&dir.path().join("missing.jpg"), "Title");
        assert!(matches!(result, Err(MetadataError::IoError(_))));
    }

    #[test]
    fn write_captured_date_missing_file_is_io_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let date = CaptureDate::parse("31/12/2023").expect("valid date");
        let result = write_captured_date(&dir.path().join("missing.png"), date, 0);
        assert!(matches!(result, Err(MetadataError::IoError(_))));
    }

    fn plain_jpeg(dir: &Path, name: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        image_rs::RgbImage::from_pixel(8, 8, image_rs::Rgb([90, 120, 200]))
            .save(&path)
            .expect("failed to encode jpeg");
        path
    }

    #[test]
    fn jpeg_without_exif_gains_a_title() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = plain_jpeg(dir.path(), "export.jpg");
        assert!(metadata::read_title(&path).is_err());

        write_title(&path, "Fresh").expect("write into a new container");

        assert_eq!(metadata::read_title(&path), Ok("Fresh".to_string()));
        assert!(image_rs::open(&path).is_ok());
    }

    #[test]
    fn jpeg_without_exif_gains_both_dates() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = plain_jpeg(dir.path(), "export.jpeg");
        let date = CaptureDate::parse("1/2/2024").expect("valid date");

        write_captured_date(&path, date, 3).expect("write into a new container");

        assert_eq!(
            metadata::read_captured_date(&path),
            Ok("2024:02:01 12:00:03".to_string())
        );
    }

    #[test]
    fn only_jpeg_and_tiff_accept_a_fresh_container() {
        assert!(accepts_fresh_container(Path::new("a.JPG")));
        assert!(accepts_fresh_container(Path::new("a.tif")));
        assert!(!accepts_fresh_container(Path::new("a.png")));
        assert!(!accepts_fresh_container(Path::new("noext")));
    }

    #[test]
    fn fresh_container_needs_a_real_signature() {
        let dir = tempdir().expect("failed to create temp dir");
        let jpeg = plain_jpeg(dir.path(), "real.jpg");
        let fake = dir.path().join("fake.jpg");
        fs::write(&fake, b"plain text").expect("failed to write file");

        assert!(has_jpeg_or_tiff_signature(&jpeg));
        assert!(!has_jpeg_or_tiff_signature(&fake));
        assert_eq!(write_title(&fake, "x"), Err(MetadataError::NoExifContainer));
        assert_eq!(fs::read(&fake).expect("readable"), b"plain text");
    }

    #[test]
    fn store_reads_through_kamadak() {
        let dir = tempdir().expect("failed to create temp dir");
        let store = ExifMetadataStore;
        assert!(store.read_title(&dir.path().join("missing.jpg")).is_err());
    }

    // Test that the adapter can be used behind the trait object
    fn _assert_store_is_port(store: &ExifMetadataStore) -> &dyn MetadataPort {
        store
    }
}
