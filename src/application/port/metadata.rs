// SPDX-License-Identifier: MPL-2.0
//! Metadata reading and writing port definitions.
//!
//! This module defines the trait through which the session and the batch
//! operations touch an image's EXIF container. The infrastructure adapter
//! ([`crate::media::metadata_writer::ExifMetadataStore`]) implements it with
//! `kamadak-exif` for reading and `little_exif` for writing; tests use an
//! in-memory fake.
//!
//! # Fields Touched
//!
//! - **ImageDescription** (IFD0): the editable title
//! - **DateTimeOriginal** / **DateTimeDigitized** (Exif IFD): the capture date

use crate::domain::metadata::CaptureDate;
use std::fmt;
use std::path::Path;

// =============================================================================
// MetadataError
// =============================================================================

/// Errors that can occur during metadata operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataError {
    /// Failed to parse the metadata container.
    ReadFailed(String),

    /// Failed to serialize or write the metadata container back.
    WriteFailed(String),

    /// The file has no EXIF container to update.
    NoExifContainer,

    /// A specific metadata field was not found.
    FieldNotFound(String),

    /// The field exists but its bytes are not valid UTF-8 text.
    InvalidText(String),

    /// The file could not be accessed.
    IoError(String),
}

impl fmt::Display for MetadataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataError::ReadFailed(msg) => write!(f, "Failed to read metadata: {msg}"),
            MetadataError::WriteFailed(msg) => write!(f, "Failed to write metadata: {msg}"),
            MetadataError::NoExifContainer => write!(f, "File has no EXIF metadata"),
            MetadataError::FieldNotFound(field) => write!(f, "Metadata field not found: {field}"),
            MetadataError::InvalidText(field) => write!(f, "Field {field} is not valid UTF-8"),
            MetadataError::IoError(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for MetadataError {}

impl From<std::io::Error> for MetadataError {
    fn from(err: std::io::Error) -> Self {
        MetadataError::IoError(err.to_string())
    }
}

// =============================================================================
// MetadataPort Trait
// =============================================================================

/// Port for the three metadata operations the editor needs.
///
/// Every call is blocking and touches exactly one file.
///
/// # Example
///
/// ```ignore
/// use iced_caption::application::port::metadata::MetadataPort;
/// use std::path::Path;
///
/// fn display_title(port: &impl MetadataPort, path: &Path) -> String {
///     port.read_title(path).unwrap_or_default()
/// }
/// ```
pub trait MetadataPort {
    /// Reads the image description as UTF-8 text.
    ///
    /// A missing description field yields [`MetadataError::FieldNotFound`];
    /// callers that only display the title treat every error as "no title".
    ///
    /// # Errors
    ///
    /// Returns a [`MetadataError`] if the container, field or text is unusable.
    fn read_title(&self, path: &Path) -> Result<String, MetadataError>;

    /// Replaces the image description with `title` and rewrites the file in place.
    ///
    /// # Errors
    ///
    /// Returns a [`MetadataError`] if the file cannot be read or rewritten.
    fn write_title(&self, path: &Path, title: &str) -> Result<(), MetadataError>;

    /// Sets both the original and the digitized timestamp to `date` at noon
    /// plus `sequence_index` seconds.
    ///
    /// # Errors
    ///
    /// Returns a [`MetadataError`] if the file cannot be read or rewritten.
    fn write_captured_date(
        &self,
        path: &Path,
        date: CaptureDate,
        sequence_index: u32,
    ) -> Result<(), MetadataError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_error_display() {
        let err = MetadataError::ReadFailed("invalid format".to_string());
        assert!(format!("{err}").contains("invalid format"));

        let err = MetadataError::FieldNotFound("ImageDescription".to_string());
        assert!(format!("{err}").contains("ImageDescription"));

        let err = MetadataError::NoExifContainer;
        assert!(format!("{err}").contains("no EXIF"));
    }

    #[test]
    fn io_error_converts_to_io_variant() {
        let err: MetadataError = std::io::Error::other("denied").into();
        assert!(matches!(err, MetadataError::IoError(msg) if msg.contains("denied")));
    }

    // Test that the trait is object-safe
    fn _assert_port_object_safe(_: &dyn MetadataPort) {}
}
