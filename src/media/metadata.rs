// SPDX-License-Identifier: MPL-2.0
//! EXIF reading for the title and capture date fields.
//!
//! Reading goes through `kamadak-exif`, which understands JPEG, PNG, TIFF and
//! the other containers the open dialog offers. Writing lives in
//! [`super::metadata_writer`].

use crate::application::port::metadata::MetadataError;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Field name used in error messages for the title.
const DESCRIPTION_FIELD: &str = "ImageDescription";

/// Parses the EXIF container of `path`.
fn read_exif(path: &Path) -> Result<exif::Exif, MetadataError> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    exif::Reader::new()
        .read_from_container(&mut reader)
        .map_err(|err| match err {
            exif::Error::NotFound(_) => MetadataError::NoExifContainer,
            exif::Error::Io(io) => MetadataError::IoError(io.to_string()),
            other => MetadataError::ReadFailed(other.to_string()),
        })
}

/// Whether `path` already carries an EXIF block.
pub(crate) fn has_exif_container(path: &Path) -> bool {
    read_exif(path).is_ok()
}

/// Decodes an ASCII-typed EXIF value as UTF-8.
///
/// Cameras and editors routinely store UTF-8 in "ASCII" fields, so the bytes
/// are decoded as UTF-8 and trailing NULs are dropped. Multiple components are
/// joined without separator.
fn ascii_value_to_string(value: &exif::Value, field: &str) -> Result<String, MetadataError> {
    let exif::Value::Ascii(components) = value else {
        return Err(MetadataError::InvalidText(field.to_string()));
    };

    let bytes: Vec<u8> = components.iter().flatten().copied().collect();
    let text = String::from_utf8(bytes).map_err(|_| MetadataError::InvalidText(field.to_string()))?;
    Ok(text.trim_end_matches('\0').to_string())
}

/// Reads the image description stored in the primary IFD.
///
/// # Errors
///
/// - [`MetadataError::IoError`] if the file cannot be opened
/// - [`MetadataError::NoExifContainer`] if the file has no EXIF block
/// - [`MetadataError::FieldNotFound`] if the description is absent
/// - [`MetadataError::InvalidText`] if the bytes are not UTF-8
pub fn read_title(path: &Path) -> Result<String, MetadataError> {
    let exif = read_exif(path)?;
    let field = exif
        .get_field(exif::Tag::ImageDescription, exif::In::PRIMARY)
        .ok_or_else(|| MetadataError::FieldNotFound(DESCRIPTION_FIELD.to_string()))?;
    ascii_value_to_string(&field.value, DESCRIPTION_FIELD)
}

/// Reads the original capture timestamp, falling back to the digitized one.
///
/// Returns the raw `YYYY:MM:DD HH:MM:SS` string.
///
/// # Errors
///
/// Same as [`read_title`], with [`MetadataError::FieldNotFound`] when neither
/// timestamp is present.
pub fn read_captured_date(path: &Path) -> Result<String, MetadataError> {
    let exif = read_exif(path)?;
    [exif::Tag::DateTimeOriginal, exif::Tag::DateTimeDigitized]
        .into_iter()
        .find_map(|tag| exif.get_field(tag, exif::In::PRIMARY))
        .ok_or_else(|| MetadataError::FieldNotFound("DateTimeOriginal".to_string()))
        .and_then(|field| ascii_value_to_string(&field.value, "DateTimeOriginal"))
}
