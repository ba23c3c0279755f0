// SPDX-License-Identifier: MPL-2.0
//! Crate-level error type for settings, state files and image decoding.
//!
//! EXIF reads and writes have their own
//! [`MetadataError`](crate::application::port::MetadataError) so that batch
//! reports can name the exact failure per file.

use image_rs::ImageError;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A file or directory could not be read or written.
    Io(String),
    /// `settings.toml` could not be parsed.
    Config(String),
    /// Pixel data could not be decoded into a displayable image.
    Decode(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(msg) => write!(f, "I/O error: {msg}"),
            Error::Config(msg) => write!(f, "Invalid settings: {msg}"),
            Error::Decode(msg) => write!(f, "Cannot decode image: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<ImageError> for Error {
    fn from(err: ImageError) -> Self {
        match err {
            ImageError::IoError(io) => Error::Io(io.to_string()),
            other => Error::Decode(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
