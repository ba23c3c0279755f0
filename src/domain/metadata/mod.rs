// SPDX-License-Identifier: MPL-2.0
//! Metadata domain types.
//!
//! This module provides the pure rules behind the "Set Date" command:
//! - [`CaptureDate`]: a calendar date parsed from the `dd/mm/yyyy` input field
//! - [`ExifTimestamp`]: the fixed-width `YYYY:MM:DD HH:MM:SS` string written
//!   into the original and digitized timestamp fields

mod types;

pub use types::{
    CaptureDate, DateInputError, ExifTimestamp, CAPTURE_HOUR, DATE_INPUT_FORMAT,
    DATE_INPUT_PLACEHOLDER, EXIF_DATETIME_FORMAT,
};
