// SPDX-License-Identifier: MPL-2.0
//! Metadata domain types.
//!
//! Pure value objects for capture dates. No filesystem access happens here.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use std::fmt;

/// `chrono` format of the date input field (`31/12/2023`, leading zeros optional).
pub const DATE_INPUT_FORMAT: &str = "%d/%m/%Y";

/// Placeholder shown in the empty date input field.
pub const DATE_INPUT_PLACEHOLDER: &str = "dd/mm/yyyy";

/// EXIF `DateTime*` fields use colons in the date part as well.
pub const EXIF_DATETIME_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

/// Batch-assigned timestamps start at noon.
pub const CAPTURE_HOUR: u32 = 12;

// =============================================================================
// DateInputError
// =============================================================================

/// The date field did not contain a valid `day/month/year` date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInputError {
    /// The raw input that failed to parse.
    Malformed(String),
}

impl fmt::Display for DateInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateInputError::Malformed(input) => {
                write!(f, "Invalid date '{input}', expected {DATE_INPUT_PLACEHOLDER}")
            }
        }
    }
}

impl std::error::Error for DateInputError {}

// =============================================================================
// CaptureDate
// =============================================================================

/// Calendar date applied to every open image by "Set Date".
///
/// # Example
///
/// ```ignore
/// let date = CaptureDate::parse("31/12/2023")?;
/// assert_eq!(date.timestamp_for(2).unwrap().as_str(), "2023:12:31 12:00:02");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureDate(NaiveDate);

impl CaptureDate {
    /// Wraps an already validated calendar date.
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parses the text of the date field as `day/month/year`.
    ///
    /// Any other shape (dashes, ISO order, the placeholder itself, impossible
    /// dates such as `31/02/2023`) is rejected.
    pub fn parse(input: &str) -> Result<Self, DateInputError> {
        NaiveDate::parse_from_str(input, DATE_INPUT_FORMAT)
            .map(Self)
            .map_err(|_| DateInputError::Malformed(input.to_string()))
    }

    /// Returns the wrapped calendar date.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Timestamp for the image at `sequence_index` in the open set: noon plus
    /// one second per position, so batch-dated photos keep their order.
    ///
    /// Returns `None` only if the offset pushes the value outside chrono's range.
    #[must_use]
    pub fn timestamp_for(&self, sequence_index: u32) -> Option<ExifTimestamp> {
        let noon = NaiveTime::from_hms_opt(CAPTURE_HOUR, 0, 0)?;
        self.0
            .and_time(noon)
            .checked_add_signed(TimeDelta::seconds(i64::from(sequence_index)))
            .map(ExifTimestamp::from_datetime)
    }
}

// =============================================================================
// ExifTimestamp
// =============================================================================

/// Fixed-width `YYYY:MM:DD HH:MM:SS` string as stored in EXIF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExifTimestamp(String);

impl ExifTimestamp {
    /// Formats a date-time in the EXIF convention.
    #[must_use]
    pub fn from_datetime(datetime: NaiveDateTime) -> Self {
        Self(datetime.format(EXIF_DATETIME_FORMAT).to_string())
    }

    /// Returns the formatted timestamp.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the timestamp and returns the owned string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ExifTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
