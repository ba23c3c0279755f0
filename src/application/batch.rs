// SPDX-License-Identifier: MPL-2.0
//! Batch write operations over every open image.
//!
//! Both operations are sequential and blocking. A failure on one file is
//! recorded in the [`BatchReport`] and the batch moves on to the next file.

use super::port::metadata::{MetadataError, MetadataPort};
use super::session::TitleSession;
use crate::domain::metadata::{CaptureDate, DateInputError};
use std::path::PathBuf;

/// A single file that could not be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchFailure {
    pub path: PathBuf,
    pub error: MetadataError,
}

impl BatchFailure {
    /// File name for user-facing messages, falling back to the full path.
    #[must_use]
    pub fn file_name(&self) -> String {
        self.path.file_name().map_or_else(
            || self.path.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        )
    }
}

/// Outcome of a batch, in image order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Number of files written successfully.
    pub succeeded: usize,
    /// Files that failed, in the order they were attempted.
    pub failures: Vec<BatchFailure>,
}

impl BatchReport {
    /// Number of files the batch attempted.
    #[must_use]
    pub fn attempted(&self) -> usize {
        self.succeeded + self.failures.len()
    }

    /// Returns `true` if the batch touched no file at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attempted() == 0
    }

    fn record(&mut self, path: PathBuf, result: Result<(), MetadataError>) {
        match result {
            Ok(()) => self.succeeded += 1,
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "metadata write failed");
                self.failures.push(BatchFailure { path, error });
            }
        }
    }
}

/// Commits the displayed title, then writes every pending title to disk.
///
/// Returns an empty report when no image is open.
pub fn save_titles(session: &mut TitleSession, writer: &impl MetadataPort) -> BatchReport {
    session.commit_title_input();

    let mut report = BatchReport::default();
    for (path, title) in session.pending_titles() {
        let result = writer.write_title(path, title);
        report.record(path.to_path_buf(), result);
    }
    tracing::info!(
        succeeded = report.succeeded,
        failed = report.failures.len(),
        "titles saved"
    );
    report
}

/// Parses `input` as `day/month/year` and stamps it onto every open image.
///
/// Each image gets noon plus its position in seconds. Nothing is written if
/// the input does not parse.
///
/// # Errors
///
/// Returns [`DateInputError`] when `input` is not a valid date. Per-file
/// write errors are reported inside the [`BatchReport`] instead.
pub fn set_capture_date(
    session: &TitleSession,
    input: &str,
    writer: &impl MetadataPort,
) -> Result<BatchReport, DateInputError> {
    let date = CaptureDate::parse(input.trim())?;

    let mut report = BatchReport::default();
    for (index, path) in session.images().iter().enumerate() {
        let result = u32::try_from(index)
            .map_err(|_| MetadataError::WriteFailed("sequence index overflow".to_string()))
            .and_then(|sequence_index| writer.write_captured_date(path, date, sequence_index));
        report.record(path.clone(), result);
    }
    tracing::info!(
        date = %date.date(),
        succeeded = report.succeeded,
        failed = report.failures.len(),
        "capture date applied"
    );
    Ok(report)
}
