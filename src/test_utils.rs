// SPDX-License-Identifier: MPL-2.0
//! Test helpers shared by unit tests.
//!
//! [`InMemoryMetadata`] stands in for the EXIF adapter so session and batch
//! rules can be tested without image files on disk.

use crate::application::port::metadata::{MetadataError, MetadataPort};
use crate::domain::metadata::CaptureDate;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// One recorded write, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedWrite {
    Title { path: PathBuf, title: String },
    CapturedDate { path: PathBuf, timestamp: String },
}

/// Metadata port backed by hash maps, with per-path failure injection.
#[derive(Debug, Default)]
pub struct InMemoryMetadata {
    titles: RefCell<HashMap<PathBuf, String>>,
    failing_reads: RefCell<HashSet<PathBuf>>,
    failing_writes: RefCell<HashSet<PathBuf>>,
    writes: RefCell<Vec<RecordedWrite>>,
}

impl InMemoryMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_title(&self, path: impl Into<PathBuf>, title: &str) {
        self.titles.borrow_mut().insert(path.into(), title.to_string());
    }

    pub fn fail_reads_for(&self, path: impl Into<PathBuf>) {
        self.failing_reads.borrow_mut().insert(path.into());
    }

    pub fn fail_writes_for(&self, path: impl Into<PathBuf>) {
        self.failing_writes.borrow_mut().insert(path.into());
    }

    pub fn stored_title(&self, path: &Path) -> Option<String> {
        self.titles.borrow().get(path).cloned()
    }

    pub fn writes(&self) -> Vec<RecordedWrite> {
        self.writes.borrow().clone()
    }

    fn check_writable(&self, path: &Path) -> Result<(), MetadataError> {
        if self.failing_writes.borrow().contains(path) {
            return Err(MetadataError::WriteFailed(format!(
                "injected failure for {}",
                path.display()
            )));
        }
        Ok(())
    }
}

impl MetadataPort for InMemoryMetadata {
    fn read_title(&self, path: &Path) -> Result<String, MetadataError> {
        if self.failing_reads.borrow().contains(path) {
            return Err(MetadataError::ReadFailed("injected failure".to_string()));
        }
        self.titles
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| MetadataError::FieldNotFound("ImageDescription".to_string()))
    }

    fn write_title(&self, path: &Path, title: &str) -> Result<(), MetadataError> {
        self.check_writable(path)?;
        self.titles
            .borrow_mut()
            .insert(path.to_path_buf(), title.to_string());
        self.writes.borrow_mut().push(RecordedWrite::Title {
            path: path.to_path_buf(),
            title: title.to_string(),
        });
        Ok(())
    }

    fn write_captured_date(
        &self,
        path: &Path,
        date: CaptureDate,
        sequence_index: u32,
    ) -> Result<(), MetadataError> {
        self.check_writable(path)?;
        let timestamp = date
            .timestamp_for(sequence_index)
            .ok_or_else(|| MetadataError::WriteFailed("timestamp out of range".to_string()))?;
        self.writes.borrow_mut().push(RecordedWrite::CapturedDate {
            path: path.to_path_buf(),
            timestamp: timestamp.into_string(),
        });
        Ok(())
    }
}
