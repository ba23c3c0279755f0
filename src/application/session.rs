// SPDX-License-Identifier: MPL-2.0
//! Editing session over a set of opened images.
//!
//! [`TitleSession`] is the single source of truth for which images are open,
//! which one is selected, and which title each image will receive on save.
//! It holds no UI handles, so every navigation rule can be exercised in tests
//! without a window.
//!
//! # Lazy title commit
//!
//! Keystrokes only update the displayed title buffer. The buffer is copied
//! into the title map at transition points: selection changes, copy-forward
//! and save. The commit always targets the *previous* selection, before the
//! index moves, otherwise edits would land on the wrong image.

use super::port::metadata::MetadataPort;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Snapshot of the selection for rendering navigation controls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionInfo {
    /// Current position in the set (0-indexed), if any image is open.
    pub current_index: Option<usize>,
    /// Number of open images.
    pub total_count: usize,
    /// Whether [`TitleSession::prev`] would move.
    pub has_previous: bool,
    /// Whether [`TitleSession::next`] and copy-forward would move.
    pub has_next: bool,
}

/// Ordered image set, selection and pending titles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TitleSession {
    /// Opened images in file-picker order.
    images: Vec<PathBuf>,
    /// Index into `images`; `Some` exactly when `images` is non-empty.
    selection: Option<usize>,
    /// Pending (possibly unsaved) title per image.
    titles: HashMap<PathBuf, String>,
    /// Text currently shown in the title field.
    title_input: String,
}

impl TitleSession {
    /// Creates an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the image set with `paths` and selects the first image.
    ///
    /// Each image's stored title is read through `reader`. Read failures are
    /// logged at debug level and degrade to an empty title.
    pub fn open(&mut self, paths: Vec<PathBuf>, reader: &impl MetadataPort) {
        self.titles = paths
            .iter()
            .map(|path| {
                let title = reader.read_title(path).unwrap_or_else(|err| {
                    tracing::debug!(path = %path.display(), error = %err, "no readable title");
                    String::new()
                });
                (path.clone(), title)
            })
            .collect();
        self.selection = if paths.is_empty() { None } else { Some(0) };
        self.images = paths;
        self.title_input = self.stored_title_at(self.selection);
    }

    /// Forgets every image, title and the selection.
    pub fn close(&mut self) {
        self.images.clear();
        self.titles.clear();
        self.selection = None;
        self.title_input.clear();
    }

    /// Moves the selection to `index`, committing the displayed title first.
    ///
    /// Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index >= self.images.len() {
            return;
        }
        self.commit_title_input();
        self.selection = Some(index);
        self.title_input = self.stored_title_at(self.selection);
    }

    /// Selects the next image; no-op on the last one.
    pub fn next(&mut self) {
        if let Some(index) = self.selection {
            self.select(index + 1);
        }
    }

    /// Selects the previous image; no-op on the first one.
    pub fn prev(&mut self) {
        if let Some(index) = self.selection.and_then(|i| i.checked_sub(1)) {
            self.select(index);
        }
    }

    /// Commits the displayed title, advances, and stamps the same title onto
    /// the next image, overwriting whatever it had.
    ///
    /// No-op on the last image or when nothing is open.
    pub fn copy_title_forward_and_advance(&mut self) {
        let Some(index) = self.selection else {
            return;
        };
        let Some(next_path) = self.images.get(index + 1).cloned() else {
            return;
        };
        self.commit_title_input();
        self.selection = Some(index + 1);
        self.titles.insert(next_path, self.title_input.clone());
    }

    /// Replaces the displayed title buffer. The map is not touched.
    pub fn set_title_input(&mut self, text: impl Into<String>) {
        self.title_input = text.into();
    }

    /// Copies the displayed title into the map for the selected image.
    pub fn commit_title_input(&mut self) {
        if let Some(path) = self.current_path().map(Path::to_path_buf) {
            self.titles.insert(path, self.title_input.clone());
        }
    }

    /// Returns the displayed title buffer.
    #[must_use]
    pub fn title_input(&self) -> &str {
        &self.title_input
    }

    /// Returns the opened images in order.
    #[must_use]
    pub fn images(&self) -> &[PathBuf] {
        &self.images
    }

    /// Returns the selected index, if any image is open.
    #[must_use]
    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    /// Returns the selected image path.
    #[must_use]
    pub fn current_path(&self) -> Option<&Path> {
        self.selection
            .and_then(|i| self.images.get(i))
            .map(PathBuf::as_path)
    }

    /// Returns the pending title for `path` as last committed.
    #[must_use]
    pub fn title_for(&self, path: &Path) -> Option<&str> {
        self.titles.get(path).map(String::as_str)
    }

    /// Iterates `(path, pending title)` in image order.
    pub fn pending_titles(&self) -> impl Iterator<Item = (&Path, &str)> {
        self.images.iter().map(|path| {
            let title = self.titles.get(path).map_or("", String::as_str);
            (path.as_path(), title)
        })
    }

    /// Returns `true` if no image is open.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Returns the number of open images.
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Returns a snapshot for the navigation controls.
    #[must_use]
    pub fn selection_info(&self) -> SelectionInfo {
        let total_count = self.images.len();
        SelectionInfo {
            current_index: self.selection,
            total_count,
            has_previous: self.selection.is_some_and(|i| i > 0),
            has_next: self.selection.is_some_and(|i| i + 1 < total_count),
        }
    }

    fn stored_title_at(&self, index: Option<usize>) -> String {
        index
            .and_then(|i| self.images.get(i))
            .and_then(|path| self.titles.get(path))
            .cloned()
            .unwrap_or_default()
    }
}
