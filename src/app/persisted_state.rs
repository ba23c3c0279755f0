// SPDX-License-Identifier: MPL-2.0
//! Small application state remembered between runs, stored as CBOR.
//!
//! Only UI conveniences live here. User preferences go to `settings.toml`
//! (see [`super::config`]) and image metadata stays inside the images.
//!
//! # Path Resolution
//!
//! 1. `load_from()`/`save_to()` with an explicit directory
//! 2. `--data-dir` or the `ICED_CAPTION_DATA_DIR` environment variable
//! 3. Platform-specific data directory

use super::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    /// Directory of the last opened images; the open dialog starts there.
    #[serde(default)]
    pub last_open_directory: Option<PathBuf>,
}

impl AppState {
    /// Loads the state from the default location.
    ///
    /// A missing or unreadable file yields the default state; unreadable
    /// files are logged and otherwise ignored.
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(None)
    }

    /// Loads the state from `base_dir`, or the default location if `None`.
    #[must_use]
    pub fn load_from(base_dir: Option<PathBuf>) -> Self {
        let Some(path) = state_file_path(base_dir) else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }

        match read_state(&path) {
            Ok(state) => state,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable state file");
                Self::default()
            }
        }
    }

    /// Saves the state to the default location.
    ///
    /// # Errors
    ///
    /// See [`AppState::save_to`].
    pub fn save(&self) -> Result<()> {
        self.save_to(None)
    }

    /// Saves the state to `base_dir`, or the default location if `None`,
    /// creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if no data directory can be determined or the
    /// file cannot be written.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Result<()> {
        let path = state_file_path(base_dir)
            .ok_or_else(|| Error::Io("no data directory available".to_string()))?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let writer = BufWriter::new(fs::File::create(&path)?);
        ciborium::into_writer(self, writer).map_err(|err| Error::Io(err.to_string()))
    }

    /// Remembers the directory of the first opened image.
    ///
    /// Returns `true` if the remembered directory changed.
    pub fn remember_open_directory(&mut self, opened: &[PathBuf]) -> bool {
        let Some(parent) = opened.first().and_then(|p| p.parent()).map(Path::to_path_buf) else {
            return false;
        };
        if self.last_open_directory.as_ref() == Some(&parent) {
            return false;
        }
        self.last_open_directory = Some(parent);
        true
    }
}

fn state_file_path(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_data_dir_with_override(base_dir).map(|dir| dir.join(STATE_FILE))
}

fn read_state(path: &Path) -> Result<AppState> {
    let reader = BufReader::new(fs::File::open(path)?);
    ciborium::from_reader(reader).map_err(|err| Error::Io(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_state_has_no_last_directory() {
        assert!(AppState::default().last_open_directory.is_none());
    }

    #[test]
    fn remember_open_directory_uses_first_file_parent() {
        let mut state = AppState::default();
        let changed = state.remember_open_directory(&[
            PathBuf::from("/home/user/photos/a.jpg"),
            PathBuf::from("/elsewhere/b.jpg"),
        ]);
        assert!(changed);
        assert_eq!(
            state.last_open_directory,
            Some(PathBuf::from("/home/user/photos"))
        );
    }

    #[test]
    fn remember_open_directory_reports_no_change() {
        let mut state = AppState {
            last_open_directory: Some(PathBuf::from("/photos")),
        };
        assert!(!state.remember_open_directory(&[PathBuf::from("/photos/x.png")]));
        assert!(!state.remember_open_directory(&[]));
        assert!(!state.remember_open_directory(&[PathBuf::from("/")]));
        assert_eq!(state.last_open_directory, Some(PathBuf::from("/photos")));
    }

    #[test]
    fn save_and_load_round_trip() {
        let temp_dir = tempdir().expect("create temp dir");
        let state = AppState {
            last_open_directory: Some(PathBuf::from("/home/user/pictures")),
        };

        state
            .save_to(Some(temp_dir.path().join("nested")))
            .expect("save should succeed");
        let loaded = AppState::load_from(Some(temp_dir.path().join("nested")));

        assert_eq!(loaded, state);
    }

    #[test]
    fn load_from_missing_directory_returns_default() {
        let temp_dir = tempdir().expect("create temp dir");
        let loaded = AppState::load_from(Some(temp_dir.path().join("absent")));
        assert_eq!(loaded, AppState::default());
    }

    #[test]
    fn corrupted_file_returns_default() {
        let temp_dir = tempdir().expect("create temp dir");
        fs::write(temp_dir.path().join(STATE_FILE), b"\xff\xff not cbor").expect("write file");

        let loaded = AppState::load_from(Some(temp_dir.path().to_path_buf()));
        assert_eq!(loaded, AppState::default());
    }
}
