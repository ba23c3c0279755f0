// SPDX-License-Identifier: MPL-2.0
//! `iced_caption` batch-edits the title (EXIF image description) and the
//! capture date of photos through a thumbnail browser built with Iced.
//!
//! Titles are edited one image at a time and written to every open file on
//! Save. Set Date stamps all open files with the same day, one second apart
//! in selection order, starting at noon.

#![doc(html_root_url = "https://docs.rs/iced_caption/0.1.0")]

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;

#[cfg(test)]
mod test_utils;
