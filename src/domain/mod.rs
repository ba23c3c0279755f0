// SPDX-License-Identifier: MPL-2.0
//! Domain layer - core rules with no I/O.
//!
//! This module contains pure value objects and business rules. Apart from
//! `chrono` for calendar arithmetic it has no dependencies on external crates,
//! so everything here is testable without touching the filesystem.
//!
//! # Modules
//!
//! - [`metadata`]: Capture date parsing and EXIF timestamp formatting
//!   ([`CaptureDate`](metadata::CaptureDate), [`ExifTimestamp`](metadata::ExifTimestamp))

pub mod metadata;
