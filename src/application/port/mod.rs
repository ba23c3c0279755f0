// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! These traits use only domain types, so the session and batch logic stay
//! independent of the EXIF libraries.
//!
//! # Available Ports
//!
//! - [`metadata`]: Title and capture date reading and writing (EXIF)
//!
//! # Design Notes
//!
//! - Methods return `Result` with domain error types
//! - No `async fn`; callers run them synchronously inside `update`

pub mod metadata;

pub use metadata::{MetadataError, MetadataPort};
