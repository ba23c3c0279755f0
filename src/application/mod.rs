// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions for dependency inversion
//! - [`session`]: The editing session (open images, selection, pending titles)
//! - [`batch`]: Save and Set Date over every open image
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - The media layer implements application layer ports
//! - The presentation layer drives the session and calls batch operations
//!
//! # Example
//!
//! ```ignore
//! use iced_caption::application::{batch, session::TitleSession};
//! use iced_caption::media::metadata_writer::ExifMetadataStore;
//!
//! let store = ExifMetadataStore;
//! let mut session = TitleSession::new();
//! session.open(paths, &store);
//! session.set_title_input("Harbour at dusk");
//! let report = batch::save_titles(&mut session, &store);
//! ```

pub mod batch;
pub mod port;
pub mod session;
