// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations are Fluent `.ftl` files embedded from `assets/i18n/` at
//! build time, so the binary needs no data files at runtime.
//!
//! # Features
//!
//! - Locale resolved from CLI, config, then OS settings
//! - Fallback to `en-US` for missing locales and missing keys
//! - Fluent arguments for messages naming a file or a count

pub mod fluent;
