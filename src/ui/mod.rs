// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! takes a borrowed `ViewContext` and emits its own `Message`, which the
//! application wraps and routes.
//!
//! # Screens
//!
//! - [`toolbar`] - Open, close, capture date and save
//! - [`browser`] - Preview, title editor and thumbnail carousel
//!
//! # Shared Infrastructure
//!
//! - [`notifications`] - Toast notification system for user feedback
//! - [`styles`] - Widget styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod browser;
pub mod design_tokens;
pub mod notifications;
pub mod styles;
pub mod theming;
pub mod toolbar;
