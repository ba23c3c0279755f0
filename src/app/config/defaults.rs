// SPDX-License-Identifier: MPL-2.0
//! Default values and bounds for configurable settings.
//!
//! # Categories
//!
//! - **Thumbnails**: carousel thumbnail box
//! - **Preview**: height of the large preview

// ==========================================================================
// Thumbnail Defaults
// ==========================================================================

/// Default thumbnail box width in pixels.
pub const DEFAULT_THUMBNAIL_WIDTH: u32 = 90;

/// Default thumbnail box height in pixels.
pub const DEFAULT_THUMBNAIL_HEIGHT: u32 = 120;

/// Smallest accepted thumbnail side.
pub const MIN_THUMBNAIL_SIDE: u32 = 32;

/// Largest accepted thumbnail side.
pub const MAX_THUMBNAIL_SIDE: u32 = 320;

// ==========================================================================
// Preview Defaults
// ==========================================================================

/// Default preview area height in pixels.
pub const DEFAULT_PREVIEW_HEIGHT: u32 = 400;

/// Smallest accepted preview height.
pub const MIN_PREVIEW_HEIGHT: u32 = 120;

/// Largest accepted preview height.
pub const MAX_PREVIEW_HEIGHT: u32 = 2000;

const _: () = {
    assert!(DEFAULT_THUMBNAIL_WIDTH >= MIN_THUMBNAIL_SIDE);
    assert!(DEFAULT_THUMBNAIL_HEIGHT <= MAX_THUMBNAIL_SIDE);
    assert!(DEFAULT_PREVIEW_HEIGHT >= MIN_PREVIEW_HEIGHT);
    assert!(DEFAULT_PREVIEW_HEIGHT <= MAX_PREVIEW_HEIGHT);
};
