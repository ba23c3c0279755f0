// SPDX-License-Identifier: MPL-2.0
//! Image decoding into iced handles for the preview and the carousel.

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }

    fn from_dynamic(img: &image_rs::DynamicImage) -> Self {
        let (width, height) = img.dimensions();
        Self::from_rgba(width, height, img.to_rgba8().into_vec())
    }
}

fn decode(path: &Path) -> Result<image_rs::DynamicImage> {
    let img_bytes = fs::read(path)?;
    Ok(image_rs::load_from_memory(&img_bytes)?)
}

/// Load an image for the preview pane, scaled down to at most `max_height`
/// pixels tall. Only the height is bounded.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Decode`] if
/// its content is not a supported image.
pub fn load_preview<P: AsRef<Path>>(path: P, max_height: u32) -> Result<ImageData> {
    load_thumbnail(path, u32::MAX, max_height)
}

/// Load an image scaled down to fit `max_width` × `max_height`, keeping its
/// aspect ratio. Images already smaller than the box are not enlarged.
///
/// # Errors
///
/// Same as [`load_preview`]; a box with a zero side is [`Error::Decode`].
pub fn load_thumbnail<P: AsRef<Path>>(path: P, max_width: u32, max_height: u32) -> Result<ImageData> {
    if max_width == 0 || max_height == 0 {
        return Err(Error::Decode("thumbnail size must be non-zero".into()));
    }

    let img = decode(path.as_ref())?;
    let (width, height) = img.dimensions();
    if width <= max_width && height <= max_height {
        return Ok(ImageData::from_dynamic(&img));
    }
    Ok(ImageData::from_dynamic(&img.thumbnail(max_width, max_height)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use tempfile::tempdir;

    fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> std::path::PathBuf {
        let path = dir.join(name);
        RgbaImage::from_pixel(width, height, Rgba([255, 0, 0, 255]))
            .save(&path)
            .expect("failed to write temporary png");
        path
    }

    #[test]
    fn load_png_image_returns_expected_dimensions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = write_png(temp_dir.path(), "sample.png", 4, 2);

        let data = load_preview(&image_path, 400).expect("png should load successfully");
        assert_eq!(data.width, 4);
        assert_eq!(data.height, 2);
    }

    #[test]
    fn preview_is_bounded_by_height_only() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = write_png(temp_dir.path(), "panorama.png", 1200, 300);

        let data = load_preview(&image_path, 100).expect("png should load");
        assert_eq!((data.width, data.height), (400, 100));
    }

    #[test]
    fn thumbnail_fits_box_and_keeps_aspect_ratio() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = write_png(temp_dir.path(), "wide.png", 400, 200);

        let data = load_thumbnail(&image_path, 90, 120).expect("png should load");
        assert_eq!(data.width, 90);
        assert_eq!(data.height, 45);
    }

    #[test]
    fn thumbnail_does_not_enlarge_small_images() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = write_png(temp_dir.path(), "tiny.png", 10, 8);

        let data = load_thumbnail(&image_path, 90, 120).expect("png should load");
        assert_eq!((data.width, data.height), (10, 8));
    }

    #[test]
    fn thumbnail_rejects_zero_box() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = write_png(temp_dir.path(), "sample.png", 4, 4);

        assert!(matches!(load_thumbnail(&image_path, 0, 120), Err(Error::Decode(_))));
    }

    #[test]
    fn load_missing_image_returns_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing_path = temp_dir.path().join("does_not_exist.png");

        match load_preview(&missing_path, 400) {
            Err(Error::Io(_)) => {}
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn load_invalid_png_bytes_returns_decode_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let bad_path = temp_dir.path().join("invalid.png");
        fs::write(&bad_path, b"not a png").expect("failed to write invalid data");

        match load_thumbnail(&bad_path, 90, 120) {
            Err(Error::Decode(message)) => assert!(!message.is_empty()),
            other => panic!("expected Decode error for invalid png, got {other:?}"),
        }
    }
}
