//! Reading and writing display images with the `image` crate

use std::path::Path;

use image::{DynamicImage, RgbImage};
use reinhard_core::{Dimensions, DisplayImage, PixelLayout, TransferError, TransferResult};

fn codec_error(err: image::ImageError) -> TransferError {
    match err {
        image::ImageError::IoError(io) => TransferError::Io(io),
        other => TransferError::Image(other.to_string()),
    }
}

/// Wrap an `image` RGB buffer
pub fn from_rgb_image(image: &RgbImage) -> TransferResult<DisplayImage> {
    let (width, height) = image.dimensions();
    DisplayImage::new(
        Dimensions::new(width, height),
        PixelLayout::Rgb,
        image.as_raw().clone(),
    )
}

/// Convert to an `image` RGB buffer, re-interleaving if needed
pub fn to_rgb_image(image: &DisplayImage) -> TransferResult<RgbImage> {
    let rgb = image.to_layout(PixelLayout::Rgb);
    let (width, height) = (rgb.width(), rgb.height());
    let expected = rgb.pixel_count() * 3;
    let actual = rgb.as_bytes().len();

    RgbImage::from_raw(width, height, rgb.into_bytes())
        .ok_or(TransferError::BufferSizeMismatch { expected, actual })
}

/// Load any format `image` can decode; alpha is dropped
pub fn load_image<P: AsRef<Path>>(path: P) -> TransferResult<DisplayImage> {
    let path = path.as_ref();
    let decoded: DynamicImage = image::open(path).map_err(codec_error)?;
    tracing::debug!(
        path = %path.display(),
        width = decoded.width(),
        height = decoded.height(),
        "loaded image"
    );
    from_rgb_image(&decoded.to_rgb8())
}

/// Save with the format implied by the file extension
pub fn save_image<P: AsRef<Path>>(image: &DisplayImage, path: P) -> TransferResult<()> {
    let path = path.as_ref();
    to_rgb_image(image)?.save(path).map_err(codec_error)?;
    tracing::debug!(path = %path.display(), "saved image");
    Ok(())
}
