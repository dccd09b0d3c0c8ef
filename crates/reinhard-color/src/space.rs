//! The working colour space abstraction
//!
//! A colour space turns a display image into three working planes and back.
//! Both directions are per-pixel pure functions, so the passes here split the
//! image across rayon workers once it is large enough to be worth it.

use rayon::prelude::*;
use reinhard_core::consts::{CHANNELS, PARALLEL_THRESHOLD};
use reinhard_core::{
    ColorSpaceKind, DisplayImage, Gamut, PixelLayout, Sample, TransferResult, WorkingImage,
};

use crate::{CieLab, LogLms};

/// A reversible mapping between display pixels and working-space planes
pub trait ColorSpace: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Valid envelope of the working channels
    fn gamut(&self) -> Gamut;

    /// Convert a display image to working space
    fn to_working(&self, image: &DisplayImage) -> TransferResult<WorkingImage>;

    /// Convert back to an 8-bit display image in the requested layout
    ///
    /// Values that fall outside the displayable range saturate at 0 and 255.
    fn from_working(
        &self,
        image: &WorkingImage,
        layout: PixelLayout,
    ) -> TransferResult<DisplayImage>;
}

static CIE_LAB: CieLab = CieLab;
static LOG_LMS: LogLms = LogLms;

/// The colour space implementation for a configured kind
pub fn color_space(kind: ColorSpaceKind) -> &'static dyn ColorSpace {
    match kind {
        ColorSpaceKind::Lab => &CIE_LAB,
        ColorSpaceKind::LogLms => &LOG_LMS,
    }
}

/// Apply `f` to every pixel's canonical RGB in [0, 1], producing working planes
pub(crate) fn map_to_working<F>(image: &DisplayImage, f: F) -> TransferResult<WorkingImage>
where
    F: Fn([f32; 3]) -> [f32; 3] + Sync,
{
    let layout = image.layout;
    let src = image.as_bytes();
    let mut out = vec![0.0f32; src.len()];

    let convert = |(s, d): (&[u8], &mut [f32])| {
        let rgb = layout.to_rgb(s).map(u8::to_f32);
        d.copy_from_slice(&f(rgb));
    };

    if image.pixel_count() >= PARALLEL_THRESHOLD {
        src.par_chunks_exact(CHANNELS)
            .zip(out.par_chunks_exact_mut(CHANNELS))
            .for_each(convert);
    } else {
        src.chunks_exact(CHANNELS)
            .zip(out.chunks_exact_mut(CHANNELS))
            .for_each(convert);
    }

    WorkingImage::from_interleaved(image.dimensions, &out)
}

/// Apply `f` to every working pixel, producing RGB in [0, 1] that is then
/// rounded and saturated to 8 bits
pub(crate) fn map_from_working<F>(
    image: &WorkingImage,
    layout: PixelLayout,
    f: F,
) -> TransferResult<DisplayImage>
where
    F: Fn([f32; 3]) -> [f32; 3] + Sync,
{
    let mut out = vec![0u8; image.pixel_count() * CHANNELS];

    let convert = |(i, d): (usize, &mut [u8])| {
        let rgb = f(image.pixel(i)).map(u8::from_f32);
        layout.write_rgb(rgb, d);
    };

    if image.pixel_count() >= PARALLEL_THRESHOLD {
        out.par_chunks_exact_mut(CHANNELS).enumerate().for_each(convert);
    } else {
        out.chunks_exact_mut(CHANNELS).enumerate().for_each(convert);
    }

    DisplayImage::new(image.dimensions(), layout, out)
}
