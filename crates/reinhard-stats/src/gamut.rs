//! Gamut-safe rescaling of working images
//!
//! After the chromatic channels take on the source's statistics, some values
//! can land outside the working space's valid envelope. Clipping those would
//! change the relative magnitudes the transfer just established, so instead
//! both chromatic channels are shrunk by one shared factor (keeping hue
//! direction) and lightness is compressed affinely toward the centre of its
//! range.

use reinhard_core::{Channel, Gamut, TransferResult, WorkingImage};

use crate::parallel;

/// Overshoot measured on each part of the image; a factor above 1 means the
/// corresponding channels were rescaled by it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RescaleFactors {
    pub chroma: f32,
    pub lightness: f32,
}

impl RescaleFactors {
    pub fn chroma_applied(&self) -> bool {
        self.chroma > 1.0
    }

    pub fn lightness_applied(&self) -> bool {
        self.lightness > 1.0
    }
}

/// Largest excursion of the chromatic channels relative to their limits,
/// never below 0
pub fn chroma_overshoot(image: &WorkingImage, gamut: &Gamut) -> f32 {
    let mut scale = 0.0f32;
    for (k, channel) in [Channel::ChromaA, Channel::ChromaB].into_iter().enumerate() {
        let (min, max) = parallel::min_max(image.plane(channel));
        let limit = gamut.chroma[k];
        scale = scale.max(max / limit).max(-min / limit);
    }
    scale
}

/// Largest deviation of lightness from the centre of its range, relative to
/// the half-range
pub fn lightness_overshoot(image: &WorkingImage, gamut: &Gamut) -> f32 {
    let (min, max) = parallel::min_max(image.plane(Channel::Lightness));
    let centre = gamut.lightness_centre();
    let half = gamut.lightness_half_range();
    ((max - centre) / half).max(-(min - centre) / half)
}

/// Bring a working image back inside `gamut`
///
/// Channels already in range are returned untouched.
pub fn rescale(image: WorkingImage, gamut: &Gamut) -> TransferResult<(WorkingImage, RescaleFactors)> {
    let factors = RescaleFactors {
        chroma: chroma_overshoot(&image, gamut),
        lightness: lightness_overshoot(&image, gamut),
    };

    tracing::debug!(
        chroma = factors.chroma,
        lightness = factors.lightness,
        "gamut overshoot"
    );

    let mut image = image;

    if factors.chroma_applied() {
        let inv = 1.0 / factors.chroma;
        for channel in [Channel::ChromaA, Channel::ChromaB] {
            let scaled = parallel::map(image.plane(channel), |x| x * inv);
            image = image.with_plane(channel, scaled)?;
        }
    }

    if factors.lightness_applied() {
        let centre = gamut.lightness_centre();
        let dev = factors.lightness;
        let compressed = parallel::map(image.plane(Channel::Lightness), |x| {
            (x - centre) / dev + centre
        });
        image = image.with_plane(Channel::Lightness, compressed)?;
    }

    Ok((image, factors))
}
