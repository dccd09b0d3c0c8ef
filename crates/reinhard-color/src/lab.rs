//! CIE L*a*b* working space
//!
//! The L*a*b* maths is delegated to `palette` (sRGB transfer curve, D65
//! reference white). L* lies in [0, 100]; a* and b* are treated as valid in
//! [-127, 127], the range an 8-bit L*a*b* encoding can hold.

use palette::{IntoColor, Lab, Srgb};
use reinhard_core::{DisplayImage, Gamut, PixelLayout, TransferResult, WorkingImage};

use crate::space::{map_from_working, map_to_working, ColorSpace};

/// Valid lightness range
pub const LIGHTNESS_RANGE: (f32, f32) = (0.0, 100.0);

/// Valid magnitude of a* and b*
pub const CHROMA_LIMIT: f32 = 127.0;

/// a* and b* magnitudes below this are float noise from converting a neutral
/// colour and are snapped to 0
pub const NEUTRAL_CHROMA: f32 = 1e-3;

/// CIE L*a*b* (D65) colour space
#[derive(Debug, Clone, Copy, Default)]
pub struct CieLab;

/// Convert one sRGB colour in [0, 1] to `[L*, a*, b*]`
#[inline]
pub fn srgb_to_lab(rgb: [f32; 3]) -> [f32; 3] {
    let lab: Lab = Srgb::new(rgb[0], rgb[1], rgb[2]).into_color();
    let snap = |v: f32| if v.abs() < NEUTRAL_CHROMA { 0.0 } else { v };
    [lab.l, snap(lab.a), snap(lab.b)]
}

/// Convert `[L*, a*, b*]` to sRGB; out-of-gamut values fall outside [0, 1]
#[inline]
pub fn lab_to_srgb(lab: [f32; 3]) -> [f32; 3] {
    let lab: Lab = Lab::new(lab[0], lab[1], lab[2]);
    let rgb: Srgb = lab.into_color();
    [rgb.red, rgb.green, rgb.blue]
}

impl ColorSpace for CieLab {
    fn name(&self) -> &'static str {
        "CIE L*a*b*"
    }

    fn gamut(&self) -> Gamut {
        Gamut {
            lightness: LIGHTNESS_RANGE,
            chroma: [CHROMA_LIMIT, CHROMA_LIMIT],
        }
    }

    fn to_working(&self, image: &DisplayImage) -> TransferResult<WorkingImage> {
        map_to_working(image, srgb_to_lab)
    }

    fn from_working(
        &self,
        image: &WorkingImage,
        layout: PixelLayout,
    ) -> TransferResult<DisplayImage> {
        map_from_working(image, layout, lab_to_srgb)
    }
}
