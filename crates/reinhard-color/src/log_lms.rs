//! lαβ working space
//!
//! Linear RGB-ish display values are mapped to cone-like responses with a
//! fixed sensor matrix, log-compressed, and then rotated so the first axis
//! carries achromatic brightness and the other two are opponent chromatic
//! axes. The inverse undoes each stage in reverse order.

use std::sync::OnceLock;

use reinhard_core::{DisplayImage, Gamut, PixelLayout, TransferResult, WorkingImage};

use crate::matrix::{self, Mat3};
use crate::space::{map_from_working, map_to_working, ColorSpace};

/// Sensor-response matrix (RGB to LMS)
pub const RGB_TO_LMS: Mat3 = [
    [0.3811, 0.5783, 0.0402],
    [0.1967, 0.7244, 0.0782],
    [0.0241, 0.1288, 0.8444],
];

const INV_SQRT_3: f32 = 0.577_350_26;
const INV_SQRT_6: f32 = 0.408_248_3;
const INV_SQRT_2: f32 = std::f32::consts::FRAC_1_SQRT_2;

/// Orthogonal rotation from log-LMS to lαβ
pub const LOG_LMS_TO_LAB: Mat3 = [
    [INV_SQRT_3, INV_SQRT_3, INV_SQRT_3],
    [INV_SQRT_6, INV_SQRT_6, -2.0 * INV_SQRT_6],
    [INV_SQRT_2, -INV_SQRT_2, 0.0],
];

/// Responses are floored here before the logarithm
pub const RESPONSE_FLOOR: f32 = 0.07;

/// lαβ colour space
#[derive(Debug, Clone, Copy, Default)]
pub struct LogLms;

fn lms_to_rgb() -> &'static Mat3 {
    static INVERSE: OnceLock<Mat3> = OnceLock::new();
    INVERSE.get_or_init(|| {
        matrix::invert(&RGB_TO_LMS).expect("RGB_TO_LMS is invertible")
    })
}

fn lab_to_log_lms() -> &'static Mat3 {
    static INVERSE: OnceLock<Mat3> = OnceLock::new();
    INVERSE.get_or_init(|| {
        matrix::invert(&LOG_LMS_TO_LAB).expect("LOG_LMS_TO_LAB is invertible")
    })
}

/// Convert canonical RGB in [0, 1] to `[l, α, β]`
#[inline]
pub fn rgb_to_lab(rgb: [f32; 3]) -> [f32; 3] {
    let lms = matrix::apply(&RGB_TO_LMS, rgb).map(|v| v.max(RESPONSE_FLOOR).log10());
    matrix::apply(&LOG_LMS_TO_LAB, lms)
}

/// Convert `[l, α, β]` back to (unclamped) RGB
#[inline]
pub fn lab_to_rgb(lab: [f32; 3]) -> [f32; 3] {
    let lms = matrix::apply(lab_to_log_lms(), lab).map(|v| 10.0f32.powf(v));
    matrix::apply(lms_to_rgb(), lms)
}

impl ColorSpace for LogLms {
    fn name(&self) -> &'static str {
        "lαβ"
    }

    /// The envelope reachable from displayable input: every log response
    /// lies in `[log10(floor), 0]`, and the rotation rows bound each axis.
    fn gamut(&self) -> Gamut {
        let floor = RESPONSE_FLOOR.log10();
        Gamut {
            lightness: (3.0 * floor * INV_SQRT_3, 0.0),
            chroma: [-2.0 * floor * INV_SQRT_6, -floor * INV_SQRT_2],
        }
    }

    fn to_working(&self, image: &DisplayImage) -> TransferResult<WorkingImage> {
        map_to_working(image, rgb_to_lab)
    }

    fn from_working(
        &self,
        image: &WorkingImage,
        layout: PixelLayout,
    ) -> TransferResult<DisplayImage> {
        map_from_working(image, layout, lab_to_rgb)
    }
}
