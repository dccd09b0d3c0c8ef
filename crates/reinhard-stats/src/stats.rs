//! Per-channel mean and standard deviation, and the standardise /
//! de-standardise pair built on them

use reinhard_core::consts::MIN_STD_DEV;
use reinhard_core::{Plane, WorkingImage};

use crate::parallel;

/// Mean and population standard deviation of one channel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelStats {
    pub mean: f32,
    pub std_dev: f32,
}

impl ChannelStats {
    /// Two-pass mean and population standard deviation, accumulated in f64
    pub fn of(plane: &Plane) -> Self {
        let n = plane.len() as f64;
        let mean = parallel::sum(plane, f64::from) / n;
        let variance = parallel::sum(plane, |x| {
            let d = x as f64 - mean;
            d * d
        }) / n;

        Self {
            mean: mean as f32,
            std_dev: variance.sqrt() as f32,
        }
    }

    /// A channel whose spread is too small (or not finite) to divide by
    pub fn is_degenerate(&self) -> bool {
        !(self.std_dev.is_finite() && self.std_dev > MIN_STD_DEV)
    }
}

/// Statistics for all three channels of a working image
pub fn image_stats(image: &WorkingImage) -> [ChannelStats; 3] {
    let [l, a, b] = image.planes();
    [ChannelStats::of(l), ChannelStats::of(a), ChannelStats::of(b)]
}

/// `(x - mean) / std_dev` for every sample
///
/// A degenerate channel is only centred: its spread cannot be normalised, so
/// it is treated as already having unit scale and comes out as all zeros.
pub fn standardize(plane: &Plane, stats: &ChannelStats) -> Plane {
    let mean = stats.mean;
    if stats.is_degenerate() {
        return parallel::map(plane, |x| x - mean);
    }

    let inv_std = 1.0 / stats.std_dev;
    parallel::map(plane, |x| (x - mean) * inv_std)
}

/// `x * std_dev + mean` for every sample
pub fn destandardize(plane: &Plane, stats: &ChannelStats) -> Plane {
    let ChannelStats { mean, std_dev } = *stats;
    parallel::map(plane, |x| x * std_dev + mean)
}
