//! Constants used throughout the colour transfer implementation

/// Default ceiling on the cross-covariance correction (0 disables, 1 fully matches)
pub const DEFAULT_CROSS_COVARIANCE_LIMIT: f32 = 0.5;

/// Default number of transfer passes
pub const DEFAULT_ITERATIONS: u32 = 2;

/// Measured correlations are clamped to this magnitude before the weight
/// formulas, which divide by `1 ± r`.
pub const MAX_CORRELATION: f32 = 0.999;

/// Standard deviations at or below this are treated as zero-variance channels
pub const MIN_STD_DEV: f32 = 1e-6;

/// Number of channels in display and working images
pub const CHANNELS: usize = 3;

/// Pixel count above which per-pixel passes are dispatched to rayon
pub const PARALLEL_THRESHOLD: usize = 16 * 1024;
