//! # reinhard - statistical colour transfer
//!
//! Reshapes the colour distribution of a *target* image to match a *source*
//! image by aligning per-channel mean, standard deviation and the
//! cross-correlation of the two chromatic channels in a perceptual working
//! space (an enhanced form of Reinhard et al., "Color Transfer between
//! Images", 2001).
//!
//! ## Quick Start
//!
//! ```no_run
//! use reinhard::{transfer_files, TransferOptions};
//!
//! let options = TransferOptions::default()
//!     .cross_covariance_limit(0.5)
//!     .iterations(2);
//!
//! transfer_files("source.jpg", "target.jpg", "processed.png", &options).unwrap();
//! ```
//!
//! ### In memory
//!
//! ```
//! use reinhard::{Dimensions, DisplayImage, PixelLayout, TransferEngine, TransferOptions};
//!
//! let dims = Dimensions::new(16, 16);
//! let source = DisplayImage::from_fn(dims, PixelLayout::Rgb, |x, y| {
//!     [150 + x as u8 * 4, 60 + y as u8 * 2, 40]
//! }).unwrap();
//! let target = DisplayImage::from_fn(dims, PixelLayout::Rgb, |x, y| {
//!     [40, 80 + x as u8 * 3, 120 + y as u8 * 5]
//! }).unwrap();
//!
//! let engine = TransferEngine::new(TransferOptions::default()).unwrap();
//! let result = engine.transfer(&source, &target).unwrap();
//! assert_eq!(result.dimensions, dims);
//! ```
//!
//! ## Options
//!
//! - cross-covariance matching: limited (default 0.5), full or disabled
//! - keep the target's shading or match the source's lightness
//! - rescale out-of-gamut values instead of clipping
//! - several passes, relaxing the covariance limit on each
//! - CIE L*a*b* or lαβ working space

pub mod io;

pub use io::{from_rgb_image, load_image, save_image, to_rgb_image};

pub use reinhard_color::{color_space, CieLab, ColorSpace, LogLms};
pub use reinhard_core::{
    Channel, ColorSpaceKind, CrossCovariance, Dimensions, DisplayImage, Gamut, PixelLayout,
    Plane, TransferError, TransferOptions, TransferResult, WorkingImage,
};
pub use reinhard_stats::{
    adjust_covariance, cross_correlation, destandardize, image_stats, rescale, standardize,
    AdjustmentWeights, ChannelStats, CovarianceAdjustment, Decorrelating, Limited,
    RescaleFactors,
};
pub use reinhard_transfer::{
    IterationRecord, PassOutput, SourceProfile, TransferEngine, TransferReport,
};

use std::path::Path;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Load `source` and `target`, transfer, and write the result to `output`
pub fn transfer_files<P, Q, R>(
    source: P,
    target: Q,
    output: R,
    options: &TransferOptions,
) -> TransferResult<TransferReport>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    R: AsRef<Path>,
{
    let engine = TransferEngine::new(options.clone())?;
    let source = load_image(source)?;
    let target = load_image(target)?;

    let (result, report) = engine.transfer_with_report(&source, &target)?;
    save_image(&result, output)?;
    Ok(report)
}
