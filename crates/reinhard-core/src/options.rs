//! Transfer configuration

use crate::consts;
use crate::{TransferError, TransferResult};

/// How strongly the chromatic cross-correlation is matched to the source
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CrossCovariance {
    /// Leave the target's correlation alone
    Disabled,
    /// Limited correction; the ceiling is relaxed linearly across iterations
    Limited(f32),
    /// Full match on every iteration (decorrelate, then recorrelate)
    Full,
}

impl Default for CrossCovariance {
    fn default() -> Self {
        CrossCovariance::Limited(consts::DEFAULT_CROSS_COVARIANCE_LIMIT)
    }
}

/// Working colour space used for the statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ColorSpaceKind {
    /// CIE L*a*b* (D65)
    #[default]
    Lab,
    /// Log-compressed cone-response space (lαβ)
    LogLms,
}

/// Transfer options
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TransferOptions {
    /// Cross-correlation matching between the chromatic channels
    pub cross_covariance: CrossCovariance,
    /// Keep the target's lightness instead of matching the source's
    pub keep_original_shading: bool,
    /// Rescale out-of-range values instead of letting them clip
    pub scale_rather_than_clip: bool,
    /// Number of passes (at least 1)
    pub iterations: u32,
    /// Working colour space
    pub color_space: ColorSpaceKind,
}

impl Default for TransferOptions {
    fn default() -> Self {
        Self {
            cross_covariance: CrossCovariance::default(),
            keep_original_shading: true,
            scale_rather_than_clip: true,
            iterations: consts::DEFAULT_ITERATIONS,
            color_space: ColorSpaceKind::default(),
        }
    }
}

impl TransferOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cross_covariance(mut self, cross_covariance: CrossCovariance) -> Self {
        self.cross_covariance = cross_covariance;
        self
    }

    /// Shorthand for `cross_covariance(CrossCovariance::Limited(limit))`
    pub fn cross_covariance_limit(mut self, limit: f32) -> Self {
        self.cross_covariance = CrossCovariance::Limited(limit);
        self
    }

    pub fn keep_original_shading(mut self, keep: bool) -> Self {
        self.keep_original_shading = keep;
        self
    }

    pub fn scale_rather_than_clip(mut self, scale: bool) -> Self {
        self.scale_rather_than_clip = scale;
        self
    }

    pub fn iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn color_space(mut self, color_space: ColorSpaceKind) -> Self {
        self.color_space = color_space;
        self
    }

    /// Reject configurations the engine cannot run
    pub fn validate(&self) -> TransferResult<()> {
        if self.iterations == 0 {
            return Err(TransferError::InvalidConfig(
                "iterations must be at least 1".to_string(),
            ));
        }

        if let CrossCovariance::Limited(limit) = self.cross_covariance {
            if !limit.is_finite() || !(0.0..=1.0).contains(&limit) {
                return Err(TransferError::InvalidConfig(format!(
                    "cross covariance limit must lie in [0, 1], got {}",
                    limit
                )));
            }
        }

        Ok(())
    }

    /// Covariance ceiling for pass `iteration` (1-based)
    ///
    /// `None` means the adjustment is skipped for this pass.
    pub fn effective_limit(&self, iteration: u32) -> Option<f32> {
        match self.cross_covariance {
            CrossCovariance::Disabled => None,
            CrossCovariance::Full => Some(1.0),
            CrossCovariance::Limited(limit) => {
                Some(limit * iteration as f32 / self.iterations as f32)
            }
        }
    }
}
