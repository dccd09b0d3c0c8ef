//! Per-run diagnostics returned alongside the transferred image

use reinhard_core::Channel;
use reinhard_stats::{AdjustmentWeights, RescaleFactors};

/// What happened during one pass
#[derive(Debug, Clone, PartialEq)]
pub struct IterationRecord {
    /// 1-based pass number
    pub iteration: u32,
    /// Covariance ceiling used for this pass; `None` when the adjustment was skipped
    pub effective_limit: Option<f32>,
    /// Target chromatic correlation before adjustment (clamped)
    pub target_correlation: Option<f32>,
    /// Weights of the chromatic mix
    pub weights: Option<AdjustmentWeights>,
    /// Overshoot factors when gamut rescaling ran
    pub rescale: Option<RescaleFactors>,
    /// Target channels with zero spread, centred without scaling
    pub degenerate_channels: Vec<Channel>,
}

/// Summary of a complete transfer
#[derive(Debug, Clone, PartialEq)]
pub struct TransferReport {
    /// Name of the working colour space
    pub color_space: &'static str,
    /// Source chromatic correlation (clamped)
    pub source_correlation: f32,
    /// Source channels with zero spread
    pub source_degenerate_channels: Vec<Channel>,
    pub iterations: Vec<IterationRecord>,
}

impl TransferReport {
    /// Effective limits in pass order, skipping passes without an adjustment
    pub fn effective_limits(&self) -> Vec<f32> {
        self.iterations
            .iter()
            .filter_map(|r| r.effective_limit)
            .collect()
    }
}
