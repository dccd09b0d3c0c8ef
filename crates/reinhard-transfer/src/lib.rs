//! Iterated statistical colour transfer
//!
//! The engine converts the source once, keeps its statistics and
//! standardised chromatic planes, then runs the configured number of passes
//! over the target. Each pass re-measures the target, mixes its chromatic
//! channels toward the source correlation under a ceiling that grows
//! linearly from `limit / N` to `limit`, hands the chromatic channels the
//! source's mean and spread, optionally matches lightness, keeps values in
//! gamut and converts back to 8 bits for the next pass.

pub mod report;

pub use report::{IterationRecord, TransferReport};

use reinhard_color::{color_space, ColorSpace};
use reinhard_core::*;
use reinhard_stats::{
    cross_correlation, destandardize, image_stats, rescale, standardize, ChannelStats,
    CovarianceAdjustment, Decorrelating, Limited,
};

/// Source image reduced to what every pass needs
#[derive(Debug, Clone)]
pub struct SourceProfile {
    pub stats: [ChannelStats; 3],
    /// Standardised chromatic planes
    pub chroma: [Plane; 2],
    /// Correlation of the standardised chromatic planes (clamped)
    pub correlation: f32,
}

impl SourceProfile {
    /// Measure a source image already in working space
    pub fn from_working(image: &WorkingImage) -> Self {
        let stats = image_stats(image);
        let chroma = [
            standardize(image.plane(Channel::ChromaA), &stats[Channel::ChromaA.index()]),
            standardize(image.plane(Channel::ChromaB), &stats[Channel::ChromaB.index()]),
        ];
        let correlation = cross_correlation(&chroma[0], &chroma[1]);

        Self {
            stats,
            chroma,
            correlation,
        }
    }

    pub fn degenerate_channels(&self) -> Vec<Channel> {
        degenerate(&self.stats, &Channel::ALL)
    }
}

/// Output of one pass, still in working space
#[derive(Debug, Clone)]
pub struct PassOutput {
    pub working: WorkingImage,
    pub record: IterationRecord,
}

/// Colour transfer engine
///
/// Holds only validated options, so one engine can serve concurrent runs on
/// independent images.
#[derive(Debug, Clone)]
pub struct TransferEngine {
    options: TransferOptions,
}

impl TransferEngine {
    /// Validate `options` and build an engine
    pub fn new(options: TransferOptions) -> TransferResult<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &TransferOptions {
        &self.options
    }

    pub fn color_space(&self) -> &'static dyn ColorSpace {
        color_space(self.options.color_space)
    }

    /// Convert and measure the source
    pub fn prepare_source(&self, source: &DisplayImage) -> TransferResult<SourceProfile> {
        let working = self.color_space().to_working(source)?;
        Ok(SourceProfile::from_working(&working))
    }

    /// Covariance strategy for pass `iteration`, with its effective limit
    fn adjuster(&self, iteration: u32) -> Option<(Box<dyn CovarianceAdjustment>, f32)> {
        let limit = self.options.effective_limit(iteration)?;
        let strategy: Box<dyn CovarianceAdjustment> = match self.options.cross_covariance {
            CrossCovariance::Full => Box::new(Decorrelating),
            _ => Box::new(Limited::new(limit)),
        };
        Some((strategy, limit))
    }

    /// Run every stage of pass `iteration` except the conversion back to display
    pub fn transfer_pass(
        &self,
        source: &SourceProfile,
        target: &WorkingImage,
        iteration: u32,
    ) -> TransferResult<PassOutput> {
        let tstats = image_stats(target);
        let mut degenerate_channels =
            degenerate(&tstats, &[Channel::ChromaA, Channel::ChromaB]);

        let [a, b] = [Channel::ChromaA, Channel::ChromaB]
            .map(|c| standardize(target.plane(c), &tstats[c.index()]));

        let mut record = IterationRecord {
            iteration,
            effective_limit: None,
            target_correlation: None,
            weights: None,
            rescale: None,
            degenerate_channels: Vec::new(),
        };

        let [a, b] = match self.adjuster(iteration) {
            Some((strategy, limit)) => {
                let outcome = strategy.adjust([&a, &b], source.correlation);
                record.effective_limit = Some(limit);
                record.target_correlation = Some(outcome.target_correlation);
                record.weights = Some(outcome.weights);
                outcome.planes
            }
            None => [a, b],
        };

        // The transfer itself: the target's chromatic spread becomes the source's
        let a = destandardize(&a, &source.stats[Channel::ChromaA.index()]);
        let b = destandardize(&b, &source.stats[Channel::ChromaB.index()]);

        let mut working = target
            .clone()
            .with_plane(Channel::ChromaA, a)?
            .with_plane(Channel::ChromaB, b)?;

        if !self.options.keep_original_shading {
            let l = Channel::Lightness;
            let lstats = &tstats[l.index()];
            if lstats.is_degenerate() {
                degenerate_channels.insert(0, l);
            }
            let shading = destandardize(
                &standardize(target.plane(l), lstats),
                &source.stats[l.index()],
            );
            working = working.with_plane(l, shading)?;
        }

        for channel in &degenerate_channels {
            tracing::warn!(
                iteration,
                channel = ?channel,
                "target channel has no variance; centred without scaling"
            );
        }
        record.degenerate_channels = degenerate_channels;

        if self.options.scale_rather_than_clip {
            let (rescaled, factors) = rescale(working, &self.color_space().gamut())?;
            working = rescaled;
            record.rescale = Some(factors);
        }

        tracing::debug!(
            iteration,
            effective_limit = ?record.effective_limit,
            target_correlation = ?record.target_correlation,
            "pass complete"
        );

        Ok(PassOutput { working, record })
    }

    /// Transfer the colour distribution of `source` onto `target`
    pub fn transfer(&self, source: &DisplayImage, target: &DisplayImage) -> TransferResult<DisplayImage> {
        self.transfer_with_report(source, target).map(|(image, _)| image)
    }

    /// Like [`transfer`](Self::transfer), also returning per-pass diagnostics
    pub fn transfer_with_report(
        &self,
        source: &DisplayImage,
        target: &DisplayImage,
    ) -> TransferResult<(DisplayImage, TransferReport)> {
        let space = self.color_space();
        let profile = self.prepare_source(source)?;

        tracing::info!(
            color_space = space.name(),
            iterations = self.options.iterations,
            source = %format_args!("{}x{}", source.width(), source.height()),
            target = %format_args!("{}x{}", target.width(), target.height()),
            "starting colour transfer"
        );

        let source_degenerate = profile.degenerate_channels();
        if !source_degenerate.is_empty() {
            tracing::warn!(channels = ?source_degenerate, "source has zero-variance channels");
        }

        let mut report = TransferReport {
            color_space: space.name(),
            source_correlation: profile.correlation,
            source_degenerate_channels: source_degenerate,
            iterations: Vec::with_capacity(self.options.iterations as usize),
        };

        let mut current = target.clone();
        for iteration in 1..=self.options.iterations {
            let working = space.to_working(&current)?;
            let pass = self.transfer_pass(&profile, &working, iteration)?;
            current = space.from_working(&pass.working, target.layout)?;
            report.iterations.push(pass.record);
        }

        tracing::info!(passes = report.iterations.len(), "colour transfer complete");

        Ok((current, report))
    }
}

fn degenerate(stats: &[ChannelStats; 3], channels: &[Channel]) -> Vec<Channel> {
    channels
        .iter()
        .copied()
        .filter(|c| stats[c.index()].is_degenerate())
        .collect()
}
