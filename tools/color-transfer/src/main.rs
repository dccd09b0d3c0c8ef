//! Transfer the colour distribution of one image onto another

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use reinhard::{ColorSpaceKind, CrossCovariance, TransferOptions, TransferReport};

#[derive(Parser)]
#[command(name = "color-transfer")]
#[command(about = "Statistical colour transfer between images (enhanced Reinhard method)")]
#[command(version)]
struct Cli {
    /// Image whose colour distribution is copied
    #[arg(short, long)]
    source: PathBuf,

    /// Image to recolour
    #[arg(short, long)]
    target: PathBuf,

    /// Where to write the result; the format follows the extension
    #[arg(short, long)]
    output: PathBuf,

    /// Cross-covariance limit in [0, 1]
    #[arg(long, conflicts_with_all = ["full_covariance", "no_covariance"])]
    limit: Option<f32>,

    /// Match the chromatic correlation fully on every pass
    #[arg(long, conflicts_with = "no_covariance")]
    full_covariance: bool,

    /// Skip cross-covariance matching
    #[arg(long)]
    no_covariance: bool,

    /// Match the source's lightness instead of keeping the target's shading
    #[arg(long)]
    match_shading: bool,

    /// Let out-of-gamut values clip instead of rescaling them
    #[arg(long)]
    clip: bool,

    /// Number of passes
    #[arg(short, long)]
    iterations: Option<u32>,

    /// Working colour space
    #[arg(long, value_enum)]
    space: Option<Space>,

    /// JSON file with transfer options; flags take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print per-pass diagnostics
    #[arg(long)]
    report: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Space {
    Lab,
    LogLms,
}

impl From<Space> for ColorSpaceKind {
    fn from(space: Space) -> Self {
        match space {
            Space::Lab => ColorSpaceKind::Lab,
            Space::LogLms => ColorSpaceKind::LogLms,
        }
    }
}

impl Cli {
    /// Options from the config file (or defaults), overridden by flags
    fn options(&self) -> anyhow::Result<TransferOptions> {
        let mut options = match &self.config {
            Some(path) => read_config(path)?,
            None => TransferOptions::default(),
        };

        if let Some(limit) = self.limit {
            options.cross_covariance = CrossCovariance::Limited(limit);
        }
        if self.full_covariance {
            options.cross_covariance = CrossCovariance::Full;
        }
        if self.no_covariance {
            options.cross_covariance = CrossCovariance::Disabled;
        }
        if self.match_shading {
            options.keep_original_shading = false;
        }
        if self.clip {
            options.scale_rather_than_clip = false;
        }
        if let Some(iterations) = self.iterations {
            options.iterations = iterations;
        }
        if let Some(space) = self.space {
            options.color_space = space.into();
        }

        Ok(options)
    }
}

fn read_config(path: &Path) -> anyhow::Result<TransferOptions> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse config {}", path.display()))
}

fn print_report(report: &TransferReport) {
    println!("color space:        {}", report.color_space);
    println!("source correlation: {:.4}", report.source_correlation);
    if !report.source_degenerate_channels.is_empty() {
        println!("source flat:        {:?}", report.source_degenerate_channels);
    }

    for record in &report.iterations {
        print!("pass {}:", record.iteration);
        match (record.effective_limit, record.target_correlation, record.weights) {
            (Some(limit), Some(tcorr), Some(w)) => print!(
                " limit={:.3} tcorr={:.4} w1={:.4} w2={:.4}{}",
                limit,
                tcorr,
                w.w1,
                w.w2,
                if w.clamped { " (clamped)" } else { "" }
            ),
            _ => print!(" covariance skipped"),
        }
        if let Some(scale) = record.rescale {
            print!(" chroma_scale={:.4} lightness_scale={:.4}", scale.chroma, scale.lightness);
        }
        if !record.degenerate_channels.is_empty() {
            print!(" flat={:?}", record.degenerate_channels);
        }
        println!();
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let cli = Cli::parse();
    let options = cli.options()?;
    tracing::debug!(?options, "resolved options");

    let report = reinhard::transfer_files(&cli.source, &cli.target, &cli.output, &options)
        .with_context(|| {
            format!(
                "Failed to transfer {} onto {}",
                cli.source.display(),
                cli.target.display()
            )
        })?;

    if cli.report {
        print_report(&report);
    }

    tracing::info!(output = %cli.output.display(), "wrote result");
    Ok(())
}
