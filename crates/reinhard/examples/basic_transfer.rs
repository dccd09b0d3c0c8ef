//! Example demonstrating a colour transfer between two synthetic images
//!
//! ```bash
//! cargo run --example basic_transfer
//! ```

use reinhard::{
    color_space, image_stats, save_image, Channel, Dimensions, DisplayImage, PixelLayout,
    TransferEngine, TransferOptions,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Statistical Colour Transfer - Example");
    println!("=====================================\n");

    let dims = Dimensions::new(256, 256);

    // Warm sunset-like source
    let source = DisplayImage::from_fn(dims, PixelLayout::Rgb, |x, y| {
        [
            (160 + x / 4) as u8,
            (60 + y / 3) as u8,
            (20 + (x + y) / 16) as u8,
        ]
    })?;

    // Cool blue target
    let target = DisplayImage::from_fn(dims, PixelLayout::Rgb, |x, y| {
        [
            (20 + y / 8) as u8,
            (70 + x / 4) as u8,
            (120 + (x + y) / 5) as u8,
        ]
    })?;

    let options = TransferOptions::default()
        .cross_covariance_limit(0.5)
        .iterations(2);
    println!("Options: {:?}\n", options);

    let engine = TransferEngine::new(options)?;
    let (result, report) = engine.transfer_with_report(&source, &target)?;

    println!("Working space: {}", report.color_space);
    println!("Source chroma correlation: {:.4}", report.source_correlation);
    for record in &report.iterations {
        println!(
            "  pass {}: limit {:?}, target correlation {:?}, rescale {:?}",
            record.iteration, record.effective_limit, record.target_correlation, record.rescale
        );
    }

    let space = color_space(engine.options().color_space);
    let before = image_stats(&space.to_working(&target)?);
    let after = image_stats(&space.to_working(&result)?);
    let wanted = image_stats(&space.to_working(&source)?);

    println!("\nChannel means (target -> result, source):");
    for channel in Channel::ALL {
        let i = channel.index();
        println!(
            "  {:?}: {:8.3} -> {:8.3}  ({:8.3})",
            channel, before[i].mean, after[i].mean, wanted[i].mean
        );
    }

    let dir = std::env::temp_dir();
    save_image(&source, dir.join("reinhard_source.png"))?;
    save_image(&target, dir.join("reinhard_target.png"))?;
    save_image(&result, dir.join("reinhard_processed.png"))?;
    println!("\nImages written to {}", dir.display());

    Ok(())
}
