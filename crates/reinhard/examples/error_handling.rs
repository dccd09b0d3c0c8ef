//! # Error Handling Examples
//!
//! ```bash
//! cargo run --example error_handling
//! ```

use reinhard::{
    load_image, Dimensions, DisplayImage, PixelLayout, TransferEngine, TransferError,
    TransferOptions,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Colour Transfer Error Handling Examples");
    println!("=======================================\n");

    // ==================== INVALID DIMENSIONS ====================
    println!("1. Testing invalid dimensions...");

    match DisplayImage::new(Dimensions::new(0, 100), PixelLayout::Rgb, Vec::new()) {
        Ok(_) => println!("   ✗ Should have failed!"),
        Err(TransferError::InvalidDimensions { width, height }) => {
            println!("   ✓ Caught InvalidDimensions error");
            println!("   - Width: {}, Height: {}\n", width, height);
        }
        Err(e) => println!("   ✗ Unexpected error: {:?}", e),
    }

    // ==================== BUFFER SIZE ====================
    println!("2. Testing a short pixel buffer...");

    match DisplayImage::new(Dimensions::new(4, 4), PixelLayout::Bgr, vec![0; 40]) {
        Ok(_) => println!("   ✗ Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}\n", e),
    }

    // ==================== INVALID OPTIONS ====================
    println!("3. Testing invalid options...");

    for options in [
        TransferOptions::new().iterations(0),
        TransferOptions::new().cross_covariance_limit(1.5),
    ] {
        match TransferEngine::new(options) {
            Ok(_) => println!("   ✗ Should have failed!"),
            Err(e) => println!("   ✓ Caught error: {}", e),
        }
    }
    println!();

    // ==================== FILE NOT FOUND ====================
    println!("4. Testing loading a non-existent file...");

    match load_image("/tmp/nonexistent-reinhard-input.png") {
        Ok(_) => println!("   ✗ Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}\n", e),
    }

    // ==================== RECOVERY ====================
    println!("5. Falling back to defaults on a bad configuration...");

    let requested = TransferOptions::new().cross_covariance_limit(f32::NAN);
    let engine = match TransferEngine::new(requested) {
        Ok(engine) => engine,
        Err(TransferError::InvalidConfig(msg)) => {
            println!("   ! {}, using defaults", msg);
            TransferEngine::new(TransferOptions::default())?
        }
        Err(e) => return Err(e.into()),
    };

    let dims = Dimensions::new(8, 8);
    let source = DisplayImage::filled(dims, PixelLayout::Rgb, [200, 100, 100])?;
    let target = DisplayImage::filled(dims, PixelLayout::Rgb, [128, 128, 128])?;
    let result = engine.transfer(&source, &target)?;
    println!("   ✓ Flat grey became {:?}", result.rgb_at(0, 0));

    println!("\n✓ Error handling examples completed!");
    Ok(())
}
