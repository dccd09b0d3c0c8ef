//! Edge case testing for colour transfer

use reinhard::*;

fn checker(dims: Dimensions, a: [u8; 3], b: [u8; 3]) -> DisplayImage {
    DisplayImage::from_fn(dims, PixelLayout::Rgb, |x, y| if (x + y) % 2 == 0 { a } else { b })
        .unwrap()
}

#[test]
fn test_zero_dimensions_rejected() {
    let err = DisplayImage::new(Dimensions::new(0, 10), PixelLayout::Rgb, Vec::new()).unwrap_err();
    assert!(matches!(err, TransferError::InvalidDimensions { width: 0, height: 10 }));
}

#[test]
fn test_buffer_size_mismatch() {
    let err = DisplayImage::new(Dimensions::new(2, 2), PixelLayout::Rgb, vec![0; 11]).unwrap_err();
    assert!(matches!(
        err,
        TransferError::BufferSizeMismatch { expected: 12, actual: 11 }
    ));
}

#[test]
fn test_invalid_options_rejected() {
    let cases = [
        TransferOptions::new().iterations(0),
        TransferOptions::new().cross_covariance_limit(-0.1),
        TransferOptions::new().cross_covariance_limit(1.5),
        TransferOptions::new().cross_covariance_limit(f32::NAN),
    ];

    for options in cases {
        match TransferEngine::new(options.clone()) {
            Err(TransferError::InvalidConfig(msg)) => assert!(!msg.is_empty()),
            other => panic!("{:?} accepted: {:?}", options, other.map(|_| ())),
        }
    }
}

#[test]
fn test_boundary_limits_accepted() {
    for limit in [0.0, 1.0] {
        assert!(TransferEngine::new(TransferOptions::new().cross_covariance_limit(limit)).is_ok());
    }
}

#[test]
fn test_single_pixel_images() {
    let dims = Dimensions::new(1, 1);
    let source = DisplayImage::filled(dims, PixelLayout::Rgb, [10, 200, 30]).unwrap();
    let target = DisplayImage::filled(dims, PixelLayout::Rgb, [100, 100, 100]).unwrap();

    let engine = TransferEngine::new(TransferOptions::default()).unwrap();
    let (out, report) = engine.transfer_with_report(&source, &target).unwrap();

    assert_eq!(out.dimensions, dims);
    assert_eq!(report.source_degenerate_channels, Channel::ALL.to_vec());
    assert_eq!(
        report.iterations[0].degenerate_channels,
        vec![Channel::ChromaA, Channel::ChromaB]
    );

    // Green tint on the grey
    let [r, g, b] = out.rgb_at(0, 0);
    assert!(g > r && g > b, "{:?}", [r, g, b]);
}

#[test]
fn test_source_and_target_sizes_may_differ() {
    let source = checker(Dimensions::new(7, 3), [200, 40, 40], [120, 20, 60]);
    let target = checker(Dimensions::new(5, 11), [30, 30, 160], [80, 90, 200]);

    let out = TransferEngine::new(TransferOptions::default())
        .unwrap()
        .transfer(&source, &target)
        .unwrap();
    assert_eq!(out.dimensions, target.dimensions);
}

#[test]
fn test_saturated_inputs_stay_in_range() {
    let dims = Dimensions::new(6, 6);
    let source = checker(dims, [255, 0, 0], [0, 0, 255]);
    let target = checker(dims, [0, 0, 0], [255, 255, 255]);

    for kind in [ColorSpaceKind::Lab, ColorSpaceKind::LogLms] {
        for clip in [false, true] {
            let options = TransferOptions::new()
                .cross_covariance(CrossCovariance::Full)
                .keep_original_shading(false)
                .scale_rather_than_clip(!clip)
                .color_space(kind);
            let out = TransferEngine::new(options)
                .unwrap()
                .transfer(&source, &target)
                .unwrap();
            assert_eq!(out.as_bytes().len(), 6 * 6 * 3);
        }
    }
}
