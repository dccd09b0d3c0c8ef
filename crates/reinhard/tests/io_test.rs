//! Image file round trips through the `image` crate

use reinhard::*;
use tempfile::tempdir;

fn gradient(dims: Dimensions, layout: PixelLayout) -> DisplayImage {
    DisplayImage::from_fn(dims, layout, |x, y| {
        [(x * 9 % 256) as u8, (y * 13 % 256) as u8, ((x + y) * 5 % 256) as u8]
    })
    .unwrap()
}

#[test]
fn test_png_roundtrip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("gradient.png");

    let image = gradient(Dimensions::new(17, 9), PixelLayout::Rgb);
    save_image(&image, &path).unwrap();
    let loaded = load_image(&path).unwrap();

    assert_eq!(loaded, image);
}

#[test]
fn test_bgr_saved_as_rgb() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bgr.png");

    let image = gradient(Dimensions::new(5, 5), PixelLayout::Bgr);
    save_image(&image, &path).unwrap();
    let loaded = load_image(&path).unwrap();

    assert_eq!(loaded.layout, PixelLayout::Rgb);
    assert_eq!(loaded, image.to_layout(PixelLayout::Rgb));
}

#[test]
fn test_missing_file() {
    let dir = tempdir().unwrap();
    let err = load_image(dir.path().join("missing.png")).unwrap_err();
    assert!(matches!(err, TransferError::Io(_)), "{:?}", err);
}

#[test]
fn test_undecodable_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("garbage.png");
    std::fs::write(&path, b"definitely not a png").unwrap();

    let err = load_image(&path).unwrap_err();
    assert!(matches!(err, TransferError::Image(_)), "{:?}", err);
}

#[test]
fn test_transfer_files() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("source.png");
    let target = dir.path().join("target.png");
    let output = dir.path().join("processed.png");

    let dims = Dimensions::new(20, 12);
    save_image(
        &DisplayImage::from_fn(dims, PixelLayout::Rgb, |x, y| [180, 60 + x as u8, 40 + y as u8])
            .unwrap(),
        &source,
    )
    .unwrap();
    save_image(&gradient(dims, PixelLayout::Rgb), &target).unwrap();

    let report = transfer_files(&source, &target, &output, &TransferOptions::default()).unwrap();
    assert_eq!(report.iterations.len(), 2);

    let result = load_image(&output).unwrap();
    assert_eq!(result.dimensions, dims);
}

#[test]
fn test_transfer_files_rejects_bad_options_before_io() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.png");

    let err = transfer_files(
        &missing,
        &missing,
        dir.path().join("out.png"),
        &TransferOptions::new().iterations(0),
    )
    .unwrap_err();
    assert!(matches!(err, TransferError::InvalidConfig(_)));
}
