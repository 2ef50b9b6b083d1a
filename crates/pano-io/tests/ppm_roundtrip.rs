//! PPM codec round-trips through real files.

use pano_core::{Image, Rgb};
use pano_io::ppm;

/// Black/white checkerboard with fully saturated corners.
fn checkerboard(w: u32, h: u32) -> Image {
    let mut img = Image::new(w, h);
    for y in 0..h {
        for x in 0..w {
            let px = if (x + y) % 2 == 0 { Rgb::ONE } else { Rgb::ZERO };
            img.set_pixel(x, y, px);
        }
    }
    img
}

#[test]
fn checkerboard_roundtrip_is_byte_exact() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("checker.ppm");

    let img = checkerboard(8, 6);
    ppm::write(&path, &img).unwrap();
    let back = ppm::read(&path).unwrap();

    assert_eq!(back.width(), 8);
    assert_eq!(back.height(), 6);

    // Re-encoding the decoded image must reproduce the file bytes.
    let path2 = dir.path().join("checker2.ppm");
    ppm::write(&path2, &back).unwrap();
    let a = std::fs::read(&path).unwrap();
    let b = std::fs::read(&path2).unwrap();
    assert_eq!(a, b);

    // Pure black and white survive exactly in linear light too.
    for y in 0..6 {
        for x in 0..8 {
            let expected = if (x + y) % 2 == 0 { 1.0 } else { 0.0 };
            let px = back.pixel(x, y);
            assert!((px.r - expected).abs() < 1e-6);
            assert!((px.g - expected).abs() < 1e-6);
            assert!((px.b - expected).abs() < 1e-6);
        }
    }
}

#[test]
fn gradient_roundtrip_preserves_code_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gradient.ppm");

    // One pixel per 8-bit code value.
    let pixels: Vec<Rgb> = (0..256u32)
        .map(|v| Rgb::splat(pano_transfer_eotf(v as u8)))
        .collect();
    let img = Image::from_pixels(256, 1, pixels).unwrap();

    ppm::write(&path, &img).unwrap();
    let back = ppm::read(&path).unwrap();

    for v in 0..256u32 {
        let expected = pano_transfer_eotf(v as u8);
        let got = back.pixel(v, 0).r;
        assert!(
            (got - expected).abs() < 1e-6,
            "code value {} drifted: {} vs {}",
            v,
            got,
            expected
        );
    }
}

fn pano_transfer_eotf(v: u8) -> f32 {
    pano_transfer::srgb::eotf(v as f32 / 255.0)
}

#[test]
fn read_missing_file_fails() {
    let err = ppm::read("/definitely/not/here.ppm");
    assert!(matches!(err, Err(pano_io::IoError::Io(_))));
}
