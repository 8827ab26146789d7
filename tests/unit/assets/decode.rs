use super::*;

use std::io::Cursor;

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_fn(width, height, |x, y| {
        image::Rgba([(x % 256) as u8, (y % 256) as u8, 64, 255])
    });
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn sniff_recognizes_png_magic() {
    let bytes = png_bytes(4, 4);
    assert_eq!(
        sniff_image_format(&bytes).unwrap(),
        image::ImageFormat::Png
    );
}

#[test]
fn sniff_rejects_non_image_bytes() {
    let err = sniff_image_format(b"this is definitely plain text").unwrap_err();
    assert!(matches!(err, FrameError::InvalidFileType(_)));
}

#[test]
fn decode_round_trips_dimensions() {
    let bytes = png_bytes(20, 10);
    let rgba = decode_photo(&bytes).unwrap();
    assert_eq!(rgba.dimensions(), (20, 10));
}

#[test]
fn truncated_image_is_a_decode_error() {
    let bytes = png_bytes(32, 32);
    // Keep the magic so sniffing passes, then cut the stream short.
    let err = decode_photo(&bytes[..24]).unwrap_err();
    assert!(matches!(err, FrameError::Decode(_)));
}

#[test]
fn premultiply_then_unpremultiply_is_stable_at_extremes() {
    let mut px = vec![200u8, 100, 50, 255, 10, 20, 30, 0];
    premultiply_rgba8_in_place(&mut px);
    assert_eq!(px, vec![200, 100, 50, 255, 0, 0, 0, 0]);
    unpremultiply_rgba8_in_place(&mut px);
    assert_eq!(px, vec![200, 100, 50, 255, 0, 0, 0, 0]);
}

#[test]
fn unpremultiply_inverts_mid_alpha_within_rounding() {
    let mut px = vec![200u8, 40, 0, 128];
    premultiply_rgba8_in_place(&mut px);
    unpremultiply_rgba8_in_place(&mut px);
    assert!((i16::from(px[0]) - 200).abs() <= 2);
    assert!((i16::from(px[1]) - 40).abs() <= 2);
    assert_eq!(px[2], 0);
    assert_eq!(px[3], 128);
}
