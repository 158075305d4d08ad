use image::ImageEncoder;
use voyage_image::{Image, ImageError, decode_image, decode_or_empty};

fn jpeg(width: u32, height: u32) -> Vec<u8> {
    let mut buffer = Vec::new();
    let img = image::RgbImage::from_fn(width, height, |x, y| {
        let val = ((x + y) * 16 % 256) as u8;
        image::Rgb([val, val / 2, 255 - val])
    });
    image::codecs::jpeg::JpegEncoder::new(&mut buffer)
        .encode_image(&img)
        .unwrap();
    buffer
}

#[test]
fn test_decode_jpeg_photo() {
    let image = decode_image(&jpeg(16, 8)).unwrap();

    assert!(!image.is_empty());
    assert_eq!(image.width(), 16);
    assert_eq!(image.height(), 8);
    assert_eq!(image.channels(), 3);
    assert_eq!(image.pixels().shape, vec![8, 16, 3]);
}

#[test]
fn test_decode_rgba_png_drops_alpha() {
    let mut buffer = Vec::new();
    let img = image::RgbaImage::from_fn(2, 2, |_, _| image::Rgba([10, 20, 30, 128]));
    image::codecs::png::PngEncoder::new(&mut buffer)
        .write_image(img.as_raw(), 2, 2, image::ExtendedColorType::Rgba8)
        .unwrap();

    let image = decode_image(&buffer).unwrap();
    assert_eq!(image.channels(), 3);
    assert_eq!(&image.pixels().data[..3], &[10, 20, 30]);
}

#[test]
fn test_decode_grayscale_png_expands_to_rgb() {
    let mut buffer = Vec::new();
    let img = image::GrayImage::from_fn(2, 2, |_, _| image::Luma([99]));
    image::codecs::png::PngEncoder::new(&mut buffer)
        .write_image(img.as_raw(), 2, 2, image::ExtendedColorType::L8)
        .unwrap();

    let image = decode_image(&buffer).unwrap();
    assert_eq!(image.pixels().shape, vec![2, 2, 3]);
    assert!(image.pixels().data.iter().all(|&v| v == 99));
}

#[test]
fn test_decode_png_pixels_are_exact() {
    let mut buffer = Vec::new();
    let raw = vec![
        255, 0, 0, // red
        0, 255, 0, // green
        0, 0, 255, // blue
        128, 128, 128, // gray
    ];
    image::codecs::png::PngEncoder::new(&mut buffer)
        .write_image(&raw, 2, 2, image::ExtendedColorType::Rgb8)
        .unwrap();

    let image = decode_image(&buffer).unwrap();
    assert_eq!(image.pixels().data, raw);
}

#[test]
fn test_decode_garbage_is_decode_error() {
    match decode_image(&[0xFF, 0x00, 0x12, 0x34]) {
        Err(ImageError::Decode(_)) => {}
        other => panic!("Expected Decode error, got {:?}", other),
    }
}

#[test]
fn test_decode_empty_buffer_is_error() {
    assert!(decode_image(&[]).is_err());
}

#[test]
fn test_decode_or_empty_degrades_to_sentinel() {
    assert_eq!(decode_or_empty(b"not an image"), Image::empty());
    assert!(!decode_or_empty(&jpeg(4, 4)).is_empty());
}
