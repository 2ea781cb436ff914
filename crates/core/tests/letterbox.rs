use image::RgbImage;
use pixelmem_core::{letterbox, pack_image, CanvasSize, Error};

fn white_image(width: u32, height: u32) -> RgbImage {
    RgbImage::from_pixel(width, height, image::Rgb([255, 255, 255]))
}

/// Bounding box (x0, y0, x1, y1) of the non-black pixels, with
/// exclusive upper bounds.
fn content_bounds(image: &RgbImage) -> (u32, u32, u32, u32) {
    let (mut x0, mut y0) = (u32::MAX, u32::MAX);
    let (mut x1, mut y1) = (0, 0);
    for (x, y, pixel) in image.enumerate_pixels() {
        if pixel.0 != [0, 0, 0] {
            x0 = x0.min(x);
            y0 = y0.min(y);
            x1 = x1.max(x + 1);
            y1 = y1.max(y + 1);
        }
    }
    (x0, y0, x1, y1)
}

#[test]
fn test_output_dimensions_always_match_canvas() {
    let canvas = CanvasSize::default();
    for (w, h) in [(1, 1), (100, 50), (224, 224), (640, 480), (3, 1000)] {
        let out = letterbox(&white_image(w, h), canvas).unwrap();
        assert_eq!(out.dimensions(), (224, 224));
    }
}

#[test]
fn test_wide_source_is_centered_vertically() {
    // 100x50 onto 224x224: ratio 2.24, scaled 224x112, offset (0, 56).
    let out = letterbox(&white_image(100, 50), CanvasSize::default()).unwrap();

    assert_eq!(content_bounds(&out), (0, 56, 224, 168));
    for y in (0..56).chain(168..224) {
        for x in 0..224 {
            assert_eq!(out.get_pixel(x, y).0, [0, 0, 0], "pad at ({x}, {y})");
        }
    }
}

#[test]
fn test_tall_source_is_centered_horizontally() {
    // 50x100 onto 224x224: scaled 112x224, offset (56, 0).
    let out = letterbox(&white_image(50, 100), CanvasSize::default()).unwrap();
    assert_eq!(content_bounds(&out), (56, 0, 168, 224));
}

#[test]
fn test_aspect_ratio_preserved_within_rounding() {
    let src = white_image(300, 100);
    let out = letterbox(&src, CanvasSize::default()).unwrap();

    let (x0, y0, x1, y1) = content_bounds(&out);
    let (new_w, new_h) = ((x1 - x0) as f64, (y1 - y0) as f64);
    // 224/300 scale: 224x75 expected; ratio off by at most 1 px/dim.
    assert_eq!((x1 - x0, y1 - y0), (224, 75));
    assert!((new_w / new_h - 3.0).abs() < 3.0 * (1.0 / 75.0 + 1.0 / 224.0));
}

#[test]
fn test_degenerate_aspect_ratio_yields_black_canvas() {
    // 1000x1 scaled by 0.224 rounds the height down to zero.
    let out = letterbox(&white_image(1000, 1), CanvasSize::default()).unwrap();
    assert_eq!(out.dimensions(), (224, 224));
    assert!(out.pixels().all(|p| p.0 == [0, 0, 0]));
}

#[test]
fn test_zero_canvas_dimension_is_a_config_error() {
    let err = letterbox(&white_image(4, 4), CanvasSize::new(0, 224)).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidCanvasSize {
            width: 0,
            height: 224
        }
    ));
}

#[test]
fn test_normalize_then_pack_is_deterministic() {
    let src = RgbImage::from_fn(123, 77, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    });
    let canvas = CanvasSize::default();

    let first = pack_image(&letterbox(&src, canvas).unwrap());
    let second = pack_image(&letterbox(&src, canvas).unwrap());
    assert_eq!(first, second);
}
