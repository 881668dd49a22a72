use image::Rgba;

use super::*;
use crate::foundation::settings::ResizeFilter;

fn solid(w: u32, h: u32, rgba: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(w, h, Rgba(rgba))
}

fn nearest() -> RenderSettings {
    RenderSettings {
        filter: ResizeFilter::Nearest,
        ..RenderSettings::default()
    }
}

const RED: [u8; 4] = [255, 0, 0, 255];
const GREEN: [u8; 4] = [0, 255, 0, 255];
const BLUE: [u8; 4] = [0, 0, 255, 255];

#[test]
fn column_merge_scales_to_min_width() {
    let a = solid(100, 50, RED);
    let b = solid(80, 80, GREEN);
    let c = solid(60, 40, BLUE);
    let inputs = [Some(&a), Some(&b), Some(&c)];
    let out = merge_along_axis(&inputs, Axis::Vertical, &nearest()).unwrap();
    assert_eq!(out.dimensions(), (60, 30 + 60 + 40));

    // Bands in input order at cumulative offsets 0, 30, 90.
    assert_eq!(out.get_pixel(0, 0).0, RED);
    assert_eq!(out.get_pixel(59, 29).0, RED);
    assert_eq!(out.get_pixel(0, 30).0, GREEN);
    assert_eq!(out.get_pixel(59, 89).0, GREEN);
    assert_eq!(out.get_pixel(0, 90).0, BLUE);
    assert_eq!(out.get_pixel(59, 129).0, BLUE);
}

#[test]
fn row_merge_scales_to_min_height() {
    let a = solid(40, 20, RED);
    let b = solid(30, 30, GREEN);
    let c = solid(10, 10, BLUE);
    let inputs = [Some(&a), Some(&b), Some(&c)];
    let out = merge_along_axis(&inputs, Axis::Horizontal, &nearest()).unwrap();
    // 40x20 -> 20x10, 30x30 -> 10x10, 10x10 unchanged.
    assert_eq!(out.dimensions(), (20 + 10 + 10, 10));
    assert_eq!(out.get_pixel(0, 0).0, RED);
    assert_eq!(out.get_pixel(19, 9).0, RED);
    assert_eq!(out.get_pixel(20, 0).0, GREEN);
    assert_eq!(out.get_pixel(29, 9).0, GREEN);
    assert_eq!(out.get_pixel(30, 0).0, BLUE);
    assert_eq!(out.get_pixel(39, 9).0, BLUE);
}

#[test]
fn perpendicular_extent_is_exact_minimum() {
    let imgs = [solid(7, 13, RED), solid(9, 11, GREEN), solid(3, 17, BLUE)];
    let refs: Vec<Option<&RgbaImage>> = imgs.iter().map(Some).collect();
    let out = merge_along_axis(&refs, Axis::Horizontal, &RenderSettings::default()).unwrap();
    assert_eq!(out.height(), 11);
    let out = merge_along_axis(&refs, Axis::Vertical, &RenderSettings::default()).unwrap();
    assert_eq!(out.width(), 3);
}

#[test]
fn single_image_is_copied_unchanged() {
    let a = solid(5, 4, GREEN);
    let out = merge_along_axis(&[Some(&a)], Axis::Horizontal, &nearest()).unwrap();
    assert_eq!(out, a);
}

#[test]
fn images_are_never_enlarged() {
    let small = solid(2, 2, RED);
    let big = solid(50, 50, GREEN);
    let out = merge_along_axis(&[Some(&small), Some(&big)], Axis::Horizontal, &nearest()).unwrap();
    assert_eq!(out.dimensions(), (4, 2));
}

#[test]
fn empty_input_is_rejected() {
    let err = merge_along_axis(&[], Axis::Vertical, &RenderSettings::default()).unwrap_err();
    assert!(matches!(err, StoryboardError::EmptyInput(_)));
}

#[test]
fn missing_entry_is_rejected() {
    let a = solid(5, 5, RED);
    let inputs = [Some(&a), None];
    let err = merge_along_axis(&inputs, Axis::Horizontal, &RenderSettings::default()).unwrap_err();
    assert!(matches!(err, StoryboardError::MissingImage(ref m) if m.contains("entry 1")));
}

#[test]
fn zero_extent_entry_is_invalid_dimension() {
    let a = solid(5, 5, RED);
    let z = RgbaImage::new(0, 5);
    let inputs = [Some(&a), Some(&z)];
    let err = merge_along_axis(&inputs, Axis::Vertical, &RenderSettings::default()).unwrap_err();
    assert!(matches!(err, StoryboardError::InvalidDimension(_)));
}

#[test]
fn inputs_are_not_mutated() {
    let a = solid(20, 10, RED);
    let b = solid(10, 5, GREEN);
    let before = (a.clone(), b.clone());
    merge_along_axis(&[Some(&a), Some(&b)], Axis::Horizontal, &nearest()).unwrap();
    assert_eq!((a, b), before);
}
