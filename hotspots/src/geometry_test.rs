#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// --- Orientation ---

#[test]
fn orientation_from_size() {
    assert_eq!(Size::new(450.0, 300.0).orientation(), Orientation::Landscape);
    assert_eq!(Size::new(250.0, 300.0).orientation(), Orientation::Portrait);
    assert_eq!(Size::new(300.0, 300.0).orientation(), Orientation::Square);
}

// --- fit_image ---

#[test]
fn landscape_image_in_landscape_container_fills_width() {
    let fit = fit_image(Size::new(900.0, 450.0), Size::new(450.0, 300.0));
    assert!(approx_eq(fit.size.width, 450.0));
    assert!(approx_eq(fit.size.height, 225.0));
    assert!(approx_eq(fit.offset.x, 0.0));
    assert!(approx_eq(fit.offset.y, 37.5));
    assert!(approx_eq(fit.scale, 0.5));
}

#[test]
fn landscape_image_in_portrait_container_is_letterboxed() {
    let fit = fit_image(Size::new(1000.0, 500.0), Size::new(250.0, 300.0));
    assert!(approx_eq(fit.size.width, 250.0));
    assert!(approx_eq(fit.size.height, 125.0));
    assert!(approx_eq(fit.offset.y, 87.5));
}

#[test]
fn portrait_image_in_landscape_container_fills_height() {
    let fit = fit_image(Size::new(400.0, 800.0), Size::new(450.0, 300.0));
    assert!(approx_eq(fit.size.height, 300.0));
    assert!(approx_eq(fit.size.width, 150.0));
    assert!(approx_eq(fit.offset.x, 150.0));
}

#[test]
fn small_image_keeps_natural_size_and_is_centered() {
    let fit = fit_image(Size::new(100.0, 50.0), Size::new(450.0, 300.0));
    assert!(approx_eq(fit.scale, 1.0));
    assert_eq!(fit.size, Size::new(100.0, 50.0));
    assert!(approx_eq(fit.offset.x, 175.0));
    assert!(approx_eq(fit.offset.y, 125.0));
    assert!(fit.is_natural_size());
}

#[test]
fn shrunk_image_is_not_natural_size() {
    assert!(!fit_image(Size::new(900.0, 450.0), Size::new(450.0, 300.0)).is_natural_size());
    assert!(!fit_image(Size::new(0.0, 50.0), Size::new(450.0, 300.0)).is_natural_size());
}

#[test]
fn empty_sizes_fit_to_nothing() {
    let fit = fit_image(Size::new(0.0, 50.0), Size::new(400.0, 400.0));
    assert_eq!(fit.scale, 0.0);
    assert!(fit.size.is_empty());
}

// --- Rect ---

#[test]
fn rect_contains_edges() {
    let r = Rect { x: 10.0, y: 10.0, width: 20.0, height: 20.0 };
    assert!(r.contains(Point::new(10.0, 30.0)));
    assert!(!r.contains(Point::new(31.0, 15.0)));
}
