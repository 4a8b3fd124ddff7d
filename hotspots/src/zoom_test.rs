#![allow(clippy::float_cmp)]

use super::*;
use crate::geometry::fit_image;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn setup() -> (ImageFit, Size) {
    let container = Size::new(400.0, 200.0);
    (fit_image(Size::new(800.0, 400.0), container), container)
}

// --- Defaults ---

#[test]
fn fitted_state_is_centered_at_scale_one() {
    let (fit, _) = setup();
    let zoom = ZoomState::fitted(&fit, 5.0);
    assert_eq!(zoom.scale, 1.0);
    assert_eq!(zoom.offset, fit.offset);
    assert!(!zoom.can_zoom_out());
    assert!(zoom.can_zoom_in());
}

#[test]
fn zoom_max_never_below_one() {
    let (fit, _) = setup();
    assert_eq!(ZoomState::fitted(&fit, 0.2).zoom_max, 1.0);
}

// --- zoom_in / zoom_out ---

#[test]
fn zoom_in_keeps_center_fixed() {
    let (fit, container) = setup();
    let mut zoom = ZoomState::fitted(&fit, 10.0);
    zoom.zoom_in(&fit, container);
    assert!(approx_eq(zoom.scale, 1.5));
    assert!(approx_eq(zoom.offset.x, -100.0));
    assert!(approx_eq(zoom.offset.y, -50.0));
}

#[test]
fn zoom_is_capped_at_zoom_max() {
    let (fit, container) = setup();
    let mut zoom = ZoomState::fitted(&fit, 2.0);
    for _ in 0..5 {
        zoom.zoom_in(&fit, container);
    }
    assert!(approx_eq(zoom.scale, 2.0));
    assert!(!zoom.can_zoom_in());
}

#[test]
fn zoom_out_stops_at_fit_and_recenters() {
    let (fit, container) = setup();
    let mut zoom = ZoomState::fitted(&fit, 10.0);
    zoom.zoom_in(&fit, container);
    zoom.zoom_out(&fit, container);
    zoom.zoom_out(&fit, container);
    assert!(approx_eq(zoom.scale, 1.0));
    assert!(approx_eq(zoom.offset.x, fit.offset.x));
    assert!(approx_eq(zoom.offset.y, fit.offset.y));
}

#[test]
fn zoom_at_corner_keeps_anchor_stable() {
    let (fit, container) = setup();
    let mut zoom = ZoomState::fitted(&fit, 10.0);
    zoom.zoom_at(&fit, container, Point::new(0.0, 0.0), 2.0);
    assert!(approx_eq(zoom.offset.x, 0.0));
    assert!(approx_eq(zoom.offset.y, 0.0));
}

#[test]
fn zoom_to_fit_resets() {
    let (fit, container) = setup();
    let mut zoom = ZoomState::fitted(&fit, 10.0);
    zoom.zoom_in(&fit, container);
    zoom.zoom_to_fit(&fit);
    assert_eq!(zoom.scale, 1.0);
    assert_eq!(zoom.offset, fit.offset);
}

// --- Panning ---

#[test]
fn fitted_image_is_not_pannable() {
    let (fit, container) = setup();
    assert!(!ZoomState::fitted(&fit, 10.0).is_pannable(&fit, container));
}

#[test]
fn clamp_keeps_image_covering_container() {
    let (fit, container) = setup();
    let mut zoom = ZoomState::fitted(&fit, 10.0);
    zoom.zoom_at(&fit, container, Point::new(0.0, 0.0), 2.0);
    zoom.offset = Point::new(50.0, -1000.0);
    zoom.clamp_offset(&fit, container);
    assert!(approx_eq(zoom.offset.x, 0.0));
    assert!(approx_eq(zoom.offset.y, -200.0));
}

#[test]
fn image_rect_tracks_offset_and_scale() {
    let (fit, container) = setup();
    let mut zoom = ZoomState::fitted(&fit, 10.0);
    zoom.zoom_in(&fit, container);
    let rect = zoom.image_rect(&fit);
    assert!(approx_eq(rect.width, 600.0));
    assert!(approx_eq(rect.height, 300.0));
}
