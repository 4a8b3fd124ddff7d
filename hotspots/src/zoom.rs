//! Zoom level and pan offset of an image inside its container.

#[cfg(test)]
#[path = "zoom_test.rs"]
mod zoom_test;

use crate::consts::{DEFAULT_ZOOM_MAX, MIN_ZOOM, ZOOM_STEP};
use crate::geometry::{ImageFit, Point, Rect, Size};

/// Zoom/pan state of an image inside its container.
///
/// `scale` is relative to the fitted image (1.0 = whole image visible).
/// `offset` is the image's top-left corner in container pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomState {
    pub scale: f64,
    pub zoom_max: f64,
    pub offset: Point,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self { scale: MIN_ZOOM, zoom_max: DEFAULT_ZOOM_MAX, offset: Point::default() }
    }
}

impl ZoomState {
    /// Zoom 1, centered on the fitted image.
    #[must_use]
    pub fn fitted(fit: &ImageFit, zoom_max: f64) -> Self {
        Self { scale: MIN_ZOOM, zoom_max: zoom_max.max(MIN_ZOOM), offset: fit.offset }
    }

    /// On-screen size of the image at the current zoom.
    #[must_use]
    pub fn displayed_size(&self, fit: &ImageFit) -> Size {
        fit.size.scaled(self.scale)
    }

    /// On-screen rectangle of the image.
    #[must_use]
    pub fn image_rect(&self, fit: &ImageFit) -> Rect {
        let size = self.displayed_size(fit);
        Rect { x: self.offset.x, y: self.offset.y, width: size.width, height: size.height }
    }

    #[must_use]
    pub fn can_zoom_in(&self) -> bool {
        self.scale < self.zoom_max
    }

    #[must_use]
    pub fn can_zoom_out(&self) -> bool {
        self.scale > MIN_ZOOM
    }

    /// Whether the image overflows the container so it can be dragged.
    #[must_use]
    pub fn is_pannable(&self, fit: &ImageFit, container: Size) -> bool {
        let size = self.displayed_size(fit);
        size.width > container.width || size.height > container.height
    }

    /// Zoom by `factor` keeping the image point under `anchor` fixed.
    pub fn zoom_at(&mut self, fit: &ImageFit, container: Size, anchor: Point, factor: f64) {
        let next = (self.scale * factor).clamp(MIN_ZOOM, self.zoom_max);
        let ratio = next / self.scale;
        self.offset = Point::new(
            anchor.x - (anchor.x - self.offset.x) * ratio,
            anchor.y - (anchor.y - self.offset.y) * ratio,
        );
        self.scale = next;
        self.clamp_offset(fit, container);
    }

    /// One zoom step in around the container center.
    pub fn zoom_in(&mut self, fit: &ImageFit, container: Size) {
        self.zoom_at(fit, container, center(container), ZOOM_STEP);
    }

    /// One zoom step out around the container center.
    pub fn zoom_out(&mut self, fit: &ImageFit, container: Size) {
        self.zoom_at(fit, container, center(container), 1.0 / ZOOM_STEP);
    }

    /// Back to the fitted, centered image.
    pub fn zoom_to_fit(&mut self, fit: &ImageFit) {
        self.scale = MIN_ZOOM;
        self.offset = fit.offset;
    }

    /// Move the image so it never leaves a gap on an axis where it overflows,
    /// and stays centered on an axis where it does not.
    pub fn clamp_offset(&mut self, fit: &ImageFit, container: Size) {
        let size = self.displayed_size(fit);
        self.offset.x = clamp_axis(self.offset.x, size.width, container.width);
        self.offset.y = clamp_axis(self.offset.y, size.height, container.height);
    }
}

fn clamp_axis(offset: f64, image_len: f64, container_len: f64) -> f64 {
    if image_len <= container_len {
        (container_len - image_len) / 2.0
    } else {
        offset.clamp(container_len - image_len, 0.0)
    }
}

fn center(container: Size) -> Point {
    Point::new(container.width / 2.0, container.height / 2.0)
}
