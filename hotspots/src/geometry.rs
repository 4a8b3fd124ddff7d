//! Points, sizes, and contain-fitting an image into its container.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

/// A point in container space (CSS pixels) unless stated otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn orientation(self) -> Orientation {
        if self.width > self.height {
            Orientation::Landscape
        } else if self.width < self.height {
            Orientation::Portrait
        } else {
            Orientation::Square
        }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Self { width: self.width * factor, height: self.height * factor }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Landscape,
    Portrait,
    Square,
}

/// Image size after contain-fitting into a container, with the offsets that
/// center it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageFit {
    pub size: Size,
    pub offset: Point,
    /// Image pixels → CSS pixels at zoom 1.
    pub scale: f64,
}

impl ImageFit {
    /// The image is shown at its natural size: it fits the container
    /// without shrinking.
    #[must_use]
    pub fn is_natural_size(&self) -> bool {
        self.scale >= 1.0
    }
}

/// Contain-fit `image` into `container`: the whole image is visible, aspect
/// ratio preserved, centered on both axes. Images smaller than the container
/// keep their natural size. Empty inputs fit to nothing.
#[must_use]
pub fn fit_image(image: Size, container: Size) -> ImageFit {
    if image.is_empty() || container.is_empty() {
        return ImageFit { size: Size::default(), offset: Point::default(), scale: 0.0 };
    }
    let scale = (container.width / image.width).min(container.height / image.height).min(1.0);
    let size = image.scaled(scale);
    let offset = Point::new((container.width - size.width) / 2.0, (container.height - size.height) / 2.0);
    ImageFit { size, offset, scale }
}
