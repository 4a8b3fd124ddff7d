//! Image hotspot viewer and editor state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host renders the image, the hotspot markers, the zoom controls and the
//! minimap; this module decides where each of them goes. Hotspot coordinates
//! are stored as percentages of the image so they survive container resizes
//! and zoom.

#[cfg(test)]
#[path = "viewer_test.rs"]
mod viewer_test;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{DEFAULT_ZOOM_MAX, HOTSPOT_SIZE_PX, MINIMAP_WIDTH_PX};
use crate::geometry::{ImageFit, Point, Rect, Size, fit_image};
use crate::zoom::ZoomState;

/// A marker pinned to the image. `x`/`y` are percentages (0–100) of the
/// image width/height.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotspot {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
}

impl Hotspot {
    #[must_use]
    pub fn at(x: f64, y: f64) -> Self {
        Self { x: x.clamp(0.0, 100.0), y: y.clamp(0.0, 100.0), ..Self::default() }
    }

    /// Marker size, falling back to the default icon size.
    #[must_use]
    pub fn marker_size(&self) -> Size {
        Size::new(self.width.unwrap_or(HOTSPOT_SIZE_PX), self.height.unwrap_or(HOTSPOT_SIZE_PX))
    }
}

/// Display toggles mirroring the viewer's props.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewerOptions {
    pub hide_zoom_controls: bool,
    pub hide_hotspots: bool,
    pub hide_minimap: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct DragState {
    start_pointer: Point,
    start_offset: Point,
}

/// Where the minimap and its viewport indicator go.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Minimap {
    pub size: Size,
    /// Visible part of the image, in minimap pixels.
    pub viewport: Rect,
}

#[derive(Debug, Clone)]
pub struct Viewer {
    image: Size,
    container: Size,
    fit: ImageFit,
    zoom: ZoomState,
    drag: Option<DragState>,
    pub hotspots: Vec<Hotspot>,
    pub options: ViewerOptions,
    pub selected: Option<usize>,
}

impl Viewer {
    #[must_use]
    pub fn new(image: Size, container: Size, hotspots: Vec<Hotspot>) -> Self {
        let fit = fit_image(image, container);
        Self {
            image,
            container,
            fit,
            zoom: ZoomState::fitted(&fit, DEFAULT_ZOOM_MAX),
            drag: None,
            hotspots,
            options: ViewerOptions::default(),
            selected: None,
        }
    }

    #[must_use]
    pub fn with_zoom_max(mut self, zoom_max: f64) -> Self {
        self.zoom = ZoomState::fitted(&self.fit, zoom_max);
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: ViewerOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn zoom(&self) -> &ZoomState {
        &self.zoom
    }

    #[must_use]
    pub fn fit(&self) -> &ImageFit {
        &self.fit
    }

    #[must_use]
    pub fn image_rect(&self) -> Rect {
        self.zoom.image_rect(&self.fit)
    }

    /// Container resized: refit and keep the zoom level.
    pub fn resize(&mut self, container: Size) {
        let relative = if self.fit.size.is_empty() {
            Point::default()
        } else {
            Point::new(
                (self.zoom.offset.x - self.fit.offset.x) / self.fit.size.width,
                (self.zoom.offset.y - self.fit.offset.y) / self.fit.size.height,
            )
        };
        self.container = container;
        self.fit = fit_image(self.image, container);
        self.zoom.offset = Point::new(
            self.fit.offset.x + relative.x * self.fit.size.width,
            self.fit.offset.y + relative.y * self.fit.size.height,
        );
        self.zoom.clamp_offset(&self.fit, container);
        if !self.is_zoomable() {
            self.zoom = ZoomState::fitted(&self.fit, self.zoom.zoom_max);
        }
    }

    // --- Zoom controls ---

    /// Only images shrunk to fit can be zoomed; smaller images are shown as
    /// they are.
    #[must_use]
    pub fn is_zoomable(&self) -> bool {
        !self.fit.size.is_empty() && !self.fit.is_natural_size()
    }

    #[must_use]
    pub fn shows_zoom_controls(&self) -> bool {
        !self.options.hide_zoom_controls && self.is_zoomable()
    }

    pub fn zoom_in(&mut self) {
        if self.is_zoomable() {
            self.zoom.zoom_in(&self.fit, self.container);
        }
    }

    pub fn zoom_out(&mut self) {
        self.zoom.zoom_out(&self.fit, self.container);
    }

    pub fn zoom_to_fit(&mut self) {
        self.zoom.zoom_to_fit(&self.fit);
    }

    /// Wheel/pinch zoom around a pointer.
    pub fn zoom_at(&mut self, anchor: Point, factor: f64) {
        if !self.is_zoomable() {
            debug!(factor, "zoom ignored: image shown at natural size");
            return;
        }
        self.zoom.zoom_at(&self.fit, self.container, anchor, factor);
    }

    // --- Drag / pan ---

    /// Begin panning. Ignored when the image fits entirely.
    pub fn start_drag(&mut self, pointer: Point) -> bool {
        if !self.zoom.is_pannable(&self.fit, self.container) {
            return false;
        }
        self.drag = Some(DragState { start_pointer: pointer, start_offset: self.zoom.offset });
        true
    }

    pub fn drag_to(&mut self, pointer: Point) {
        let Some(drag) = self.drag else {
            return;
        };
        self.zoom.offset = Point::new(
            drag.start_offset.x + pointer.x - drag.start_pointer.x,
            drag.start_offset.y + pointer.y - drag.start_pointer.y,
        );
        self.zoom.clamp_offset(&self.fit, self.container);
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    // --- Minimap ---

    /// The minimap follows the pan and only appears while dragging a
    /// zoomable image.
    #[must_use]
    pub fn minimap(&self) -> Option<Minimap> {
        if self.options.hide_minimap || !self.is_dragging() || !self.is_zoomable() {
            return None;
        }
        self.minimap_at(MINIMAP_WIDTH_PX)
    }

    /// Minimap geometry for a minimap `width` pixels wide.
    #[must_use]
    pub fn minimap_at(&self, width: f64) -> Option<Minimap> {
        if self.image.is_empty() || self.fit.size.is_empty() {
            return None;
        }
        let size = Size::new(width, width * self.image.height / self.image.width);
        let image = self.image_rect();
        let kx = size.width / image.width;
        let ky = size.height / image.height;
        let left = (-image.x).max(0.0);
        let top = (-image.y).max(0.0);
        let right = (self.container.width - image.x).min(image.width);
        let bottom = (self.container.height - image.y).min(image.height);
        let viewport = Rect {
            x: left * kx,
            y: top * ky,
            width: (right - left).max(0.0) * kx,
            height: (bottom - top).max(0.0) * ky,
        };
        Some(Minimap { size, viewport })
    }

    // --- Hotspot placement ---

    /// Container position of a hotspot at the current zoom/pan.
    #[must_use]
    pub fn hotspot_position(&self, hotspot: &Hotspot) -> Point {
        let rect = self.image_rect();
        Point::new(rect.x + hotspot.x / 100.0 * rect.width, rect.y + hotspot.y / 100.0 * rect.height)
    }

    /// `(index, position)` for every hotspot to draw; empty when hidden.
    #[must_use]
    pub fn hotspot_positions(&self) -> Vec<(usize, Point)> {
        if self.options.hide_hotspots {
            return Vec::new();
        }
        self.hotspots
            .iter()
            .enumerate()
            .map(|(i, h)| (i, self.hotspot_position(h)))
            .collect()
    }

    /// Image percentage under a container point, if the point is on the image.
    #[must_use]
    pub fn percent_at(&self, point: Point) -> Option<Point> {
        let rect = self.image_rect();
        if rect.width <= 0.0 || rect.height <= 0.0 || !rect.contains(point) {
            return None;
        }
        Some(Point::new((point.x - rect.x) / rect.width * 100.0, (point.y - rect.y) / rect.height * 100.0))
    }

    // --- Editing ---

    /// Drop a new hotspot under `point`, select it, and return its index.
    pub fn add_hotspot_at(&mut self, point: Point) -> Option<usize> {
        let percent = self.percent_at(point)?;
        self.hotspots.push(Hotspot::at(percent.x, percent.y));
        let index = self.hotspots.len() - 1;
        self.selected = Some(index);
        debug!(index, x = percent.x, y = percent.y, "hotspot added");
        Some(index)
    }

    /// Move a hotspot to follow a drag. Points off the image clamp to its edge.
    pub fn move_hotspot(&mut self, index: usize, point: Point) -> bool {
        let rect = self.image_rect();
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return false;
        }
        let Some(hotspot) = self.hotspots.get_mut(index) else {
            return false;
        };
        hotspot.x = ((point.x - rect.x) / rect.width * 100.0).clamp(0.0, 100.0);
        hotspot.y = ((point.y - rect.y) / rect.height * 100.0).clamp(0.0, 100.0);
        true
    }

    pub fn remove_hotspot(&mut self, index: usize) -> Option<Hotspot> {
        if index >= self.hotspots.len() {
            return None;
        }
        let removed = self.hotspots.remove(index);
        self.selected = match self.selected {
            Some(s) if s == index => None,
            Some(s) if s > index => Some(s - 1),
            other => other,
        };
        debug!(index, "hotspot removed");
        Some(removed)
    }

    pub fn select_hotspot(&mut self, index: Option<usize>) {
        self.selected = index.filter(|i| *i < self.hotspots.len());
    }

    #[must_use]
    pub fn selected_hotspot(&self) -> Option<&Hotspot> {
        self.selected.and_then(|i| self.hotspots.get(i))
    }
}
