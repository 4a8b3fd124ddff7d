//! Shared numeric constants for the hotspot viewer.

// ── Zoom ────────────────────────────────────────────────────────

/// Multiplier applied by one zoom-in/zoom-out click.
pub const ZOOM_STEP: f64 = 1.5;

/// Default maximum zoom, relative to the fitted image size.
pub const DEFAULT_ZOOM_MAX: f64 = 10.0;

/// Zoom never goes below the fitted size.
pub const MIN_ZOOM: f64 = 1.0;

// ── Minimap ─────────────────────────────────────────────────────

/// Default minimap width in CSS pixels.
pub const MINIMAP_WIDTH_PX: f64 = 100.0;

// ── Hotspots ────────────────────────────────────────────────────

/// Default hotspot marker size in CSS pixels.
pub const HOTSPOT_SIZE_PX: f64 = 20.0;
