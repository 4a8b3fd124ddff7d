//! Image hotspot viewer state.
//!
//! Pure geometry for an image shown inside a fixed container: contain-fit,
//! step zoom with a cap, drag panning with edge clamping, a minimap that
//! tracks the visible region, and hotspots stored as image percentages.
//! Nothing here touches a DOM or a renderer.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`consts`] | Zoom step, minimap and marker sizes |
//! | [`geometry`] | Points, sizes, rects, contain-fit |
//! | [`zoom`] | Zoom/pan state and clamping |
//! | [`viewer`] | [`viewer::Viewer`]: hotspots, drag, minimap |

pub mod consts;
pub mod geometry;
pub mod viewer;
pub mod zoom;

pub use geometry::{ImageFit, Orientation, Point, Rect, Size, fit_image};
pub use viewer::{Hotspot, Minimap, Viewer, ViewerOptions};
pub use zoom::ZoomState;
