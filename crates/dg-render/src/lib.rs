//! Rendering layer for the day grid.
//!
//! Turns the placement list produced by `dg-core` into pixels:
//! - Scale: linear minutes-to-pixels mapping
//! - Theme: pixel constants and the day-origin clock time
//! - Axis: computed hour/half-hour tick labels
//! - Geometry: per-event rectangles from placements
//! - Svg: deterministic SVG document assembly

pub mod axis;
pub mod geometry;
pub mod scale;
pub mod svg;
pub mod theme;

pub use axis::{Tick, ticks};
pub use geometry::{EventRect, event_rect, vertical_scale};
pub use scale::LinearScale;
pub use svg::render;
pub use theme::{Theme, ThemeError};
