//! Pixel geometry for placed events.

use dg_core::{Placement, TimeSpan};

use crate::scale::LinearScale;
use crate::theme::Theme;

/// The pixel rectangle of one placed event, before text insets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// The vertical minutes-to-pixels scale for a theme.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn vertical_scale(theme: &Theme) -> LinearScale {
    LinearScale::new(
        (theme.domain_start as f64, theme.domain_end as f64),
        (0.0, theme.height),
    )
}

/// Computes the rectangle for one placement.
///
/// Events in a chunk split the track evenly: each column is
/// `track / columns` wide and the rectangle is inset horizontally by the
/// theme's event margin. Zero-duration events produce zero height.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn event_rect<E: TimeSpan>(
    placement: &Placement<E>,
    theme: &Theme,
    scale: &LinearScale,
) -> EventRect {
    let column_width = theme.track_width() / placement.columns as f64;
    let start = placement.event.start_minute() as f64;
    let end = placement.event.end_minute() as f64;

    EventRect {
        x: column_width * placement.column as f64 + theme.event_margin,
        y: scale.map(start),
        width: column_width,
        height: scale.extent(start, end),
    }
}
