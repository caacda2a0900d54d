//! SVG document assembly.
//!
//! Builds the day view as a string: background, one group per event
//! (rectangle, left accent line, clipped title/location text), then the
//! time axis. Output is deterministic for a given placement list and
//! theme, which keeps snapshot tests stable.

use std::fmt::Write;

use dg_core::{Event, Placement};

use crate::axis::ticks;
use crate::geometry::{event_rect, vertical_scale};
use crate::scale::LinearScale;
use crate::theme::{Theme, ThemeError};

/// Baseline shift applied to axis labels.
const TICK_LABEL_DY: &str = "0.32em";

/// Renders placed events as a complete SVG document.
///
/// The placement list is consumed as-is; run `dg_core::lay_out` first.
pub fn render(placements: &[Placement<Event>], theme: &Theme) -> Result<String, ThemeError> {
    theme.validate()?;
    let scale = vertical_scale(theme);
    tracing::debug!(events = placements.len(), "rendering day grid");

    let mut out = String::new();
    let total_width = theme.width + theme.margin_left + theme.margin_right;
    let total_height = theme.height + theme.margin_top + theme.margin_bottom;
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
        px(total_width),
        px(total_height)
    )
    .unwrap();
    writeln!(
        out,
        r#"  <g transform="translate({},{})">"#,
        px(theme.margin_left * 2.0),
        px(theme.margin_top)
    )
    .unwrap();
    writeln!(
        out,
        r#"    <rect class="background" width="{}" height="{}"/>"#,
        px(theme.width),
        px(theme.height)
    )
    .unwrap();

    if !placements.is_empty() {
        write_defs(&mut out, placements, theme, &scale);
    }
    for (index, placement) in placements.iter().enumerate() {
        write_event(&mut out, index, placement, theme, &scale);
    }
    write_axis(&mut out, theme, &scale);

    writeln!(out, "  </g>").unwrap();
    writeln!(out, "</svg>").unwrap();
    Ok(out)
}

/// Clip paths keeping event text inside its column.
fn write_defs(
    out: &mut String,
    placements: &[Placement<Event>],
    theme: &Theme,
    scale: &LinearScale,
) {
    writeln!(out, "    <defs>").unwrap();
    for (index, placement) in placements.iter().enumerate() {
        let rect = event_rect(placement, theme, scale);
        writeln!(out, r#"      <clipPath id="textclip{index}">"#).unwrap();
        writeln!(
            out,
            r#"        <rect x="{}" y="{}" width="{}" height="{}"/>"#,
            px(rect.x),
            px(rect.y),
            px(rect.width),
            px(rect.height)
        )
        .unwrap();
        writeln!(out, "      </clipPath>").unwrap();
    }
    writeln!(out, "    </defs>").unwrap();
}

fn write_event(
    out: &mut String,
    index: usize,
    placement: &Placement<Event>,
    theme: &Theme,
    scale: &LinearScale,
) {
    let rect = event_rect(placement, theme, scale);
    let column_x = rect.x - theme.event_margin;

    writeln!(out, r#"    <g class="event">"#).unwrap();
    writeln!(
        out,
        r#"      <rect class="event-rect" x="{}" y="{}" width="{}" height="{}"/>"#,
        px(rect.x),
        px(rect.y),
        px(rect.width),
        px(rect.height)
    )
    .unwrap();
    writeln!(
        out,
        r#"      <line class="event-border" x1="{x}" y1="{}" x2="{x}" y2="{}"/>"#,
        px(rect.y),
        px(rect.y + rect.height),
        x = px(column_x + theme.border_x_shift)
    )
    .unwrap();
    if let Some(title) = &placement.event.title {
        writeln!(
            out,
            r##"      <text class="event-title" x="{}" y="{}" clip-path="url(#textclip{index})">{}</text>"##,
            px(column_x + theme.label_x_shift),
            px(rect.y + theme.title_y_shift),
            escape(title)
        )
        .unwrap();
    }
    if let Some(location) = &placement.event.location {
        writeln!(
            out,
            r##"      <text class="event-location" x="{}" y="{}" clip-path="url(#textclip{index})">{}</text>"##,
            px(column_x + theme.label_x_shift),
            px(rect.y + theme.location_y_shift),
            escape(location)
        )
        .unwrap();
    }
    writeln!(out, "    </g>").unwrap();
}

fn write_axis(out: &mut String, theme: &Theme, scale: &LinearScale) {
    writeln!(out, r#"    <g class="axis">"#).unwrap();
    for tick in ticks(theme) {
        #[allow(clippy::cast_precision_loss)]
        let y = scale.map(tick.offset as f64);
        let class = if tick.is_hour() { "tick hour" } else { "tick" };
        writeln!(
            out,
            r#"      <g class="{class}" transform="translate(0,{})">"#,
            px(y)
        )
        .unwrap();
        writeln!(out, r#"        <line x2="-6"/>"#).unwrap();
        writeln!(
            out,
            r#"        <text class="tick-label" x="-10" dy="{TICK_LABEL_DY}">{}</text>"#,
            escape(&tick.label)
        )
        .unwrap();
        if let Some(hour) = &tick.hour_label {
            writeln!(
                out,
                r#"        <text class="hour-label" x="{}" dy="{TICK_LABEL_DY}">{}</text>"#,
                px(theme.hour_label_x_shift),
                escape(hour)
            )
            .unwrap();
        }
        writeln!(out, "      </g>").unwrap();
    }
    writeln!(out, "    </g>").unwrap();
}

/// Formats a pixel value, dropping the fraction when it is whole.
#[allow(clippy::cast_possible_truncation)]
fn px(value: f64) -> String {
    if (value - value.round()).abs() < 1e-6 {
        format!("{}", value.round() as i64)
    } else {
        format!("{value:.2}")
    }
}

/// Escapes text for use in SVG content and attribute values.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
