//! Time axis tick generation.
//!
//! Ticks are computed from the theme's domain and day-origin clock time
//! rather than looked up in a table, so a grid starting at any hour gets
//! correct labels. Hour ticks carry a large clock label plus a small
//! AM/PM marker; other ticks carry a small clock label.

use chrono::{Duration, Timelike};

use crate::theme::Theme;

/// One tick on the vertical time axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tick {
    /// Minute offset from the day origin.
    pub offset: i64,
    /// Small axis label: "AM"/"PM" on hour ticks, a clock time otherwise.
    pub label: String,
    /// Large clock label ("9:00"), present on hour ticks only.
    pub hour_label: Option<String>,
}

impl Tick {
    /// True if this tick falls on a full hour.
    #[must_use]
    pub const fn is_hour(&self) -> bool {
        self.hour_label.is_some()
    }
}

/// Generates ticks every `tick_interval` minutes across the theme's domain,
/// both endpoints included.
#[must_use]
pub fn ticks(theme: &Theme) -> Vec<Tick> {
    let mut ticks = Vec::new();
    let mut offset = theme.domain_start;
    while offset <= theme.domain_end {
        ticks.push(tick_at(theme, offset));
        offset += theme.tick_interval;
    }
    ticks
}

fn tick_at(theme: &Theme, offset: i64) -> Tick {
    let time = theme.day_origin + Duration::minutes(offset);
    let (is_pm, hour) = time.hour12();
    let minute = time.minute();

    if minute == 0 {
        Tick {
            offset,
            label: if is_pm { "PM" } else { "AM" }.to_string(),
            hour_label: Some(format!("{hour}:00")),
        }
    } else {
        Tick {
            offset,
            label: format!("{hour}:{minute:02}"),
            hour_label: None,
        }
    }
}
