//! Pixel constants for the rendered grid.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors for theme values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// Canvas width or height was not positive.
    #[error("canvas dimensions must be positive")]
    NonPositiveCanvas,

    /// The time domain was empty or inverted.
    #[error("domain must satisfy start < end, got {start}..{end}")]
    EmptyDomain { start: i64, end: i64 },

    /// The tick interval was not positive.
    #[error("tick interval must be positive, got {interval}")]
    NonPositiveTickInterval { interval: i64 },
}

/// Everything the renderer needs to turn placements into pixels.
///
/// All lengths are pixels; `domain_start`/`domain_end` are minutes from
/// the day origin. The defaults reproduce the classic 9-to-9 day view:
/// a 620x720 grid with half-hour ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Grid width, excluding outer margins.
    pub width: f64,
    /// Grid height, excluding outer margins.
    pub height: f64,
    pub margin_left: f64,
    pub margin_top: f64,
    pub margin_right: f64,
    pub margin_bottom: f64,
    /// Horizontal inset applied to each event rectangle.
    pub event_margin: f64,
    /// First minute of the rendered day.
    pub domain_start: i64,
    /// Last minute of the rendered day.
    pub domain_end: i64,
    /// Minutes between axis ticks.
    pub tick_interval: i64,
    /// Clock time at minute zero, used for axis labels.
    pub day_origin: NaiveTime,
    /// Horizontal shift of event title/location text within its column.
    pub label_x_shift: f64,
    /// Vertical shift of the title baseline below the event top.
    pub title_y_shift: f64,
    /// Vertical shift of the location baseline below the event top.
    pub location_y_shift: f64,
    /// Horizontal shift of the accent line at the event's left edge.
    pub border_x_shift: f64,
    /// Horizontal shift of the large hour labels left of the axis.
    pub hour_label_x_shift: f64,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            width: 620.0,
            height: 720.0,
            margin_left: 40.0,
            margin_top: 20.0,
            margin_right: 20.0,
            margin_bottom: 20.0,
            event_margin: 10.0,
            domain_start: 0,
            domain_end: 720,
            tick_interval: 30,
            day_origin: NaiveTime::from_hms_opt(9, 0, 0).expect("valid clock time"),
            label_x_shift: 25.0,
            title_y_shift: 18.0,
            location_y_shift: 30.0,
            border_x_shift: 13.0,
            hour_label_x_shift: -30.0,
        }
    }
}

impl Theme {
    /// Checks the theme is renderable.
    pub fn validate(&self) -> Result<(), ThemeError> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(ThemeError::NonPositiveCanvas);
        }
        if self.domain_end <= self.domain_start {
            return Err(ThemeError::EmptyDomain {
                start: self.domain_start,
                end: self.domain_end,
            });
        }
        if self.tick_interval <= 0 {
            return Err(ThemeError::NonPositiveTickInterval {
                interval: self.tick_interval,
            });
        }
        Ok(())
    }

    /// Horizontal space available to event columns.
    #[must_use]
    pub fn track_width(&self) -> f64 {
        self.width - self.margin_left
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_valid() {
        assert_eq!(Theme::default().validate(), Ok(()));
    }

    #[test]
    fn default_track_width_excludes_left_margin() {
        let theme = Theme::default();
        assert!((theme.track_width() - 580.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_empty_domain() {
        let theme = Theme {
            domain_start: 720,
            domain_end: 720,
            ..Theme::default()
        };
        assert_eq!(
            theme.validate(),
            Err(ThemeError::EmptyDomain {
                start: 720,
                end: 720
            })
        );
    }

    #[test]
    fn rejects_non_positive_tick_interval() {
        let theme = Theme {
            tick_interval: 0,
            ..Theme::default()
        };
        assert!(theme.validate().is_err());
    }

    #[test]
    fn rejects_zero_canvas() {
        let theme = Theme {
            width: 0.0,
            ..Theme::default()
        };
        assert_eq!(theme.validate(), Err(ThemeError::NonPositiveCanvas));
    }

    #[test]
    fn theme_toml_roundtrip_via_serde() {
        let theme = Theme {
            width: 400.0,
            ..Theme::default()
        };
        let json = serde_json::to_string(&theme).unwrap();
        let parsed: Theme = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, theme);
    }

    #[test]
    fn partial_deserialization_fills_defaults() {
        let parsed: Theme = serde_json::from_str(r#"{"width": 300.0}"#).unwrap();
        assert!((parsed.width - 300.0).abs() < f64::EPSILON);
        assert_eq!(parsed.domain_end, 720);
    }
}
