//! Calendar events for a single day.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::layout::TimeSpan;

/// Validation errors for event construction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The event ends before it starts.
    #[error("event ends before it starts ({start}..{end})")]
    EndBeforeStart { start: i64, end: i64 },

    /// A minute offset was negative.
    #[error("minute offset cannot be negative, got {offset}")]
    NegativeOffset { offset: i64 },
}

/// A single event on the day, in minutes from the day origin.
///
/// Events are validated on construction and on deserialization:
/// `start <= end` and both offsets non-negative. Zero-duration events
/// (`start == end`) are legal and lay out like any other event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawEvent")]
pub struct Event {
    /// Start offset in minutes from the day origin.
    pub start: i64,
    /// End offset in minutes from the day origin.
    pub end: i64,
    /// Display title, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Display location, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Wire shape for [`Event`], validated via `TryFrom` during deserialization.
#[derive(Debug, Deserialize)]
struct RawEvent {
    start: i64,
    end: i64,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    location: Option<String>,
}

impl Event {
    /// Creates a validated event.
    pub fn new(start: i64, end: i64) -> Result<Self, ValidationError> {
        if start < 0 {
            return Err(ValidationError::NegativeOffset { offset: start });
        }
        if end < start {
            return Err(ValidationError::EndBeforeStart { start, end });
        }
        Ok(Self {
            start,
            end,
            title: None,
            location: None,
        })
    }

    /// Sets the display title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the display location.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Duration in minutes.
    #[must_use]
    pub const fn duration(&self) -> i64 {
        self.end - self.start
    }
}

impl TryFrom<RawEvent> for Event {
    type Error = ValidationError;

    fn try_from(raw: RawEvent) -> Result<Self, Self::Error> {
        let event = Self::new(raw.start, raw.end)?;
        Ok(Self {
            title: raw.title,
            location: raw.location,
            ..event
        })
    }
}

impl TimeSpan for Event {
    fn start_minute(&self) -> i64 {
        self.start
    }

    fn end_minute(&self) -> i64 {
        self.end
    }
}
