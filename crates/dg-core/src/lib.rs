//! Core domain logic for the day grid.
//!
//! This crate contains the fundamental types and logic for:
//! - Events: validated single-day events in minutes from the day origin
//! - Layout: sorting events and packing overlapping ones into columns
//!
//! Rendering (pixels, axis labels, SVG) lives in `dg-render`; this crate
//! operates purely in the input's time-unit domain.

pub mod event;
pub mod layout;

pub use event::{Event, ValidationError};
pub use layout::{Placement, TimeSpan, lay_out, sort_events};
