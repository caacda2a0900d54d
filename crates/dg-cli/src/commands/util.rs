//! Shared helpers for command implementations.

use std::fs::File;
use std::io::{BufReader, Read, stdin};
use std::path::Path;

use anyhow::{Context, Result};
use dg_core::Event;

/// Reads a JSON array of events from a file, or from stdin when no path
/// is given. Events failing validation (`end < start`, negative offsets)
/// are reported as errors, not silently laid out.
pub fn read_events(input: Option<&Path>) -> Result<Vec<Event>> {
    let events = match input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open events file: {}", path.display()))?;
            parse_events(BufReader::new(file))
                .with_context(|| format!("failed to parse events from {}", path.display()))?
        }
        None => parse_events(stdin().lock()).context("failed to parse events from stdin")?,
    };
    tracing::debug!(count = events.len(), "loaded events");
    Ok(events)
}

fn parse_events<R: Read>(reader: R) -> Result<Vec<Event>, serde_json::Error> {
    serde_json::from_reader(reader)
}
