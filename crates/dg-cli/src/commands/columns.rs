//! Implementation of the `dg columns` command.
//!
//! Prints the computed column layout as an aligned table (default) or
//! JSON, so a layout can be inspected without rendering it.

use std::fmt::Write;
use std::path::Path;

use anyhow::{Context, Result};
use dg_core::{Event, Placement, lay_out};

use super::util::read_events;

/// Runs the columns command.
pub fn run(input: Option<&Path>, json: bool) -> Result<()> {
    let events = read_events(input)?;
    let placements = lay_out(events);

    if json {
        let output =
            serde_json::to_string_pretty(&placements).context("failed to serialize placements")?;
        println!("{output}");
    } else {
        print!("{}", format_table(&placements));
    }

    Ok(())
}

/// Formats the placement list as an aligned table.
///
/// Offsets are printed in minutes, the same unit the input uses.
pub fn format_table(placements: &[Placement<Event>]) -> String {
    let mut out = String::new();

    if placements.is_empty() {
        writeln!(out, "no events").unwrap();
        return out;
    }

    writeln!(out, "{:>5} {:>5} {:>4} {:>4}  TITLE", "START", "END", "COL", "OF").unwrap();
    for placement in placements {
        writeln!(
            out,
            "{:>5} {:>5} {:>4} {:>4}  {}",
            placement.event.start,
            placement.event.end,
            placement.column,
            placement.columns,
            placement.event.title.as_deref().unwrap_or("(untitled)")
        )
        .unwrap();
    }

    out
}
