//! Implementation of the `dg render` command.
//!
//! Reads a JSON array of events, computes the column layout, and writes
//! the rendered SVG document to a file or stdout.

use std::io::{BufWriter, Write, stdout};
use std::path::Path;

use anyhow::{Context, Result};
use dg_core::lay_out;
use dg_render::Theme;

use super::util::read_events;

/// Runs the render command.
pub fn run(theme: &Theme, input: Option<&Path>, output: Option<&Path>) -> Result<()> {
    let events = read_events(input)?;
    let placements = lay_out(events);
    let svg = dg_render::render(&placements, theme).context("failed to render SVG")?;

    match output {
        Some(path) => {
            std::fs::write(path, &svg)
                .with_context(|| format!("failed to write SVG to {}", path.display()))?;
            tracing::debug!(path = %path.display(), bytes = svg.len(), "wrote SVG");
        }
        None => {
            let stdout = stdout();
            let mut writer = BufWriter::new(stdout.lock());
            // Handle broken pipe gracefully (e.g., when piped to `head`)
            let _ = writer.write_all(svg.as_bytes());
        }
    }

    Ok(())
}
