//! Column layout for overlapping events.
//!
//! Places a day's events into side-by-side columns so that no two
//! simultaneous events collide visually.
//!
//! # Algorithm Summary
//!
//! 1. Sort events by start time, ties broken by end time (stable)
//! 2. Sweep left to right, grouping events into chunks of transitively
//!    overlapping events; within a chunk, reuse the first column whose
//!    previous occupant has already ended, or open a new one
//! 3. When a chunk closes, back-fill every placement in it with the
//!    chunk's final column count so all its events share equal width

use serde::Serialize;

/// A span of the day in minutes, the seam between the layout and any
/// concrete event representation.
pub trait TimeSpan {
    /// Start offset in minutes from the day origin.
    fn start_minute(&self) -> i64;

    /// End offset in minutes from the day origin. Must be `>= start_minute()`;
    /// inputs violating that precondition produce an unspecified layout.
    fn end_minute(&self) -> i64;
}

/// Where one event landed on the grid.
///
/// Carries the event itself so callers never have to correlate the
/// placement list with a parallel event list by index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placement<E> {
    /// The event being placed.
    pub event: E,
    /// Column index within the event's chunk, packed toward zero.
    pub column: usize,
    /// Total columns in the event's chunk. Every placement in one chunk
    /// shares this value, so `width = track / columns` is uniform.
    pub columns: usize,
}

/// Open columns of the chunk currently being swept.
///
/// One entry per column, holding the end time of that column's latest
/// occupant. Index in the vec is the column index.
#[derive(Debug, Default)]
struct OpenColumns {
    ends: Vec<i64>,
}

impl OpenColumns {
    /// True if the event overlaps at least one open column, i.e. it
    /// belongs to the current chunk. All columns are checked: an earlier
    /// column having ended does not close the chunk on its own.
    fn is_member(&self, start: i64) -> bool {
        self.ends.iter().any(|&end| start < end)
    }

    /// First column whose occupant has ended by `start`, if any.
    /// Scanning in index order packs events toward column zero.
    fn first_free(&self, start: i64) -> Option<usize> {
        self.ends.iter().position(|&end| end <= start)
    }

    fn occupy(&mut self, column: usize, end: i64) {
        self.ends[column] = end;
    }

    /// Opens a new column and returns its index.
    fn open(&mut self, end: i64) -> usize {
        self.ends.push(end);
        self.ends.len() - 1
    }

    /// Drops all columns and starts over with a single occupied column.
    fn reset(&mut self, end: i64) {
        self.ends.clear();
        self.ends.push(end);
    }

    fn count(&self) -> usize {
        self.ends.len()
    }
}

/// Sorts events ascending by start, ties broken by end.
///
/// The sort is stable, so events with identical `(start, end)` keep their
/// relative order and the layout stays deterministic.
pub fn sort_events<E: TimeSpan>(events: &mut [E]) {
    events.sort_by_key(|e| (e.start_minute(), e.end_minute()));
}

/// Lays out a day's events into columns.
///
/// Returns one [`Placement`] per input event, in sorted order. Events
/// that overlap transitively form a chunk; all placements in a chunk
/// carry the same `columns`, which equals the maximum number of events
/// simultaneously open anywhere in that chunk.
///
/// The input need not be sorted. Malformed spans (`end < start`) are a
/// caller-side precondition violation, not a detected error.
pub fn lay_out<E: TimeSpan>(mut events: Vec<E>) -> Vec<Placement<E>> {
    sort_events(&mut events);

    let mut placements: Vec<Placement<E>> = Vec::with_capacity(events.len());
    let mut open = OpenColumns::default();
    let mut chunk_start = 0;

    for event in events {
        let i = placements.len();
        let start = event.start_minute();
        let end = event.end_minute();

        if open.is_member(start) {
            let column = match open.first_free(start) {
                Some(column) => {
                    open.occupy(column, end);
                    column
                }
                None => open.open(end),
            };
            placements.push(Placement {
                event,
                column,
                columns: 1,
            });
        } else {
            // Every open column has ended before this event starts, so the
            // chunk is complete and this event opens the next one.
            if i > 0 {
                tracing::debug!(
                    chunk_start,
                    events = i - chunk_start,
                    columns = open.count(),
                    "chunk closed"
                );
                backfill(&mut placements[chunk_start..i], open.count());
            }
            open.reset(end);
            chunk_start = i;
            placements.push(Placement {
                event,
                column: 0,
                columns: 1,
            });
        }
    }

    // The final chunk never sees a non-member event; close it here.
    let len = placements.len();
    if len > 0 {
        backfill(&mut placements[chunk_start..len], open.count());
    }

    placements
}

/// Stamps the final column count onto every placement of a closed chunk.
fn backfill<E>(chunk: &mut [Placement<E>], columns: usize) {
    for placement in chunk {
        placement.columns = columns;
    }
}
