//! CLI command implementations.

pub mod columns;
pub mod render;

mod util;
