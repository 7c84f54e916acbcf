//! Job runner binary for the `rectnest` library. Reads JSON job files,
//! runs a placement or sheet selection, and writes layout JSON and SVG
//! drawings next to each other in an output folder.

use std::sync::LazyLock;
use std::time::Instant;

pub mod config;
pub mod io;

/// Start of the process, log lines carry the time elapsed since this point.
pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);
