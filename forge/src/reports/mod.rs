//! Report data structures for commands.
//!
//! Operations build reports, then commands render them to an output
//! target. Nothing here performs I/O beyond printing.

mod materialize;
mod output;
mod style;

pub use materialize::{MaterializeReport, PreviewFile, PreviewReport};
pub use output::{Report, TerminalOutput};
