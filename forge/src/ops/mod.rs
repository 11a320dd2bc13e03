//! Core operations.
//!
//! Business logic for the scaffolder, separated from argument parsing and
//! output rendering. Side effects go through the `FileSystem` and
//! `CommandRunner` seams so operations can run against in-memory doubles.

pub mod materialize;

pub use materialize::{materialize, preview};
