//! Core types and capabilities for the sdkforge scaffolder.
//!
//! This crate provides the inputs of project generation ([`ProjectName`],
//! [`GenerationOptions`]) and the side-effect seams the materializer writes
//! through ([`FileSystem`], [`CommandRunner`]).

mod error;
mod file;
mod fs;
mod name;
mod options;
mod process;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use error::{Error, Result};
// File operations
pub use file::GeneratedFile;
pub use fs::{DiskFileSystem, FileSystem};
// Generation inputs
pub use name::ProjectName;
pub use options::{GenerationOptions, PackageManager, ProjectContext};
// External processes
pub use process::{CommandRunner, CommandSpec, SystemCommandRunner};
