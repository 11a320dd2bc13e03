//! In-memory test doubles for the side-effect seams.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{
    collections::{BTreeMap, BTreeSet},
    io,
    path::{Path, PathBuf},
};

use crate::{CommandRunner, CommandSpec, Error, FileSystem, Result};

/// A single recorded filesystem mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsOp {
    CreateDir(PathBuf),
    Write(PathBuf),
}

/// Filesystem held entirely in memory.
///
/// Enforces the same rules as the disk implementation (parents must exist,
/// directories are not silently replaced) and records every mutation in order.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    dirs: BTreeSet<PathBuf>,
    files: BTreeMap<PathBuf, String>,
    ops: Vec<FsOp>,
}

impl MemoryFileSystem {
    /// Create a filesystem containing only `root` as an existing directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let mut fs = Self::default();
        fs.dirs.insert(root.into());
        fs
    }

    /// Seed an existing file without recording an operation.
    pub fn with_file(mut self, path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        self.files.insert(path.into(), contents.into());
        self
    }

    /// Seed an existing directory without recording an operation.
    pub fn with_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.dirs.insert(path.into());
        self
    }

    /// Read a file's contents.
    pub fn read(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files.get(path.as_ref()).map(String::as_str)
    }

    /// Whether `path` is a directory.
    pub fn is_dir(&self, path: impl AsRef<Path>) -> bool {
        self.dirs.contains(path.as_ref())
    }

    /// Recorded mutations, oldest first.
    pub fn ops(&self) -> &[FsOp] {
        &self.ops
    }

    /// Number of recorded file writes.
    pub fn write_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, FsOp::Write(_)))
            .count()
    }

    fn parent_exists(&self, path: &Path) -> bool {
        path.parent().is_some_and(|parent| self.dirs.contains(parent))
    }
}

impl FileSystem for MemoryFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.dirs.contains(path) || self.files.contains_key(path)
    }

    fn create_dir(&mut self, path: &Path) -> Result<()> {
        let source = if self.exists(path) {
            Some(io::Error::new(io::ErrorKind::AlreadyExists, "entry exists"))
        } else if !self.parent_exists(path) {
            Some(io::Error::new(
                io::ErrorKind::NotFound,
                "parent directory does not exist",
            ))
        } else {
            None
        };
        if let Some(source) = source {
            return Err(Error::CreateDir {
                path: path.to_path_buf(),
                source,
            });
        }

        self.dirs.insert(path.to_path_buf());
        self.ops.push(FsOp::CreateDir(path.to_path_buf()));
        Ok(())
    }

    fn write(&mut self, path: &Path, contents: &str) -> Result<()> {
        let source = if self.dirs.contains(path) {
            Some(io::Error::new(io::ErrorKind::Other, "path is a directory"))
        } else if !self.parent_exists(path) {
            Some(io::Error::new(
                io::ErrorKind::NotFound,
                "parent directory does not exist",
            ))
        } else {
            None
        };
        if let Some(source) = source {
            return Err(Error::WriteFile {
                path: path.to_path_buf(),
                source,
            });
        }

        self.files.insert(path.to_path_buf(), contents.to_string());
        self.ops.push(FsOp::Write(path.to_path_buf()));
        Ok(())
    }
}

/// Command runner that records invocations instead of spawning processes.
#[derive(Debug, Default)]
pub struct RecordingCommandRunner {
    calls: Vec<(CommandSpec, PathBuf)>,
    fail_program: Option<String>,
}

impl RecordingCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every invocation of `program` fail with exit status 1.
    pub fn failing(program: impl Into<String>) -> Self {
        Self {
            calls: Vec::new(),
            fail_program: Some(program.into()),
        }
    }

    /// Recorded invocations with their working directories.
    pub fn calls(&self) -> &[(CommandSpec, PathBuf)] {
        &self.calls
    }

    /// Recorded invocations rendered as command lines.
    pub fn command_lines(&self) -> Vec<String> {
        self.calls.iter().map(|(c, _)| c.to_string()).collect()
    }
}

impl CommandRunner for RecordingCommandRunner {
    fn run(&mut self, command: &CommandSpec, cwd: &Path) -> Result<()> {
        self.calls.push((command.clone(), cwd.to_path_buf()));
        if self.fail_program.as_deref() == Some(command.program.as_str()) {
            return Err(Error::CommandFailed {
                command: command.to_string(),
                status: "exit status: 1".to_string(),
            });
        }
        Ok(())
    }
}
