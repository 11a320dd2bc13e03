//! Filesystem capability used by the materializer.

use std::path::Path;

use tracing::debug;

use crate::{Error, Result};

/// Filesystem operations needed to materialize a project.
///
/// Paths are absolute or relative to a base directory chosen by the caller;
/// implementations never consult the process working directory on their own.
/// Parent directories are never created implicitly.
pub trait FileSystem {
    /// Whether anything (file or directory) occupies `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Create a single directory. The parent must already exist.
    fn create_dir(&mut self, path: &Path) -> Result<()>;

    /// Write `contents` to a new or existing file. The parent must already exist.
    fn write(&mut self, path: &Path, contents: &str) -> Result<()>;
}

/// The real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskFileSystem;

impl FileSystem for DiskFileSystem {
    fn exists(&self, path: &Path) -> bool {
        // symlink_metadata so a dangling symlink still counts as occupied
        path.symlink_metadata().is_ok()
    }

    fn create_dir(&mut self, path: &Path) -> Result<()> {
        debug!(path = %path.display(), "creating directory");
        std::fs::create_dir(path).map_err(|source| Error::CreateDir {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write(&mut self, path: &Path, contents: &str) -> Result<()> {
        debug!(path = %path.display(), bytes = contents.len(), "writing file");
        std::fs::write(path, contents).map_err(|source| Error::WriteFile {
            path: path.to_path_buf(),
            source,
        })
    }
}
