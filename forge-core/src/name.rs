//! Project name handling.

use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::{Error, Result};

/// The name of the project to scaffold.
///
/// Used verbatim as the directory name, the package name and in the
/// generated documentation. Validation only rejects names that cannot be a
/// single directory entry; casing and punctuation are never normalized.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if let Some(reason) = Self::rejection(&name) {
            return Err(Error::InvalidName { name, reason });
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn rejection(name: &str) -> Option<&'static str> {
        if name.is_empty() {
            Some("must not be empty")
        } else if name == "." || name == ".." {
            Some("must not be a relative directory reference")
        } else if name.contains(['/', '\\']) {
            Some("must not contain path separators")
        } else if name.contains('\0') {
            Some("must not contain NUL characters")
        } else if name.trim() != name {
            Some("must not start or end with whitespace")
        } else {
            None
        }
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProjectName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
