use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for sdkforge-core operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("invalid project name '{name}': {reason}")]
    #[diagnostic(
        code(sdkforge::invalid_name),
        help("use a plain directory name such as 'my-sdk'")
    )]
    InvalidName { name: String, reason: &'static str },

    #[error("'{}' already exists", .path.display())]
    #[diagnostic(
        code(sdkforge::directory_exists),
        help("choose another project name or remove the existing entry")
    )]
    DirectoryExists { path: PathBuf },

    #[error("failed to create directory '{}'", .path.display())]
    #[diagnostic(code(sdkforge::create_dir))]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{}'", .path.display())]
    #[diagnostic(code(sdkforge::write_file))]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to run '{program}'")]
    #[diagnostic(
        code(sdkforge::spawn),
        help("make sure '{program}' is installed and on your PATH")
    )]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{command}' failed with {status}")]
    #[diagnostic(code(sdkforge::command_failed))]
    CommandFailed { command: String, status: String },
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn test_messages_are_single_line() {
        let errors = [
            Error::InvalidName {
                name: "a/b".to_string(),
                reason: "must not contain path separators",
            },
            Error::DirectoryExists {
                path: PathBuf::from("/tmp/my-sdk"),
            },
            Error::WriteFile {
                path: PathBuf::from("my-sdk/package.json"),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
            },
            Error::CommandFailed {
                command: "pnpm install".to_string(),
                status: "exit status: 1".to_string(),
            },
        ];

        for error in errors {
            assert!(!error.to_string().contains('\n'), "{error}");
        }
    }

    #[test]
    fn test_directory_exists_message() {
        let error = Error::DirectoryExists {
            path: PathBuf::from("work/sample-sdk"),
        };
        assert_eq!(error.to_string(), "'work/sample-sdk' already exists");
    }

    #[test]
    fn test_command_failed_message() {
        let error = Error::CommandFailed {
            command: "git init".to_string(),
            status: "exit status: 128".to_string(),
        };
        assert_eq!(error.to_string(), "'git init' failed with exit status: 128");
    }
}
