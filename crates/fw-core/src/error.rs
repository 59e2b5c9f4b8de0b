//! Error taxonomy shared by every fake web crate.

use std::io;
use std::path::PathBuf;

/// Result alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, FakeWebError>;

/// Errors raised while generating or writing a fake web.
#[derive(Debug, thiserror::Error)]
pub enum FakeWebError {
    /// A parameter is out of range, or a page asked for more distinct
    /// referrers than its sampling universe holds.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A directory or file operation failed.
    #[error("IO error at {}: {source}", path.display())]
    Io {
        /// Path being created or written.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: io::Error,
    },
}

impl FakeWebError {
    /// Build an `InvalidArgument` from anything displayable.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Attach a path to an I/O failure.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this is an argument error (as opposed to I/O).
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}
