//! Error type for file-store and JSON operations.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// An error raised while touching the file system or handling JSON text.
///
/// The delimited-text codec itself never fails; only the I/O around it does.
#[derive(Debug)]
pub enum Error {
    /// A file-store operation failed for the given path.
    Io { path: PathBuf, source: io::Error },
    /// JSON text at the given path could not be parsed, or a value could not
    /// be serialized for writing to it.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Result alias used by every fallible operation in this crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub(crate) fn json(path: impl AsRef<Path>, source: serde_json::Error) -> Self {
        Error::Json {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// The path the failed operation concerned
    pub fn path(&self) -> &Path {
        match self {
            Error::Io { path, .. } | Error::Json { path, .. } => path,
        }
    }

    /// The underlying I/O error kind, if this is an I/O failure
    pub fn kind(&self) -> Option<io::ErrorKind> {
        match self {
            Error::Io { source, .. } => Some(source.kind()),
            Error::Json { .. } => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == Some(io::ErrorKind::NotFound)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io { path, source } => {
                write!(f, "I/O error at {}: {}", path.display(), source)
            }
            Error::Json { path, source } => {
                write!(f, "JSON error at {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io { source, .. } => Some(source),
            Error::Json { source, .. } => Some(source),
        }
    }
}
