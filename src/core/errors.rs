use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A directory could not be opened or listed. The source keeps the
    /// underlying kind (not found, not a directory, permission denied).
    #[error("cannot read directory '{}': {source}", .path.display())]
    Access {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("usage error: {0}")]
    Usage(#[from] clap::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Access {
            path: path.into(),
            source,
        }
    }
}
