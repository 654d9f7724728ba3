use std::{io, path::PathBuf};

use thiserror::Error;

/// Describes the potential error conditions that might arise while
/// initializing a repository.
#[derive(Debug, Error)]
pub enum Error {
    #[error("working tree path is empty")]
    EmptyWorkDir,

    #[error("unable to access or create {path}: {source}")]
    PathAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{0} exists but is not a directory")]
    NotADirectory(PathBuf),

    #[error("failed to create {name} directory: {source}")]
    DirCreation {
        name: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("failed to create {name} file: {source}")]
    FileCreation {
        name: &'static str,
        #[source]
        source: io::Error,
    },
}

/// A specialized `Result` type for repository initialization.
pub type Result<T> = std::result::Result<T, Error>;
