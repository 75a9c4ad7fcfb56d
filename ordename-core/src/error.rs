use std::path::PathBuf;
use thiserror::Error as ThisError;

/// Errors surfaced by the core rename operations.
///
/// None of these are recovered locally; they propagate to the caller and
/// halt further processing for the directory being worked on.
#[derive(Debug, ThisError)]
pub enum Error {
    #[error("directory not found or not listable: {}", path.display())]
    DirectoryNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot rename '{from}' to '{to}': target already exists")]
    Collision { from: String, to: String },

    #[error("target name list is empty")]
    EmptyTargetList,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
