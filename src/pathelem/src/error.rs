//! Error types for path resolution and scanning.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PathError {
    #[error("{}: not found", path.display())]
    NotFound { path: PathBuf },

    #[error("output directory {} doesn't exist", path.display())]
    InvalidOutputDirectory { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
