use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while scanning a directory
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Failed to list directory {path:?}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read entry in {path:?}: {source}")]
    Entry {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to open image {name}: {source}")]
    Open {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to decode image {name}: {source}")]
    Decode {
        name: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl ScanError {
    /// Whether this error belongs to a single image entry rather than the scan itself
    pub fn is_decode_failure(&self) -> bool {
        matches!(self, ScanError::Open { .. } | ScanError::Decode { .. })
    }
}

pub type Result<T> = std::result::Result<T, ScanError>;
