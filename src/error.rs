use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FsbextError {
    #[error("decoder executable not found at {}", .0.display())]
    DecoderNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("failed to open log file {}: {source}", path.display())]
    LogFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, FsbextError>;
