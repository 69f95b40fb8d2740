use std::path::PathBuf;

use thiserror::Error;

/// Failures at the terminal/host boundary. The simulation itself never fails.
#[derive(Debug, Error)]
pub enum ShowError {
    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] std::io::Error),

    #[error("invalid hex color `{0}` (expected RRGGBB, e.g. 1a1b26)")]
    InvalidColor(String),

    #[error("cannot open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ShowError>;
