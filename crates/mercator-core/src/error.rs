// File: crates/mercator-core/src/error.rs
// Summary: Error type for chart configuration; the projection math itself never fails.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("Projection must be Mercator (got '{0}')")]
    UnsupportedProjection(String),

    #[error("invalid chart bounds: {0}")]
    InvalidBounds(&'static str),

    #[error("failed to read chart config '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse chart config: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
