use std::path::PathBuf;

use crate::gauge::{GaugeFileError, ReduceError};
use crate::logs::LogError;
use crate::plot::RenderError;
use crate::profiles::ProfileError;

/// Anything that aborts a report
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Gauge file error: {0}")]
    Gauge(#[from] GaugeFileError),

    #[error("Reduction failed: {0}")]
    Reduce(#[from] ReduceError),

    #[error("Log error: {0}")]
    Log(#[from] LogError),

    #[error("Profile error: {0}")]
    Profile(#[from] ProfileError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Failed to search {path}: {source}")]
    Search {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
