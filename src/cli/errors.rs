use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Conversion(#[from] png2svg::Error),

    #[error("{count} file(s) could not be converted")]
    FailedFiles { count: usize },

    #[error("Unable to serialize report: {0}")]
    Report(#[from] serde_json::Error),
}
