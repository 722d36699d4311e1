use thiserror::Error;

use common::error::Error as PathError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    ConfigLoadError(String),

    #[error("CSV input selected but no input path was configured.")]
    MissingInputPath,

    #[error("Graph processing error: {0}")]
    GraphError(#[from] PathError),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Background solve task failed: {0}")]
    TaskJoinError(#[from] tokio::task::JoinError),

    #[error("Logging setup failed: {0}")]
    LoggingError(String),
}
