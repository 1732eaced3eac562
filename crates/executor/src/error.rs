use thiserror::Error;

use common::error::GraphError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to load configuration: {0}")]
    ConfigLoadError(String),

    #[error("Graph processing error: {0}")]
    GraphError(#[from] GraphError),

    #[error("Failed to write report: {0}")]
    IoError(#[from] std::io::Error),
}
