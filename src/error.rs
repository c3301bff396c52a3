//! Unified error type for the photo grid application.

use thiserror::Error;

/// All errors that can end the application.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(#[from] photo_feed::error::ConfigError),
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] photo_feed::error::PipelineError),
}
