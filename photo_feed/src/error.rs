use thiserror::Error;

/// Failures while fetching and decoding the photo metadata list.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Metadata request failed: {0}")]
    TransportOrValidation(String),
    #[error("Metadata decode error: {0}")]
    DecodeFailed(#[from] serde_json::Error),
}

/// Failures while turning a record into a displayable image.
#[derive(Debug, Error)]
pub enum MaterializeError {
    #[error("Invalid image URL {url:?} for photo {id}: {source}")]
    InvalidUrl {
        id: i64,
        url: String,
        source: url::ParseError,
    },
    #[error("Image transfer failed: {0}")]
    TransferFailed(String),
    #[error("Failed to decode image from {url}: {source}")]
    DecodeFailed {
        url: String,
        source: image::ImageError,
    },
}

/// Anything that ends a pipeline run early.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Materialize(#[from] MaterializeError),
    #[error("HTTP client error: {0}")]
    Client(String),
    #[error("Failed to start pipeline worker: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("Pipeline worker stopped before reporting a result")]
    WorkerLost,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Read(#[from] std::io::Error),
    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
