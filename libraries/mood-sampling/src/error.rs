//! Error types for emotion sampling

use thiserror::Error;

/// Errors that can occur when talking to the classification service.
///
/// Every variant is recovered locally by dropping the sample; a classify
/// failure never aborts the enclosing burst.
#[derive(Error, Debug)]
pub enum ClassifyError {
    /// HTTP request failed
    #[error("Classification request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Service returned an error response
    #[error("Classification service error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Invalid service URL
    #[error("Invalid classifier URL: {0}")]
    InvalidUrl(String),

    /// Response body did not have the expected shape
    #[error("Unexpected classifier response: {0}")]
    UnexpectedResponse(String),

    /// Response carried a label outside the closed set
    #[error("Unknown emotion label in response: {0}")]
    UnknownLabel(String),
}

/// Sampling session errors
#[derive(Error, Debug)]
pub enum SamplingError {
    /// Camera could not be acquired; fatal to starting a session
    #[error("Camera unavailable: {0}")]
    DeviceUnavailable(String),

    /// A single still frame could not be captured (dropped sample)
    #[error("Frame capture failed: {0}")]
    CaptureFailed(String),

    /// The session was stopped while a burst was in progress
    #[error("Sampling session stopped")]
    Stopped,

    /// A burst was requested before the camera was acquired
    #[error("Sampling session not started")]
    NotStarted,

    /// Classification error
    #[error(transparent)]
    Classify(#[from] ClassifyError),
}

/// Result type for sampling operations
pub type Result<T> = std::result::Result<T, SamplingError>;
