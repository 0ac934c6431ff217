//! Error types for playback

use thiserror::Error;

/// Failure reported by a platform media element
///
/// Implementations wrap whatever their backend produces; the session maps
/// these into [`PlaybackError`] variants by operation.
#[derive(Error, Debug)]
#[error("{0}")]
pub struct MediaError(pub String);

/// Playback session errors
#[derive(Error, Debug)]
pub enum PlaybackError {
    /// A transport command needs a playlist and none is loaded
    #[error("No playlist loaded")]
    NoPlaylistLoaded,

    /// The media element could not load a track source
    #[error("Failed to load track: {0}")]
    MediaLoadFailed(String),

    /// The media element failed a transport command
    #[error("Media element error: {0}")]
    Media(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
