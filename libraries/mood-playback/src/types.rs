//! Playback types

use serde::{Deserialize, Serialize};

/// Default volume percent for a fresh session
pub const DEFAULT_VOLUME: i32 = 100;

/// Transport state of a playback session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportState {
    /// No playlist loaded yet
    Stopped,

    /// Audio is playing
    Playing,

    /// Playlist loaded, audio paused
    Paused,
}

/// Playback session configuration
#[derive(Debug, Clone)]
pub struct PlaybackConfig {
    /// Initial volume percent, `0..=100`
    pub volume: i32,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            volume: DEFAULT_VOLUME,
        }
    }
}
