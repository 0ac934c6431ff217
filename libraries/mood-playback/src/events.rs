//! Playback events
//!
//! Event-based communication for UI synchronization. The session queues
//! events as commands apply; the UI drains the queue to stay in sync with
//! transport state.

use crate::types::TransportState;
use serde::{Deserialize, Serialize};

/// Events emitted by the playback session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// Transport state changed
    StateChanged {
        /// New transport state
        state: TransportState,
    },

    /// The current track changed (load, skip, wrap, or natural end)
    TrackChanged {
        /// Playlist index of the new track
        index: usize,
        /// Track source URL
        url: String,
    },

    /// Playback position moved
    PositionUpdate {
        /// Position as a percentage of track duration, `0.0..=100.0`
        percent: f32,
    },

    /// Volume changed
    VolumeChanged {
        /// Volume percent, `0..=100`
        percent: i32,
    },

    /// A transport or load command failed
    Error {
        /// Human-readable failure description
        message: String,
    },
}
