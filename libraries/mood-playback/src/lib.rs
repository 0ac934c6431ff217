//! Mood Player - Emotion-Driven Playback
//!
//! Platform-agnostic playback management for Mood Player.
//!
//! This crate provides:
//! - Emotion-to-playlist and emotion-to-icon resolution with a lenient
//!   fallback for unknown labels
//! - The `PlaybackSession` transport state machine (play, pause, skip with
//!   wrap-around, seek, volume)
//! - Random initial-track selection per loaded emotion
//! - Event-based UI synchronization via a drainable queue
//!
//! # Architecture
//!
//! The session drives an abstract [`MediaElement`]; platform code supplies a
//! concrete one. Transport truth lives in the session, not the element: a
//! user-issued pause survives a track swap.
//!
//! # Example
//!
//! ```ignore
//! use mood_playback::{PlaybackConfig, PlaybackSession};
//!
//! let mut session = PlaybackSession::new(PlaybackConfig::default(), Box::new(platform_audio));
//! session.load_for_emotion("Happy")?;
//! session.set_volume(60);
//! session.next()?;
//! ```

mod element;
mod error;
mod events;
mod resolver;
mod session;
mod types;

// Public exports
pub use element::MediaElement;
pub use error::{MediaError, PlaybackError, Result};
pub use events::PlaybackEvent;
pub use resolver::{icon_for, resolve_playlist, DEFAULT_ICON};
pub use session::PlaybackSession;
pub use types::{PlaybackConfig, TransportState, DEFAULT_VOLUME};
