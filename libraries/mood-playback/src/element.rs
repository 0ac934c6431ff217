//! Media element seam
//!
//! The session drives an abstract media element; platform code supplies a
//! concrete one (an HTML audio element, a native output pipeline, a test
//! fake). Transport bookkeeping stays in the session: the element is the
//! mechanism, not the source of truth.

use crate::error::MediaError;
use std::time::Duration;

/// A single-track audio sink with load, transport, seek, and gain control
pub trait MediaElement: Send {
    /// Load a new track source, replacing the current one
    ///
    /// # Errors
    /// `MediaError` if the source cannot be loaded or decoded.
    fn set_source(&mut self, url: &str) -> Result<(), MediaError>;

    /// Start or resume playback of the loaded source
    ///
    /// # Errors
    /// `MediaError` if the backend refuses to start.
    fn play(&mut self) -> Result<(), MediaError>;

    /// Pause playback; safe when already paused or nothing is loaded
    fn pause(&mut self);

    /// Seek to an absolute position in the current track
    ///
    /// # Errors
    /// `MediaError` if the backend cannot seek.
    fn seek(&mut self, position: Duration) -> Result<(), MediaError>;

    /// Set output gain, `0.0..=1.0`
    fn set_gain(&mut self, gain: f32);

    /// Duration of the loaded track, if known yet
    fn duration(&self) -> Option<Duration>;

    /// Current playback position
    fn position(&self) -> Duration;
}
