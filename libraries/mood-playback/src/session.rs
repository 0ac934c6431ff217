//! Playback session - transport state machine
//!
//! Owns the playlist, track cursor, and transport flags, and drives the
//! platform media element. Commands take `&mut self`, so they serialize by
//! construction: a track swap and its conditional resume apply as one
//! sequence with no interleaving.
//!
//! `is_playing` reflects the command history (what the session asked for),
//! not the element's own report, so a user-issued pause survives a track
//! swap: the next track loads paused.

use crate::element::MediaElement;
use crate::error::{PlaybackError, Result};
use crate::events::PlaybackEvent;
use crate::resolver;
use crate::types::{PlaybackConfig, TransportState};
use rand::Rng;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Emotion-driven playback session
///
/// Loaded once per decided emotion via [`load_for_emotion`], then driven by
/// transport commands until torn down or reloaded for a new decision.
///
/// [`load_for_emotion`]: PlaybackSession::load_for_emotion
pub struct PlaybackSession {
    element: Box<dyn MediaElement>,

    playlist: Vec<String>,
    current_index: usize,
    is_playing: bool,
    position_percent: f32,
    volume_percent: i32,
    icon: &'static str,

    // Event queue for UI synchronization
    pending_events: Vec<PlaybackEvent>,
}

impl PlaybackSession {
    /// Create a new session over the given media element
    pub fn new(config: PlaybackConfig, mut element: Box<dyn MediaElement>) -> Self {
        let volume = config.volume.clamp(0, 100);
        element.set_gain(volume as f32 / 100.0);

        Self {
            element,
            playlist: Vec::new(),
            current_index: 0,
            is_playing: false,
            position_percent: 0.0,
            volume_percent: volume,
            icon: resolver::DEFAULT_ICON,
            pending_events: Vec::new(),
        }
    }

    // ===== Loading =====

    /// Load the playlist for a detected emotion and start playing
    ///
    /// The label is resolved leniently: unknown or empty labels get the
    /// fallback playlist and icon. The initial track is chosen uniformly at
    /// random and playback starts immediately.
    ///
    /// # Errors
    /// `MediaLoadFailed` if the element cannot load the selected track. The
    /// playlist and selected index are kept so a retry or skip still works;
    /// `is_playing` reverts to false.
    pub fn load_for_emotion(&mut self, label: &str) -> Result<()> {
        let tracks = resolver::resolve_playlist(label);
        self.playlist = tracks.iter().map(ToString::to_string).collect();
        self.icon = resolver::icon_for(label);
        self.current_index = rand::thread_rng().gen_range(0..self.playlist.len());
        self.position_percent = 0.0;

        info!(
            emotion = label,
            track = %self.playlist[self.current_index],
            "Playlist loaded"
        );

        // Play optimistically; a load failure reverts the flag
        self.set_playing(true);
        if let Err(err) = self.load_current() {
            self.set_playing(false);
            return Err(err);
        }
        Ok(())
    }

    // ===== Transport =====

    /// Start or resume playback
    ///
    /// No-op when already playing or when no playlist is loaded.
    pub fn play(&mut self) -> Result<()> {
        if self.is_playing || self.playlist.is_empty() {
            return Ok(());
        }

        self.element
            .play()
            .map_err(|e| PlaybackError::Media(e.to_string()))?;
        self.set_playing(true);
        Ok(())
    }

    /// Pause playback; safe in any state
    pub fn pause(&mut self) {
        self.element.pause();
        self.set_playing(false);
    }

    /// Skip to the next track, wrapping at the end of the playlist
    ///
    /// Resumes immediately if the session was playing before the swap.
    ///
    /// # Errors
    /// `NoPlaylistLoaded` if no playlist is loaded; `MediaLoadFailed` if the
    /// new track cannot be loaded.
    pub fn next(&mut self) -> Result<()> {
        if self.playlist.is_empty() {
            return Err(PlaybackError::NoPlaylistLoaded);
        }

        self.current_index = (self.current_index + 1) % self.playlist.len();
        self.position_percent = 0.0;
        self.load_current()
    }

    /// Skip to the previous track, wrapping at the start of the playlist
    ///
    /// Resumes immediately if the session was playing before the swap.
    ///
    /// # Errors
    /// `NoPlaylistLoaded` if no playlist is loaded; `MediaLoadFailed` if the
    /// new track cannot be loaded.
    pub fn previous(&mut self) -> Result<()> {
        if self.playlist.is_empty() {
            return Err(PlaybackError::NoPlaylistLoaded);
        }

        self.current_index =
            (self.current_index + self.playlist.len() - 1) % self.playlist.len();
        self.position_percent = 0.0;
        self.load_current()
    }

    /// Seek to a percentage of the current track
    ///
    /// The percentage is clamped to `0..=100`. A no-op (not an error) when
    /// the element does not know the track duration yet.
    pub fn seek(&mut self, percent: f32) -> Result<()> {
        let percent = percent.clamp(0.0, 100.0);

        let Some(duration) = self.element.duration() else {
            debug!("Seek ignored, track duration unknown");
            return Ok(());
        };

        let target = duration.mul_f64(f64::from(percent) / 100.0);
        self.element
            .seek(target)
            .map_err(|e| PlaybackError::Media(e.to_string()))?;
        self.position_percent = percent;
        self.emit_position(percent);
        Ok(())
    }

    /// Set volume as a percentage, clamped to `0..=100`
    ///
    /// Applies immediately regardless of transport state and persists across
    /// track changes.
    pub fn set_volume(&mut self, percent: i32) {
        let percent = percent.clamp(0, 100);
        self.volume_percent = percent;
        self.element.set_gain(percent as f32 / 100.0);
        self.emit_volume(percent);
    }

    // ===== Element notifications =====

    /// Progress notification from the element
    ///
    /// Passive: recomputes the position percentage and nothing else. An
    /// unknown or zero duration reads as 0%.
    pub fn on_time_update(&mut self, position: Duration, duration: Option<Duration>) {
        let percent = match duration {
            Some(total) if !total.is_zero() => {
                ((position.as_secs_f64() / total.as_secs_f64()) * 100.0).clamp(0.0, 100.0) as f32
            }
            _ => 0.0,
        };
        self.position_percent = percent;
        self.emit_position(percent);
    }

    /// The current track played to its natural end
    ///
    /// Advances to the next track and continues playback; a no-op with no
    /// playlist loaded.
    ///
    /// # Errors
    /// `MediaLoadFailed` if the next track cannot be loaded.
    pub fn on_track_ended(&mut self) -> Result<()> {
        if self.playlist.is_empty() {
            return Ok(());
        }
        debug!("Track ended, advancing");
        self.next()
    }

    // ===== Accessors =====

    /// Current transport state
    pub fn state(&self) -> TransportState {
        if self.playlist.is_empty() {
            TransportState::Stopped
        } else if self.is_playing {
            TransportState::Playing
        } else {
            TransportState::Paused
        }
    }

    /// Whether a play command is in effect
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// The loaded playlist
    pub fn playlist(&self) -> &[String] {
        &self.playlist
    }

    /// Index of the current track within the playlist
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// URL of the current track, if a playlist is loaded
    pub fn current_track(&self) -> Option<&str> {
        self.playlist.get(self.current_index).map(String::as_str)
    }

    /// Playback position as a percentage of track duration
    pub fn position_percent(&self) -> f32 {
        self.position_percent
    }

    /// Current volume percent
    pub fn volume_percent(&self) -> i32 {
        self.volume_percent
    }

    /// Display icon for the loaded emotion
    pub fn icon(&self) -> &'static str {
        self.icon
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// Returns all events emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    fn emit_state_changed(&mut self) {
        let state = self.state();
        self.pending_events.push(PlaybackEvent::StateChanged { state });
    }

    fn emit_track_changed(&mut self, index: usize, url: String) {
        self.pending_events
            .push(PlaybackEvent::TrackChanged { index, url });
    }

    fn emit_position(&mut self, percent: f32) {
        self.pending_events
            .push(PlaybackEvent::PositionUpdate { percent });
    }

    fn emit_volume(&mut self, percent: i32) {
        self.pending_events
            .push(PlaybackEvent::VolumeChanged { percent });
    }

    fn emit_error(&mut self, message: String) {
        self.pending_events.push(PlaybackEvent::Error { message });
    }

    // ===== Internals =====

    /// Load `playlist[current_index]` into the element, resuming if playing
    ///
    /// Swap and resume apply under one `&mut self` borrow, so no command can
    /// observe a half-applied track change.
    fn load_current(&mut self) -> Result<()> {
        let url = self.playlist[self.current_index].clone();

        if let Err(err) = self.element.set_source(&url) {
            warn!(track = %url, %err, "Track load failed");
            let message = err.to_string();
            self.set_playing(false);
            self.emit_error(message.clone());
            return Err(PlaybackError::MediaLoadFailed(message));
        }

        self.emit_track_changed(self.current_index, url);

        if self.is_playing {
            self.element
                .play()
                .map_err(|e| PlaybackError::Media(e.to_string()))?;
        }
        Ok(())
    }

    fn set_playing(&mut self, playing: bool) {
        if self.is_playing != playing {
            self.is_playing = playing;
            self.emit_state_changed();
        }
    }
}
