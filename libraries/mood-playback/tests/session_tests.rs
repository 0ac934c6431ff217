//! Integration tests for the playback session
//!
//! A shared-state fake media element records every command, so tests can
//! assert what the session actually asked the platform to do.

use mood_playback::{
    MediaElement, MediaError, PlaybackConfig, PlaybackError, PlaybackEvent, PlaybackSession,
    TransportState,
};
use std::sync::{Arc, Mutex};
use std::time::Duration;

// ===== Test Helpers =====

#[derive(Default)]
struct ElementState {
    source: Option<String>,
    playing: bool,
    gain: f32,
    duration: Option<Duration>,
    seeks: Vec<Duration>,
    play_calls: usize,
    load_calls: usize,
    fail_next_load: bool,
}

#[derive(Clone, Default)]
struct FakeElement {
    state: Arc<Mutex<ElementState>>,
}

impl FakeElement {
    fn with_duration(duration: Duration) -> Self {
        let element = Self::default();
        element.state.lock().unwrap().duration = Some(duration);
        element
    }

    fn fail_next_load(&self) {
        self.state.lock().unwrap().fail_next_load = true;
    }

    fn source(&self) -> Option<String> {
        self.state.lock().unwrap().source.clone()
    }

    fn playing(&self) -> bool {
        self.state.lock().unwrap().playing
    }

    fn gain(&self) -> f32 {
        self.state.lock().unwrap().gain
    }

    fn seeks(&self) -> Vec<Duration> {
        self.state.lock().unwrap().seeks.clone()
    }

    fn play_calls(&self) -> usize {
        self.state.lock().unwrap().play_calls
    }

    fn load_calls(&self) -> usize {
        self.state.lock().unwrap().load_calls
    }
}

impl MediaElement for FakeElement {
    fn set_source(&mut self, url: &str) -> Result<(), MediaError> {
        let mut state = self.state.lock().unwrap();
        state.load_calls += 1;
        if state.fail_next_load {
            state.fail_next_load = false;
            return Err(MediaError("decode failure".into()));
        }
        state.source = Some(url.to_string());
        state.playing = false;
        Ok(())
    }

    fn play(&mut self) -> Result<(), MediaError> {
        let mut state = self.state.lock().unwrap();
        state.play_calls += 1;
        state.playing = true;
        Ok(())
    }

    fn pause(&mut self) {
        self.state.lock().unwrap().playing = false;
    }

    fn seek(&mut self, position: Duration) -> Result<(), MediaError> {
        self.state.lock().unwrap().seeks.push(position);
        Ok(())
    }

    fn set_gain(&mut self, gain: f32) {
        self.state.lock().unwrap().gain = gain;
    }

    fn duration(&self) -> Option<Duration> {
        self.state.lock().unwrap().duration
    }

    fn position(&self) -> Duration {
        Duration::ZERO
    }
}

fn session_with(element: &FakeElement) -> PlaybackSession {
    PlaybackSession::new(PlaybackConfig::default(), Box::new(element.clone()))
}

// ===== Loading =====

#[test]
fn load_for_emotion_selects_a_member_and_plays() {
    let element = FakeElement::default();
    let mut session = session_with(&element);

    session.load_for_emotion("Happy").unwrap();

    assert_eq!(session.state(), TransportState::Playing);
    assert!(session.is_playing());
    assert!(!session.playlist().is_empty());

    // The loaded source is the selected playlist member
    let current = session.current_track().unwrap().to_string();
    assert!(session.playlist().contains(&current));
    assert_eq!(element.source(), Some(current));
    assert!(element.playing());
    assert_eq!(session.icon(), "/Emojis/happy.gif");
}

#[test]
fn unknown_label_loads_the_fallback_playlist() {
    let element = FakeElement::default();
    let mut session = session_with(&element);

    session.load_for_emotion("Confused").unwrap();

    assert!(!session.playlist().is_empty());
    assert_eq!(session.state(), TransportState::Playing);
    assert_eq!(session.icon(), "/Emojis/Neutral.gif");
}

#[test]
fn surprise_plays_from_the_sad_playlist() {
    let element = FakeElement::default();
    let mut session = session_with(&element);

    session.load_for_emotion("Surprise").unwrap();

    assert!(session
        .current_track()
        .unwrap()
        .starts_with("/songs/Sad/"));
}

#[test]
fn load_failure_reverts_to_paused_and_keeps_the_selection() {
    let element = FakeElement::default();
    let mut session = session_with(&element);
    element.fail_next_load();

    let result = session.load_for_emotion("Happy");

    assert!(matches!(result, Err(PlaybackError::MediaLoadFailed(_))));
    assert!(!session.is_playing());
    assert_eq!(session.state(), TransportState::Paused);

    // Selection survives so a skip or retry still works
    assert!(session.current_index() < session.playlist().len());
    let events = session.drain_events();
    assert!(events
        .iter()
        .any(|e| matches!(e, PlaybackEvent::Error { .. })));

    // A subsequent skip recovers
    session.next().unwrap();
    assert!(element.source().is_some());
}

// ===== Transport =====

#[test]
fn play_is_a_noop_when_already_playing() {
    let element = FakeElement::default();
    let mut session = session_with(&element);

    session.load_for_emotion("Happy").unwrap();
    let calls = element.play_calls();

    session.play().unwrap();
    assert_eq!(element.play_calls(), calls);
}

#[test]
fn play_without_a_playlist_is_a_noop() {
    let element = FakeElement::default();
    let mut session = session_with(&element);

    session.play().unwrap();
    assert_eq!(element.play_calls(), 0);
    assert_eq!(session.state(), TransportState::Stopped);
}

#[test]
fn pause_then_play_resumes() {
    let element = FakeElement::default();
    let mut session = session_with(&element);
    session.load_for_emotion("Sad").unwrap();

    session.pause();
    assert_eq!(session.state(), TransportState::Paused);
    assert!(!element.playing());

    session.play().unwrap();
    assert_eq!(session.state(), TransportState::Playing);
    assert!(element.playing());
}

#[test]
fn next_cycles_back_to_the_start() {
    let element = FakeElement::default();
    let mut session = session_with(&element);
    session.load_for_emotion("Happy").unwrap();

    let start = session.current_index();
    let len = session.playlist().len();

    for _ in 0..len {
        session.next().unwrap();
        // Source always tracks the cursor
        assert_eq!(
            element.source().as_deref(),
            session.current_track()
        );
    }
    assert_eq!(session.current_index(), start);
}

#[test]
fn previous_wraps_from_the_start() {
    let element = FakeElement::default();
    let mut session = session_with(&element);
    session.load_for_emotion("Happy").unwrap();

    let start = session.current_index();
    let len = session.playlist().len();

    for _ in 0..len {
        session.previous().unwrap();
    }
    assert_eq!(session.current_index(), start);
}

#[test]
fn skip_while_paused_does_not_resume() {
    let element = FakeElement::default();
    let mut session = session_with(&element);
    session.load_for_emotion("Happy").unwrap();

    session.pause();
    session.next().unwrap();

    assert_eq!(session.state(), TransportState::Paused);
    assert!(!element.playing());
    // The new source is loaded and waiting
    assert_eq!(element.source().as_deref(), session.current_track());
}

#[test]
fn skip_while_playing_resumes_the_new_track() {
    let element = FakeElement::default();
    let mut session = session_with(&element);
    session.load_for_emotion("Happy").unwrap();

    session.next().unwrap();

    assert_eq!(session.state(), TransportState::Playing);
    assert!(element.playing());
}

#[test]
fn skip_without_a_playlist_is_rejected() {
    let element = FakeElement::default();
    let mut session = session_with(&element);

    assert!(matches!(session.next(), Err(PlaybackError::NoPlaylistLoaded)));
    assert!(matches!(
        session.previous(),
        Err(PlaybackError::NoPlaylistLoaded)
    ));
}

// ===== Seek and volume =====

#[test]
fn seek_converts_percent_via_duration() {
    let element = FakeElement::with_duration(Duration::from_secs(200));
    let mut session = session_with(&element);
    session.load_for_emotion("Happy").unwrap();

    session.seek(50.0).unwrap();

    assert_eq!(element.seeks(), vec![Duration::from_secs(100)]);
    assert_eq!(session.position_percent(), 50.0);
}

#[test]
fn seek_clamps_out_of_range_percentages() {
    let element = FakeElement::with_duration(Duration::from_secs(100));
    let mut session = session_with(&element);
    session.load_for_emotion("Happy").unwrap();

    session.seek(150.0).unwrap();
    session.seek(-20.0).unwrap();

    assert_eq!(
        element.seeks(),
        vec![Duration::from_secs(100), Duration::ZERO]
    );
}

#[test]
fn seek_with_unknown_duration_is_a_noop() {
    let element = FakeElement::default();
    let mut session = session_with(&element);
    session.load_for_emotion("Happy").unwrap();

    session.seek(50.0).unwrap();
    assert!(element.seeks().is_empty());
}

#[test]
fn volume_clamps_and_applies_as_gain() {
    let element = FakeElement::default();
    let mut session = session_with(&element);

    session.set_volume(150);
    assert_eq!(session.volume_percent(), 100);
    assert_eq!(element.gain(), 1.0);

    session.set_volume(-10);
    assert_eq!(session.volume_percent(), 0);
    assert_eq!(element.gain(), 0.0);

    session.set_volume(30);
    assert_eq!(session.volume_percent(), 30);
    assert_eq!(element.gain(), 0.3);
}

#[test]
fn volume_persists_across_track_changes() {
    let element = FakeElement::default();
    let mut session = session_with(&element);
    session.load_for_emotion("Happy").unwrap();

    session.set_volume(30);
    session.next().unwrap();

    assert_eq!(session.volume_percent(), 30);
    assert_eq!(element.gain(), 0.3);
}

// ===== Element notifications =====

#[test]
fn time_update_recomputes_percent_only() {
    let element = FakeElement::default();
    let mut session = session_with(&element);
    session.load_for_emotion("Happy").unwrap();
    let index = session.current_index();
    session.drain_events();

    session.on_time_update(Duration::from_secs(30), Some(Duration::from_secs(120)));

    assert_eq!(session.position_percent(), 25.0);
    assert!(session.is_playing());
    assert_eq!(session.current_index(), index);

    // Unknown and zero durations read as 0%
    session.on_time_update(Duration::from_secs(30), None);
    assert_eq!(session.position_percent(), 0.0);
    session.on_time_update(Duration::from_secs(30), Some(Duration::ZERO));
    assert_eq!(session.position_percent(), 0.0);
}

#[test]
fn track_ended_advances_and_keeps_playing() {
    let element = FakeElement::default();
    let mut session = session_with(&element);
    session.load_for_emotion("Happy").unwrap();
    let index = session.current_index();
    let len = session.playlist().len();

    session.on_track_ended().unwrap();

    assert_eq!(session.current_index(), (index + 1) % len);
    assert_eq!(session.state(), TransportState::Playing);
    assert!(element.playing());
}

#[test]
fn track_ended_without_a_playlist_is_a_noop() {
    let element = FakeElement::default();
    let mut session = session_with(&element);

    session.on_track_ended().unwrap();
    assert_eq!(element.load_calls(), 0);
}

// ===== Events =====

#[test]
fn events_drain_in_order_and_clear() {
    let element = FakeElement::default();
    let mut session = session_with(&element);

    session.load_for_emotion("Happy").unwrap();
    session.set_volume(40);

    let events = session.drain_events();
    assert!(events
        .iter()
        .any(|e| matches!(e, PlaybackEvent::StateChanged { .. })));
    assert!(events
        .iter()
        .any(|e| matches!(e, PlaybackEvent::TrackChanged { .. })));
    assert!(events
        .iter()
        .any(|e| matches!(e, PlaybackEvent::VolumeChanged { percent: 40 })));

    assert!(!session.has_pending_events());
    assert!(session.drain_events().is_empty());
}

#[test]
fn repeated_loads_always_select_a_playlist_member() {
    let element = FakeElement::default();
    let mut session = session_with(&element);

    for _ in 0..20 {
        session.load_for_emotion("Happy").unwrap();
        let current = session.current_track().unwrap().to_string();
        assert!(session.playlist().contains(&current));
    }
}
