//! Emotion-to-playlist and emotion-to-icon resolution
//!
//! The hand-off from sampling arrives as an opaque label string, so
//! resolution is lenient by contract: anything outside the known vocabulary
//! gets the neutral fallback playlist and icon, never an error and never an
//! empty list.

use mood_core::EmotionLabel;

const HAPPY_TRACKS: &[&str] = &[
    "/songs/Happy/happy_song1.mp3",
    "/songs/Happy/happy_song2.mp3",
];

const SAD_TRACKS: &[&str] = &["/songs/Sad/sad_song1.mp3", "/songs/Sad/sad_song2.mp3"];

// TODO: dedicated playlists for Disgust/Neutral/Fear once those assets exist
const ANGRY_TRACKS: &[&str] = &[
    "/songs/Angry/angry_song1.mp3",
    "/songs/Angry/angry_song2.mp3",
];

/// Icon shown when the label is unknown or missing
pub const DEFAULT_ICON: &str = "/Emojis/Neutral.gif";

/// Playlist for a detected emotion label
///
/// Never empty: unknown labels resolve to the neutral fallback list.
pub fn resolve_playlist(label: &str) -> &'static [&'static str] {
    match EmotionLabel::parse(label) {
        Some(EmotionLabel::Happy) => HAPPY_TRACKS,
        Some(EmotionLabel::Sad | EmotionLabel::Surprise) => SAD_TRACKS,
        Some(
            EmotionLabel::Angry
            | EmotionLabel::Disgust
            | EmotionLabel::Neutral
            | EmotionLabel::Fear,
        )
        | None => ANGRY_TRACKS,
    }
}

/// Display icon for a detected emotion label
pub fn icon_for(label: &str) -> &'static str {
    match EmotionLabel::parse(label) {
        Some(EmotionLabel::Happy) => "/Emojis/happy.gif",
        Some(EmotionLabel::Sad) => "/Emojis/sad.gif",
        Some(EmotionLabel::Angry) => "/Emojis/angry.gif",
        Some(EmotionLabel::Disgust) => "/Emojis/disgust.gif",
        Some(EmotionLabel::Surprise) => "/Emojis/surprise.gif",
        Some(EmotionLabel::Fear) => "/Emojis/fear.gif",
        Some(EmotionLabel::Neutral) | None => DEFAULT_ICON,
    }
}
