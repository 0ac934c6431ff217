//! The closed emotion label set

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Emotion label drawn from the classifier's fixed closed set
///
/// The wire spelling (as produced by the detection service and carried in
/// the hand-off query parameter) is the capitalized variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmotionLabel {
    Happy,
    Sad,
    Angry,
    Disgust,
    Neutral,
    Surprise,
    Fear,
}

impl EmotionLabel {
    /// All labels in canonical order
    pub const ALL: [EmotionLabel; 7] = [
        EmotionLabel::Happy,
        EmotionLabel::Sad,
        EmotionLabel::Angry,
        EmotionLabel::Disgust,
        EmotionLabel::Neutral,
        EmotionLabel::Surprise,
        EmotionLabel::Fear,
    ];

    /// Parse a wire spelling into a label
    ///
    /// Returns `None` for anything outside the closed set. Callers decide
    /// the fallback: the classifier client drops the sample, the playlist
    /// resolver substitutes the default playlist.
    pub fn parse(s: &str) -> Option<EmotionLabel> {
        match s {
            "Happy" => Some(EmotionLabel::Happy),
            "Sad" => Some(EmotionLabel::Sad),
            "Angry" => Some(EmotionLabel::Angry),
            "Disgust" => Some(EmotionLabel::Disgust),
            "Neutral" => Some(EmotionLabel::Neutral),
            "Surprise" => Some(EmotionLabel::Surprise),
            "Fear" => Some(EmotionLabel::Fear),
            _ => None,
        }
    }

    /// The canonical wire spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionLabel::Happy => "Happy",
            EmotionLabel::Sad => "Sad",
            EmotionLabel::Angry => "Angry",
            EmotionLabel::Disgust => "Disgust",
            EmotionLabel::Neutral => "Neutral",
            EmotionLabel::Surprise => "Surprise",
            EmotionLabel::Fear => "Fear",
        }
    }
}

impl fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by `FromStr` for labels outside the closed set
#[derive(Debug, Clone, thiserror::Error)]
#[error("Unknown emotion label: {0}")]
pub struct UnknownLabel(String);

impl FromStr for EmotionLabel {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EmotionLabel::parse(s).ok_or_else(|| UnknownLabel(s.to_string()))
    }
}
