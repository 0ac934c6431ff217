//! Mood Player - Core Vocabulary
//!
//! Shared types for the emotion-driven player:
//! - The closed set of emotion labels the classifier can produce
//! - Lenient parsing for the sampling → playback hand-off
//!
//! `mood-core` is platform-agnostic and has no I/O. The hand-off between the
//! sampling session and the playback session is an opaque string; parsing
//! failures are handled by substitution (default playlist/icon), never by
//! erroring, so `EmotionLabel::parse` returns an `Option`.

mod label;

pub use label::{EmotionLabel, UnknownLabel};
