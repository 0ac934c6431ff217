//! Sampling events
//!
//! Event-based communication for UI synchronization during a burst. The UI
//! drains the queue to drive a progress readout while the burst runs.

use mood_core::EmotionLabel;
use serde::{Deserialize, Serialize};

/// Events emitted by the sampling session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SamplingEvent {
    /// One capture attempt classified successfully
    SampleRecorded {
        /// Zero-based capture attempt
        capture_index: usize,
        /// The classified label
        label: EmotionLabel,
    },

    /// One capture attempt failed (capture or classify) and was dropped
    SampleDropped {
        /// Zero-based capture attempt
        capture_index: usize,
        /// Human-readable failure description
        reason: String,
    },

    /// The burst ran all its attempts
    BurstCompleted {
        /// Number of successful samples (the vote denominator)
        successes: usize,
        /// Number of attempts made (the fixed burst size)
        attempts: usize,
    },
}
