//! Burst bookkeeping types and sampling policy

use mood_core::EmotionLabel;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default number of capture attempts per burst
pub const DEFAULT_TARGET_COUNT: usize = 20;

/// Default minimum number of successful classifications to accept a burst
///
/// The reference policy is the stricter 15-of-20 variant; a burst with
/// exactly this many successes is accepted.
pub const DEFAULT_ACCEPT_THRESHOLD: usize = 15;

/// Default wait between captures, letting the subject's expression and the
/// capture device stabilize
pub const DEFAULT_CAPTURE_INTERVAL: Duration = Duration::from_millis(400);

/// Policy for one sampling session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Fixed burst size: capture attempts per burst (default: 20)
    pub target_count: usize,

    /// Minimum successful classifications to accept a burst (default: 15)
    pub accept_threshold: usize,

    /// Wait between captures (default: 400 ms)
    pub capture_interval: Duration,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            target_count: DEFAULT_TARGET_COUNT,
            accept_threshold: DEFAULT_ACCEPT_THRESHOLD,
            capture_interval: DEFAULT_CAPTURE_INTERVAL,
        }
    }
}

/// One successful classification within a burst
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionSample {
    /// The classified label
    pub label: EmotionLabel,

    /// Zero-based capture attempt this sample came from
    pub capture_index: usize,
}

/// One fixed-length run of capture+classify attempts
///
/// Append-only while the burst runs; failed attempts are dropped rather than
/// recorded, so `len() <= target_count`. A burst is created per session run
/// and discarded once a decision is produced, never reused.
#[derive(Debug, Clone)]
pub struct SampleBurst {
    samples: Vec<EmotionSample>,
    target_count: usize,
}

impl SampleBurst {
    /// Create an empty burst for `target_count` capture attempts
    pub fn new(target_count: usize) -> Self {
        Self {
            samples: Vec::with_capacity(target_count),
            target_count,
        }
    }

    /// Record one successful classification
    ///
    /// Appends in capture order. Attempts past `target_count` are ignored;
    /// the burst never grows beyond the fixed size.
    pub fn record(&mut self, label: EmotionLabel, capture_index: usize) {
        if self.samples.len() < self.target_count {
            self.samples.push(EmotionSample {
                label,
                capture_index,
            });
        }
    }

    /// Successful samples in capture order
    pub fn samples(&self) -> &[EmotionSample] {
        &self.samples
    }

    /// Number of successful samples (the vote denominator)
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True if no attempt succeeded
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The fixed burst size
    pub fn target_count(&self) -> usize {
        self.target_count
    }
}

/// Outcome of one burst
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BurstDecision {
    /// Enough successes; the majority-vote label is the session's output
    Decided(EmotionLabel),

    /// Too few successes; not an error, surfaced as a retry prompt
    Inconclusive,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = SamplingConfig::default();
        assert_eq!(config.target_count, 20);
        assert_eq!(config.accept_threshold, 15);
        assert_eq!(config.capture_interval, Duration::from_millis(400));
    }

    #[test]
    fn burst_is_append_only_and_bounded() {
        let mut burst = SampleBurst::new(3);
        assert!(burst.is_empty());

        burst.record(EmotionLabel::Happy, 0);
        burst.record(EmotionLabel::Sad, 2);
        burst.record(EmotionLabel::Happy, 3);
        // Past the fixed size: ignored
        burst.record(EmotionLabel::Fear, 4);

        assert_eq!(burst.len(), 3);
        assert_eq!(burst.samples()[1].capture_index, 2);
        assert_eq!(burst.target_count(), 3);
    }

    #[test]
    fn dropped_attempts_do_not_occupy_slots() {
        // Failures are simply never recorded; indices may be sparse
        let mut burst = SampleBurst::new(20);
        burst.record(EmotionLabel::Neutral, 7);
        burst.record(EmotionLabel::Neutral, 19);

        assert_eq!(burst.len(), 2);
        assert_eq!(burst.samples()[0].capture_index, 7);
        assert_eq!(burst.samples()[1].capture_index, 19);
    }
}
