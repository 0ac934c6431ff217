//! Majority-vote tally over a burst's successful samples
//!
//! The tally keeps labels in first-seen order and ties are broken in favor of
//! the earlier label, so the decision is deterministic for a given sample
//! order. That determinism is part of the contract, which is why this is an
//! ordered vector rather than a hash map.

use crate::types::EmotionSample;
use mood_core::EmotionLabel;

/// Count votes per label, labels in first-seen order
pub fn tally(samples: &[EmotionSample]) -> Vec<(EmotionLabel, usize)> {
    let mut counts: Vec<(EmotionLabel, usize)> = Vec::new();

    for sample in samples {
        match counts.iter_mut().find(|(label, _)| *label == sample.label) {
            Some((_, count)) => *count += 1,
            None => counts.push((sample.label, 1)),
        }
    }

    counts
}

/// The label with the highest vote count, first-seen label winning ties
///
/// Returns `None` for an empty sample set.
pub fn majority_label(samples: &[EmotionSample]) -> Option<EmotionLabel> {
    let counts = tally(samples);

    let mut best: Option<(EmotionLabel, usize)> = None;
    for (label, count) in counts {
        match best {
            // Strictly greater: an equal later count never displaces the
            // first-seen label
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((label, count)),
        }
    }

    best.map(|(label, _)| label)
}
