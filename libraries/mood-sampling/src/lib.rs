//! Mood Player - Emotion Sampling
//!
//! Platform-agnostic emotion sampling for Mood Player.
//!
//! This crate provides:
//! - The timed multi-frame capture/classify/aggregate/decide protocol
//! - Majority-vote aggregation with a deterministic tie-break
//! - The 20-sample / accept-at-15 burst policy as named configuration
//! - Scoped camera acquisition with release on every exit path
//! - An HTTP client for the remote emotion detection service
//!
//! # Architecture
//!
//! `mood-sampling` talks to the outside world only through traits: the
//! camera is a [`CameraDevice`] producing a [`FrameSource`], and the
//! detection service is an [`EmotionClassifier`] (with [`HttpClassifier`] as
//! the wire implementation). Platform code supplies both.
//!
//! # Example
//!
//! ```ignore
//! use mood_sampling::{BurstDecision, HttpClassifier, SamplingConfig, SamplingSession};
//!
//! let classifier = HttpClassifier::new("http://127.0.0.1:5000")?;
//! let mut session = SamplingSession::new(
//!     SamplingConfig::default(),
//!     Box::new(platform_camera),
//!     Box::new(classifier),
//! );
//!
//! session.start()?;
//! match session.run_burst().await? {
//!     BurstDecision::Decided(label) => {
//!         // camera already released; hand the label to the playback session
//!     }
//!     BurstDecision::Inconclusive => {
//!         // camera still live; offer a retry or session.stop()
//!     }
//! }
//! ```

mod camera;
mod classifier;
mod error;
mod events;
mod session;
mod tally;
mod types;

// Public exports
pub use camera::{CameraDevice, FrameSource, JpegFrame};
pub use classifier::{EmotionClassifier, HttpClassifier};
pub use error::{ClassifyError, Result, SamplingError};
pub use events::SamplingEvent;
pub use session::{SamplingSession, SessionState, StopHandle};
pub use tally::{majority_label, tally};
pub use types::{
    BurstDecision, EmotionSample, SampleBurst, SamplingConfig, DEFAULT_ACCEPT_THRESHOLD,
    DEFAULT_CAPTURE_INTERVAL, DEFAULT_TARGET_COUNT,
};
