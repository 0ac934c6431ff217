//! Emotion sampling session - burst orchestration
//!
//! Coordinates camera, classifier, burst bookkeeping, and the accept/retry
//! decision. One session produces exactly one decision per burst run.
//!
//! The session is single-threaded and cooperative: each burst iteration
//! suspends on the fixed inter-capture interval and on the classify call, and
//! iterations resume strictly in order, so no two classification calls for
//! the same burst are ever in flight concurrently.

use crate::camera::{CameraDevice, FrameSource};
use crate::classifier::EmotionClassifier;
use crate::error::{Result, SamplingError};
use crate::events::SamplingEvent;
use crate::tally;
use crate::types::{BurstDecision, SampleBurst, SamplingConfig};
use mood_core::EmotionLabel;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Sampling session lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No camera held
    Idle,

    /// Camera acquisition in progress
    Acquiring,

    /// Camera held; a burst is running or can be started
    Sampling,

    /// Burst accepted; camera released
    Decided(EmotionLabel),

    /// Burst fell short of the accept threshold; camera still held so the
    /// caller can offer a retry
    Inconclusive,
}

/// Handle for stopping a session from outside a running burst
///
/// `run_burst` borrows the session mutably for its whole duration, so
/// teardown triggered elsewhere (component unmount, navigation away) goes
/// through this handle. Cancelling is unconditional and idempotent; the
/// running burst releases the camera and returns `SamplingError::Stopped`.
#[derive(Debug, Clone)]
pub struct StopHandle {
    cancel: CancellationToken,
}

impl StopHandle {
    /// Request teardown of the session's current run
    pub fn stop(&self) {
        self.cancel.cancel();
    }
}

/// Emotion sampling session
///
/// Produces exactly one decided emotion (or an explicit inconclusive/retry
/// signal) from a fixed-length burst of camera frames.
///
/// State machine: `Idle → Acquiring → Sampling → {Decided | Inconclusive}`,
/// back to `Idle` on `stop()`. `Acquiring` fails terminally to `Idle` with
/// `DeviceUnavailable`.
pub struct SamplingSession {
    config: SamplingConfig,
    camera: Box<dyn CameraDevice>,
    classifier: Box<dyn EmotionClassifier>,

    // Scoped camera acquisition: dropping the box releases the device.
    // Every exit path (decided, stopped, torn down) takes this.
    frame_source: Option<Box<dyn FrameSource>>,

    state: SessionState,
    cancel: CancellationToken,

    // Event queue for UI synchronization
    pending_events: Vec<SamplingEvent>,
}

impl SamplingSession {
    /// Create a new session over the given camera and classifier
    pub fn new(
        config: SamplingConfig,
        camera: Box<dyn CameraDevice>,
        classifier: Box<dyn EmotionClassifier>,
    ) -> Self {
        Self {
            config,
            camera,
            classifier,
            frame_source: None,
            state: SessionState::Idle,
            cancel: CancellationToken::new(),
            pending_events: Vec::new(),
        }
    }

    /// Acquire the camera for this session
    ///
    /// No-op if the camera is already held. Fails with `DeviceUnavailable`
    /// if acquisition fails; the session stays `Idle` and no burst runs.
    pub fn start(&mut self) -> Result<()> {
        if self.frame_source.is_some() {
            return Ok(());
        }

        self.state = SessionState::Acquiring;
        match self.camera.acquire() {
            Ok(source) => {
                // A session stopped earlier can start a fresh run
                if self.cancel.is_cancelled() {
                    self.cancel = CancellationToken::new();
                }
                self.frame_source = Some(source);
                self.state = SessionState::Sampling;
                info!("Camera acquired");
                Ok(())
            }
            Err(err) => {
                self.state = SessionState::Idle;
                warn!(%err, "Camera acquisition failed");
                Err(err)
            }
        }
    }

    /// Run one full burst and decide
    ///
    /// Performs `target_count` iterations: capture one still, wait the fixed
    /// inter-capture interval, classify. A per-iteration failure drops the
    /// sample and the burst continues; all iterations are attempted
    /// regardless.
    ///
    /// On `Decided` the camera is released before returning, so camera
    /// access never persists into playback. On `Inconclusive` the camera
    /// stays held and the caller decides whether to retry or `stop()`.
    ///
    /// # Errors
    /// `NotStarted` if the camera was never acquired; `Stopped` if the
    /// session was torn down mid-burst (camera released on that path too).
    pub async fn run_burst(&mut self) -> Result<BurstDecision> {
        if self.frame_source.is_none() {
            return Err(SamplingError::NotStarted);
        }

        self.state = SessionState::Sampling;
        let cancel = self.cancel.clone();
        let mut burst = SampleBurst::new(self.config.target_count);
        debug!(target_count = self.config.target_count, "Burst started");

        for capture_index in 0..self.config.target_count {
            if cancel.is_cancelled() {
                return Err(self.abort_stopped());
            }

            let captured = self
                .frame_source
                .as_mut()
                .ok_or(SamplingError::NotStarted)?
                .capture_still();

            let frame = match captured {
                Ok(frame) => Some(frame),
                Err(err) => {
                    warn!(capture_index, %err, "Still capture failed, dropping sample");
                    self.emit_sample_dropped(capture_index, err.to_string());
                    None
                }
            };

            // The interval elapses even for failed captures, keeping the
            // capture cadence fixed
            tokio::select! {
                () = cancel.cancelled() => return Err(self.abort_stopped()),
                () = sleep(self.config.capture_interval) => {}
            }

            let Some(frame) = frame else { continue };

            let outcome = tokio::select! {
                () = cancel.cancelled() => None,
                res = self.classifier.classify(&frame) => Some(res),
            };
            let Some(outcome) = outcome else {
                return Err(self.abort_stopped());
            };
            // A call that resolved after stop() must not mutate a torn-down
            // session's state
            if cancel.is_cancelled() {
                return Err(self.abort_stopped());
            }

            match outcome {
                Ok(label) => {
                    burst.record(label, capture_index);
                    self.emit_sample_recorded(capture_index, label);
                }
                Err(err) => {
                    warn!(capture_index, %err, "Classification failed, dropping sample");
                    self.emit_sample_dropped(capture_index, err.to_string());
                }
            }
        }

        let successes = burst.len();
        self.emit_burst_completed(successes, self.config.target_count);

        // Majority is computed over successful samples only
        let decision = if successes >= self.config.accept_threshold {
            match tally::majority_label(burst.samples()) {
                Some(label) => BurstDecision::Decided(label),
                None => BurstDecision::Inconclusive,
            }
        } else {
            BurstDecision::Inconclusive
        };

        match decision {
            BurstDecision::Decided(label) => {
                info!(%label, successes, "Burst decided");
                self.release_frame_source();
                self.state = SessionState::Decided(label);
            }
            BurstDecision::Inconclusive => {
                info!(
                    successes,
                    threshold = self.config.accept_threshold,
                    "Burst inconclusive"
                );
                self.state = SessionState::Inconclusive;
            }
        }

        Ok(decision)
    }

    /// Explicit teardown
    ///
    /// Always releases the camera, idempotent, callable at any time. A
    /// classify call still in flight when this runs has its eventual result
    /// discarded.
    pub fn stop(&mut self) {
        self.cancel.cancel();
        self.release_frame_source();
        self.state = SessionState::Idle;
    }

    /// Handle for stopping this session's current run from elsewhere
    ///
    /// Handles are tied to the current run; take a fresh one after
    /// restarting a stopped session.
    pub fn stop_handle(&self) -> StopHandle {
        StopHandle {
            cancel: self.cancel.clone(),
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The session's sampling policy
    pub fn config(&self) -> &SamplingConfig {
        &self.config
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// Returns all events emitted since the last drain; the UI calls this
    /// periodically to drive the capture progress readout.
    pub fn drain_events(&mut self) -> Vec<SamplingEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    fn emit_sample_recorded(&mut self, capture_index: usize, label: EmotionLabel) {
        self.pending_events.push(SamplingEvent::SampleRecorded {
            capture_index,
            label,
        });
    }

    fn emit_sample_dropped(&mut self, capture_index: usize, reason: String) {
        self.pending_events.push(SamplingEvent::SampleDropped {
            capture_index,
            reason,
        });
    }

    fn emit_burst_completed(&mut self, successes: usize, attempts: usize) {
        self.pending_events.push(SamplingEvent::BurstCompleted {
            successes,
            attempts,
        });
    }

    // ===== Teardown paths =====

    fn abort_stopped(&mut self) -> SamplingError {
        debug!("Burst aborted by stop");
        self.release_frame_source();
        self.state = SessionState::Idle;
        SamplingError::Stopped
    }

    fn release_frame_source(&mut self) {
        if self.frame_source.take().is_some() {
            debug!("Camera released");
        }
    }
}
