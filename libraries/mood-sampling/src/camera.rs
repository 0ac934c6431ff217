//! Platform-agnostic camera seam
//!
//! Abstracts still-frame capture for different platforms. The session only
//! needs two things from the outside world: a way to acquire the camera once
//! per sampling run, and a way to pull the current still from the live feed.
//!
//! Acquisition is scoped: the `Box<dyn FrameSource>` owns the live stream and
//! implementors release the device in `Drop`. The session guarantees the box
//! is dropped on every exit path (decided, stopped, torn down), so camera
//! access never outlives the sampling session.

use crate::error::Result;
use base64::Engine;

/// One JPEG-encoded still frame pulled from the camera feed
#[derive(Debug, Clone)]
pub struct JpegFrame(Vec<u8>);

impl JpegFrame {
    /// Wrap raw JPEG bytes
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Raw JPEG bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Base64 encoding used by the classification wire format
    pub fn to_base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(&self.0)
    }
}

/// Live camera feed acquired for one sampling session
///
/// Implementors release the underlying device when dropped.
pub trait FrameSource: Send {
    /// Capture the current still frame from the live feed
    ///
    /// # Errors
    /// Returns `SamplingError::CaptureFailed` if the frame cannot be read;
    /// the session records a dropped sample and continues the burst.
    fn capture_still(&mut self) -> Result<JpegFrame>;
}

/// Camera device the session acquires a frame source from
pub trait CameraDevice: Send + Sync {
    /// Acquire the live feed
    ///
    /// # Errors
    /// Returns `SamplingError::DeviceUnavailable` if the camera cannot be
    /// opened; the session surfaces this and does not proceed.
    fn acquire(&self) -> Result<Box<dyn FrameSource>>;
}
