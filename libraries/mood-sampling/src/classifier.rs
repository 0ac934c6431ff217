//! Emotion classification seam and HTTP client
//!
//! The detection service is stateless: one still image in, one emotion label
//! (or an error) out. The session never retries an individual call; burst
//! redundancy is the resilience mechanism.

use crate::camera::JpegFrame;
use crate::error::ClassifyError;
use async_trait::async_trait;
use mood_core::EmotionLabel;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Stateless remote emotion classification
#[async_trait]
pub trait EmotionClassifier: Send + Sync {
    /// Classify one still frame
    ///
    /// # Errors
    /// Any transport failure, error status, or malformed/unknown response is
    /// a `ClassifyError`; the caller drops the sample.
    async fn classify(&self, frame: &JpegFrame) -> Result<EmotionLabel, ClassifyError>;
}

#[derive(Debug, Deserialize)]
struct DetectEmotionResponse {
    emotion: String,
}

/// HTTP client for the emotion detection service
///
/// Speaks the service's JSON protocol: `POST {base_url}/detect_emotion` with
/// a base64-encoded JPEG in the request body, one label string back.
///
/// # Example
///
/// ```ignore
/// use mood_sampling::HttpClassifier;
///
/// let classifier = HttpClassifier::new("http://127.0.0.1:5000")?;
/// let label = classifier.classify(&frame).await?;
/// ```
pub struct HttpClassifier {
    http: reqwest::Client,
    base_url: String,
}

impl HttpClassifier {
    /// Create a new client for the given service URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClassifyError> {
        let base_url = base_url.into();
        if base_url.is_empty() {
            return Err(ClassifyError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = base_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClassifyError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .connect_timeout(Duration::from_secs(5))
            .user_agent(format!("MoodPlayer/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClassifyError::Request)?;

        Ok(Self { http, base_url })
    }

    /// The normalized service URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl EmotionClassifier for HttpClassifier {
    async fn classify(&self, frame: &JpegFrame) -> Result<EmotionLabel, ClassifyError> {
        let url = format!("{}/detect_emotion", self.base_url);

        let response = self
            .http
            .post(&url)
            .json(&serde_json::json!({ "frame": frame.to_base64() }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClassifyError::ServerError {
                status: status.as_u16(),
                message,
            });
        }

        let body: DetectEmotionResponse = response
            .json()
            .await
            .map_err(|e| ClassifyError::UnexpectedResponse(e.to_string()))?;

        let label = EmotionLabel::parse(&body.emotion)
            .ok_or_else(|| ClassifyError::UnknownLabel(body.emotion.clone()))?;

        debug!(%label, "Frame classified");
        Ok(label)
    }
}
