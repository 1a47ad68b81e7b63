use async_trait::async_trait;

use crate::error::Result;

/// A single text-to-speech synthesis request.
#[derive(Debug, Clone)]
pub struct SpeechRequest {
    pub model: String,
    pub voice: String,
    pub input: String,
}

impl SpeechRequest {
    pub fn new(
        model: impl Into<String>,
        voice: impl Into<String>,
        input: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            voice: voice.into(),
            input: input.into(),
        }
    }
}

/// Synthesized audio returned by a provider.
#[derive(Debug, Clone)]
pub struct SpeechResponse {
    /// Encoded audio bytes (MP3 for the providers in this crate).
    pub audio: Vec<u8>,
}

/// Common interface for speech synthesis backends.
#[async_trait]
pub trait SpeechProvider: Send + Sync {
    /// Render the request's input text as audio.
    async fn synthesize(&self, request: &SpeechRequest) -> Result<SpeechResponse>;

    /// Provider name for error messages and logging.
    fn name(&self) -> &'static str;
}
