//! Mock speech provider for testing
//!
//! Provides a configurable mock provider that can simulate successful
//! synthesis, hard failures, and failures partway through a batch.

use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::{Result, TtsError};
use crate::speech::{SpeechProvider, SpeechRequest, SpeechResponse};

/// A mock provider for testing batch synthesis behavior
pub struct MockSpeechProvider {
    /// Number of calls to serve before failing (usize::MAX = never fail)
    succeed_count: usize,
    /// Error to return once the call budget is spent
    fail_with: Option<TtsError>,
    /// Audio bytes to return on success (None = echo the input text)
    audio: Option<Vec<u8>>,
    /// Current call count
    call_count: AtomicUsize,
    /// Input text of every request received, in order
    requests: Mutex<Vec<String>>,
}

impl MockSpeechProvider {
    /// Create a provider that always returns the given audio bytes
    pub fn always_succeeds(audio: &[u8]) -> Self {
        Self {
            succeed_count: usize::MAX,
            fail_with: None,
            audio: Some(audio.to_vec()),
            call_count: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Create a provider that returns each request's input text as audio bytes
    pub fn echoes_input() -> Self {
        Self {
            succeed_count: usize::MAX,
            fail_with: None,
            audio: None,
            call_count: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Create a provider that always fails with the given error
    pub fn always_fails(error: TtsError) -> Self {
        Self {
            succeed_count: 0,
            fail_with: Some(error),
            audio: None,
            call_count: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Create a provider that succeeds `n` times, then fails with the given error
    pub fn succeeds_then_fails(n: usize, error: TtsError) -> Self {
        Self {
            succeed_count: n,
            fail_with: Some(error),
            audio: None,
            call_count: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Get the number of times synthesize() was called
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Get the input text of every request received, in call order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl SpeechProvider for MockSpeechProvider {
    async fn synthesize(&self, request: &SpeechRequest) -> Result<SpeechResponse> {
        self.requests.lock().unwrap().push(request.input.clone());
        let call_num = self.call_count.fetch_add(1, Ordering::SeqCst);

        if call_num >= self.succeed_count {
            if let Some(err) = &self.fail_with {
                return Err(err.clone());
            }
        }

        let audio = match &self.audio {
            Some(bytes) => bytes.clone(),
            None => request.input.as_bytes().to_vec(),
        };

        Ok(SpeechResponse { audio })
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_always_succeeds() {
        let provider = MockSpeechProvider::always_succeeds(b"mp3-bytes");
        let request = SpeechRequest::new("tts-1-hd", "alloy", "test");

        let result = provider.synthesize(&request).await;
        assert!(result.is_ok());
        assert_eq!(result.unwrap().audio, b"mp3-bytes");
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_echoes_input() {
        let provider = MockSpeechProvider::echoes_input();
        let request = SpeechRequest::new("tts-1-hd", "alloy", "hello there");

        let response = provider.synthesize(&request).await.unwrap();
        assert_eq!(response.audio, b"hello there");
        assert_eq!(provider.requests(), vec!["hello there".to_string()]);
    }

    #[tokio::test]
    async fn test_always_fails() {
        let provider = MockSpeechProvider::always_fails(TtsError::ApiError {
            message: "boom".to_string(),
            status_code: Some(500),
        });
        let request = SpeechRequest::new("tts-1-hd", "alloy", "test");

        for _ in 0..3 {
            let result = provider.synthesize(&request).await;
            assert!(result.is_err());
        }
        assert_eq!(provider.call_count(), 3);
    }

    #[tokio::test]
    async fn test_succeeds_then_fails() {
        let provider = MockSpeechProvider::succeeds_then_fails(
            2,
            TtsError::RateLimited {
                retry_after: Some(30),
            },
        );
        let request = SpeechRequest::new("tts-1-hd", "alloy", "test");

        // First two calls succeed
        assert!(provider.synthesize(&request).await.is_ok());
        assert!(provider.synthesize(&request).await.is_ok());

        // Third call fails
        let result = provider.synthesize(&request).await;
        assert!(matches!(result, Err(TtsError::RateLimited { .. })));
        assert_eq!(provider.call_count(), 3);
    }
}
