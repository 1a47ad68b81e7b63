//! OpenAI text-to-speech provider
//!
//! Calls the audio/speech endpoint and returns the MP3 bytes the API
//! streams back. The API key is injected at construction time so the
//! environment is only consulted when the caller opts in via
//! [`OpenAiProvider::from_env`].

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TtsError};
use crate::speech::{SpeechProvider, SpeechRequest, SpeechResponse};

const OPENAI_API_URL: &str = "https://api.openai.com/v1/audio/speech";

/// Provider for the OpenAI speech synthesis API
pub struct OpenAiProvider {
    api_key: String,
    base_url: String,
    client: Client,
}

impl OpenAiProvider {
    /// Create a provider with an explicit API key
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: OPENAI_API_URL.to_string(),
            client: Client::new(),
        }
    }

    /// Create a provider from the OPENAI_API_KEY environment variable
    pub fn from_env() -> Result<Self> {
        let api_key = super::get_api_key("OPENAI_API_KEY", "OpenAI")?;
        Ok(Self::new(api_key))
    }

    /// Override the endpoint URL (used for testing)
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }
}

// OpenAI API request/response types

#[derive(Debug, Serialize)]
struct CreateSpeechRequest {
    model: String,
    voice: String,
    input: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

#[async_trait]
impl SpeechProvider for OpenAiProvider {
    async fn synthesize(&self, request: &SpeechRequest) -> Result<SpeechResponse> {
        let speech_request = CreateSpeechRequest {
            model: request.model.clone(),
            voice: request.voice.clone(),
            input: request.input.clone(),
        };

        let response = self
            .client
            .post(&self.base_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&speech_request)
            .send()
            .await
            .map_err(|e| TtsError::ApiError {
                message: format!("Request failed: {}", e),
                status_code: None,
            })?;

        let status = response.status();
        if !status.is_success() {
            // Grab the header before the body consumes the response
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok());

            let error_text = response.text().await.unwrap_or_default();
            let message =
                if let Ok(error_response) = serde_json::from_str::<ErrorResponse>(&error_text) {
                    error_response.error.message
                } else {
                    error_text
                };

            if status.as_u16() == 429 {
                return Err(TtsError::RateLimited { retry_after });
            }

            return Err(TtsError::ApiError {
                message,
                status_code: Some(status.as_u16()),
            });
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| TtsError::ApiError {
                message: format!("Failed to read audio body: {}", e),
                status_code: None,
            })?
            .to_vec();

        Ok(SpeechResponse { audio })
    }

    fn name(&self) -> &'static str {
        "OpenAI"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let request = CreateSpeechRequest {
            model: "tts-1-hd".to_string(),
            voice: "alloy".to_string(),
            input: "Hello world".to_string(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "tts-1-hd");
        assert_eq!(json["voice"], "alloy");
        assert_eq!(json["input"], "Hello world");
    }

    #[test]
    fn test_error_response_parsing() {
        let body = r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}"#;
        let parsed: ErrorResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.error.message, "Incorrect API key provided");
    }

    #[test]
    fn test_with_base_url_trims_trailing_slash() {
        let provider = OpenAiProvider::new("sk-test".to_string())
            .with_base_url("http://localhost:8080/v1/audio/speech/");
        assert_eq!(provider.base_url, "http://localhost:8080/v1/audio/speech");
    }
}
