//! Shared text-to-speech client library for the pdf-audiobook workspace
//!
//! Provides a unified interface for speech synthesis backends:
//! - OpenAI (audio/speech API)
//! - Mock (configurable, for tests)

pub mod error;
pub mod providers;
pub mod speech;

pub use error::{Result, TtsError};
pub use providers::{MockSpeechProvider, OpenAiProvider};
pub use speech::{SpeechProvider, SpeechRequest, SpeechResponse};
