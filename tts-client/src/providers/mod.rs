pub mod mock;
mod openai;

pub use mock::MockSpeechProvider;
pub use openai::OpenAiProvider;

use crate::error::{Result, TtsError};

/// Read an API key from the environment, with a provider-specific error
/// when it is missing or empty.
fn get_api_key(env_var: &str, provider_name: &str) -> Result<String> {
    match std::env::var(env_var) {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(TtsError::MissingApiKey {
            provider: provider_name.to_string(),
            env_var: env_var.to_string(),
        }),
    }
}
