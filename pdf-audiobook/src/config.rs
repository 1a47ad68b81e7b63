//! pdf-audio configuration management.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

// Default values for OpenAI speech synthesis
const DEFAULT_VOICE: &str = "alloy";
const DEFAULT_MODEL: &str = "tts-1-hd";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PdfAudioConfig {
    /// Voice to narrate with
    #[serde(default = "default_voice")]
    pub voice: String,

    /// Speech synthesis model
    #[serde(default = "default_model")]
    pub model: String,

    /// Maximum chunk size in characters
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,

    /// Directory for per-chunk MP3 clips
    #[serde(default = "default_chunk_dir")]
    pub chunk_dir: PathBuf,

    /// Output audiobook path
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

fn default_voice() -> String {
    DEFAULT_VOICE.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_max_chars() -> usize {
    crate::text::DEFAULT_MAX_CHARS
}

fn default_chunk_dir() -> PathBuf {
    PathBuf::from("audio_chunks")
}

fn default_output() -> PathBuf {
    PathBuf::from("audiobook.mp3")
}

impl Default for PdfAudioConfig {
    fn default() -> Self {
        Self {
            voice: default_voice(),
            model: default_model(),
            max_chars: default_max_chars(),
            chunk_dir: default_chunk_dir(),
            output: default_output(),
        }
    }
}

impl PdfAudioConfig {
    /// Get the config file path: ~/.config/cli-programs/pdf-audio.toml
    pub fn config_path() -> Result<PathBuf> {
        let home = std::env::var("HOME").or_else(|_| std::env::var("USERPROFILE"))?;
        Ok(PathBuf::from(home)
            .join(".config")
            .join("cli-programs")
            .join("pdf-audio.toml"))
    }

    /// Load config from file, returning default if file doesn't exist
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: PdfAudioConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }
}
