//! Text processing for TTS preparation.

pub mod chunker;

pub use chunker::{DEFAULT_MAX_CHARS, chunk_text};
