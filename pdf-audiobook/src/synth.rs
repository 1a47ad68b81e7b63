//! Batch speech synthesis of text chunks.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use tts_client::{SpeechProvider, SpeechRequest};

/// File name for the clip at a 1-based chunk index.
///
/// Indices are zero-padded to three digits; past 999 the name simply
/// widens. Assembly order comes from the returned path list, not from
/// sorting names.
pub fn clip_filename(index: usize) -> String {
    format!("chunk_{:03}.mp3", index)
}

/// Synthesize each chunk to an MP3 clip under `output_dir`.
///
/// Clips are written in chunk order and existing files are overwritten,
/// so a rerun regenerates the batch rather than mixing stale clips into
/// the result. `progress` is invoked after each clip lands on disk.
///
/// Returns the clip paths in chunk order. The first synthesis or write
/// failure aborts the batch; clips already written stay on disk.
pub async fn synthesize_chunks(
    provider: &dyn SpeechProvider,
    chunks: &[String],
    model: &str,
    voice: &str,
    output_dir: &Path,
    mut progress: impl FnMut(usize, &Path),
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create chunk directory {}", output_dir.display()))?;

    let mut clip_files = Vec::with_capacity(chunks.len());

    for (i, chunk) in chunks.iter().enumerate() {
        let index = i + 1;
        let clip_path = output_dir.join(clip_filename(index));

        let request = SpeechRequest::new(model, voice, chunk.as_str());
        let response = provider
            .synthesize(&request)
            .await
            .with_context(|| format!("Synthesis failed for chunk {}", index))?;

        fs::write(&clip_path, &response.audio)
            .with_context(|| format!("Failed to write {}", clip_path.display()))?;

        progress(index, &clip_path);
        clip_files.push(clip_path);
    }

    Ok(clip_files)
}
