//! Audio file assembly using FFmpeg.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Concatenate MP3 clips into a single audiobook file.
///
/// Uses FFmpeg's concat demuxer over a generated file list, re-encoding
/// to MP3 so the output is one continuous stream regardless of clip
/// framing. A single input is copied directly without invoking FFmpeg.
pub fn concatenate_audio_files(audio_files: &[PathBuf], output_path: &Path) -> Result<()> {
    if audio_files.is_empty() {
        anyhow::bail!("No audio files provided");
    }

    if audio_files.len() == 1 {
        std::fs::copy(&audio_files[0], output_path).with_context(|| {
            format!("Failed to copy clip to {}", output_path.display())
        })?;
        return Ok(());
    }

    // Create a temporary file list for ffmpeg
    let temp_dir = TempDir::new()?;
    let list_file = temp_dir.path().join("concat_list.txt");
    std::fs::write(&list_file, build_concat_list(audio_files))?;

    let output = Command::new("ffmpeg")
        .args(["-y", "-f", "concat", "-safe", "0", "-i"])
        .arg(&list_file)
        .args(["-c:a", "libmp3lame", "-b:a", "128k"])
        .arg(output_path)
        .output()
        .context("Failed to run ffmpeg concat")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!("ffmpeg concat failed: {}", stderr);
    }

    Ok(())
}

/// Build the concat demuxer file list, one `file '...'` line per clip.
fn build_concat_list(audio_files: &[PathBuf]) -> String {
    let mut list_content = String::new();
    for path in audio_files {
        // Escape single quotes in path
        let path_str = path.to_string_lossy().replace('\'', "'\\''");
        list_content.push_str(&format!("file '{}'\n", path_str));
    }
    list_content
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_concat_list_preserves_order() {
        let files = vec![
            PathBuf::from("/tmp/clips/chunk_001.mp3"),
            PathBuf::from("/tmp/clips/chunk_002.mp3"),
            PathBuf::from("/tmp/clips/chunk_003.mp3"),
        ];
        let list = build_concat_list(&files);
        assert_eq!(
            list,
            "file '/tmp/clips/chunk_001.mp3'\n\
             file '/tmp/clips/chunk_002.mp3'\n\
             file '/tmp/clips/chunk_003.mp3'\n"
        );
    }

    #[test]
    fn test_build_concat_list_escapes_quotes() {
        let files = vec![PathBuf::from("/tmp/bob's book/chunk_001.mp3")];
        let list = build_concat_list(&files);
        assert_eq!(list, "file '/tmp/bob'\\''s book/chunk_001.mp3'\n");
    }

    #[test]
    fn test_concatenate_empty_list() {
        let result = concatenate_audio_files(&[], Path::new("/tmp/out.mp3"));
        assert!(result.is_err());
    }

    #[test]
    fn test_concatenate_single_file_copies() {
        let dir = tempfile::tempdir().unwrap();
        let clip = dir.path().join("chunk_001.mp3");
        std::fs::write(&clip, b"clip bytes").unwrap();

        let output = dir.path().join("audiobook.mp3");
        concatenate_audio_files(&[clip], &output).unwrap();

        assert_eq!(std::fs::read(&output).unwrap(), b"clip bytes");
    }

    // Note: Full concatenation tests would require actual MP3 files and
    // FFmpeg to be installed. These are better suited for integration tests.
}
