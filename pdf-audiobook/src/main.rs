//! pdf-audio - Convert PDF files to narrated audiobooks using OpenAI text-to-speech

mod audio;
mod config;
mod pdf;
mod synth;
mod text;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::PdfAudioConfig;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use tts_client::OpenAiProvider;

#[derive(Parser, Debug)]
#[command(name = "pdf-audio")]
#[command(about = "Convert PDF files to narrated audiobooks using OpenAI text-to-speech", long_about = None)]
#[command(version)]
struct Args {
    /// Path to the PDF file
    pdf_file: Option<PathBuf>,

    /// Output audiobook path (default: audiobook.mp3)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Voice to narrate with (e.g. alloy, nova, onyx)
    #[arg(long)]
    voice: Option<String>,

    /// Speech synthesis model (e.g. tts-1, tts-1-hd)
    #[arg(long)]
    model: Option<String>,

    /// Maximum chunk size in characters
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    max_chars: Option<u64>,

    /// Directory for per-chunk MP3 clips (default: audio_chunks)
    #[arg(long)]
    chunk_dir: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, default_value_t = false)]
    debug: bool,

    /// Subcommands
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set default voice
    SetVoice {
        /// Voice name (e.g. alloy, nova, onyx)
        voice: String,
    },
    /// Set default speech synthesis model
    SetModel {
        /// Model name (e.g. tts-1, tts-1-hd)
        model: String,
    },
    /// Set default maximum chunk size
    SetMaxChars {
        /// Size in characters
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        value: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Handle subcommands
    if let Some(Commands::Config { action }) = &args.command {
        return handle_config_command(action);
    }

    // Require PDF file for conversion
    let pdf_path = args.pdf_file.clone().ok_or_else(|| {
        anyhow::anyhow!("PDF file path is required. Run 'pdf-audio --help' for usage.")
    })?;

    // Load configuration
    let config = PdfAudioConfig::load().context("Failed to load configuration")?;

    // Resolve settings from args and config
    let voice = args.voice.clone().unwrap_or(config.voice);
    let model = args.model.clone().unwrap_or(config.model);
    let max_chars = args
        .max_chars
        .map(|v| v as usize)
        .unwrap_or(config.max_chars);
    let chunk_dir = args.chunk_dir.clone().unwrap_or(config.chunk_dir);
    let output_path = args.output.clone().unwrap_or(config.output);

    if args.debug {
        eprintln!("PDF: {}", pdf_path.display());
        eprintln!("Output: {}", output_path.display());
        eprintln!("Voice: {}", voice);
        eprintln!("Model: {}", model);
        eprintln!("Max chars: {}", max_chars);
        eprintln!("Chunk dir: {}", chunk_dir.display());
    }

    // Extract text
    eprintln!("Extracting PDF text: {}", pdf_path.display());
    let book_text = pdf::extract_text(&pdf_path).context("Failed to extract PDF text")?;
    eprintln!("Words: ~{}", book_text.split_whitespace().count());

    // Split into chunks
    let chunks = text::chunk_text(&book_text, max_chars);
    if chunks.is_empty() {
        anyhow::bail!("No narratable text found in {}", pdf_path.display());
    }
    eprintln!("Total chunks: {}", chunks.len());

    // Synthesis needs credentials; everything before this point does not
    let provider = OpenAiProvider::from_env()?;

    // Create progress bar
    let pb = ProgressBar::new(chunks.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    // Synthesize each chunk to an MP3 clip
    let clip_files = synth::synthesize_chunks(
        &provider,
        &chunks,
        &model,
        &voice,
        &chunk_dir,
        |index, clip_path| {
            pb.set_position(index as u64);
            let name = clip_path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            pb.set_message(name);
        },
    )
    .await?;

    pb.finish_with_message("Synthesis complete");

    // Assemble the final audiobook
    eprintln!("\nAssembling audiobook...");
    audio::concatenate_audio_files(&clip_files, &output_path)?;

    // Get output file size
    let metadata = std::fs::metadata(&output_path)?;
    let size_mb = metadata.len() as f64 / (1024.0 * 1024.0);

    eprintln!("Output: {} ({:.1} MB)", output_path.display(), size_mb);

    Ok(())
}

fn handle_config_command(action: &ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = PdfAudioConfig::load()?;
            println!("Configuration file: {:?}", PdfAudioConfig::config_path()?);
            println!();
            println!("voice = \"{}\"", config.voice);
            println!("model = \"{}\"", config.model);
            println!("max_chars = {}", config.max_chars);
            println!("chunk_dir = \"{}\"", config.chunk_dir.display());
            println!("output = \"{}\"", config.output.display());
        }
        ConfigAction::SetVoice { voice } => {
            let mut config = PdfAudioConfig::load()?;
            config.voice = voice.clone();
            config.save()?;
            println!("Default voice set to: {}", voice);
        }
        ConfigAction::SetModel { model } => {
            let mut config = PdfAudioConfig::load()?;
            config.model = model.clone();
            config.save()?;
            println!("Default model set to: {}", model);
        }
        ConfigAction::SetMaxChars { value } => {
            let mut config = PdfAudioConfig::load()?;
            config.max_chars = *value as usize;
            config.save()?;
            println!("Default max chars set to: {}", config.max_chars);
        }
    }
    Ok(())
}
