//! Audio assembly.

pub mod assembler;

pub use assembler::concatenate_audio_files;
