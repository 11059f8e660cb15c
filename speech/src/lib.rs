//! Spoken answers through the Google Translate voice.
//!
//! [`GoogleTts`] implements [`mindmap_core::SpeechSynthesizer`]. It needs no API key and
//! returns MP3 bytes.
//!
//! ```no_run
//! use mindmap_core::SpeechSynthesizer;
//! use mindmap_speech::GoogleTts;
//!
//! # async fn run() -> Result<(), mindmap_speech::SpeechError> {
//! let tts = GoogleTts::new().with_slow(true);
//! let mp3 = tts.synthesize("Federalism divides power.", "en").await?;
//! std::fs::write("answer.mp3", mp3).ok();
//! # Ok(()) }
//! ```

mod client;
mod error;
mod languages;
mod tokenizer;

pub use client::{DEFAULT_TLD, GoogleTts};
pub use error::{Result, SpeechError};
pub use languages::{SUPPORTED_LANGUAGES, canonical_code};
pub use tokenizer::{MAX_CHUNK_CHARS, split_text};
