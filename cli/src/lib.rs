//! Command-line study assistant.
//!
//! Loads one PDF, then answers questions about it in the chosen language and length, speaking
//! each answer through Google Translate's voice.
//!
//! # Usage
//!
//! ```bash
//! GEMINI_API_KEY=xxx cargo run -p mindmap-cli -- --document notes.pdf
//!
//! # Headless mode (single question, useful for scripting)
//! cargo run -p mindmap-cli -- --prompt "What is federalism?" --quiet --no-audio
//! ```

pub mod command;
pub mod output;

pub use command::{Command, Input};
pub use output::{ANSWER_AUDIO_FILE, ANSWER_TEXT_FILE, format_history, save_answer, save_audio};
