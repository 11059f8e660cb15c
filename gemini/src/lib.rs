//! Gemini answer generation for `mindmap`.
//!
//! This crate implements [`mindmap_core::LanguageModel`] on top of Google's **Gemini Developer
//! API** (`generateContent`). Each call sends the whole prompt as a single user turn and returns
//! the concatenated text of the first candidate. Requests are never retried; errors carry the
//! API's own explanation when the response body has one.
//!
//! # Quick start
//!
//! ```no_run
//! use mindmap_core::{AnswerLength, Language, LanguageModel, build_prompt};
//! use mindmap_gemini::GeminiBackend;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let gemini = GeminiBackend::new(std::env::var("GEMINI_API_KEY")?);
//! let prompt = build_prompt(
//!     "Federalism divides power between levels of government.",
//!     "What is federalism?",
//!     AnswerLength::Short,
//!     &Language::English,
//! );
//! let answer = gemini.generate(&prompt).await?;
//! println!("{answer}");
//! # Ok(()) }
//! ```

mod client;
mod config;
mod error;
mod llm;
mod types;

pub use config::{AuthMode, DEFAULT_MODEL, GEMINI_API_BASE_URL, GeminiBackend};
pub use error::GeminiError;

/// Create a Gemini backend configured to use the `gemini-1.5-flash-8b` model.
#[must_use]
pub fn gemini_1_5_flash_8b(key: impl Into<String>) -> GeminiBackend {
    GeminiBackend::new(key).with_text_model("gemini-1.5-flash-8b")
}

/// Create a Gemini backend configured to use the `gemini-2.5-flash` model.
#[must_use]
pub fn gemini_2_5_flash(key: impl Into<String>) -> GeminiBackend {
    GeminiBackend::new(key).with_text_model("gemini-2.5-flash")
}

/// Create a Gemini backend configured to use the `gemini-2.5-flash-lite` model.
#[must_use]
pub fn gemini_2_5_flash_lite(key: impl Into<String>) -> GeminiBackend {
    GeminiBackend::new(key).with_text_model("gemini-2.5-flash-lite")
}
