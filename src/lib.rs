#![no_std]
//! # mindmap
//!
//! Façade crate that re-exports everything from [`mindmap_core`] plus, behind features, the
//! Gemini model, the Google Translate voice, PDF loading, and the question/answer session.
//! Pull this crate into your binary to build a study assistant over one document.
//!
//! ## What's inside?
//!
//! - [`LanguageModel`] and [`SpeechSynthesizer`], the two provider traits.
//! - [`build_prompt`], [`Language`], [`AnswerLength`] for deterministic prompts.
//! - [`History`] and [`QaRecord`] for append-only session history.
//! - `gemini`, `speech`, `pdf`, `assistant` features re-exporting the provider and
//!   orchestration crates under the same names.
//!
//! ## Example
//!
//! ```rust,ignore
//! use mindmap::{assistant::Session, gemini::GeminiBackend, pdf::DocumentLoader, speech::GoogleTts};
//!
//! async fn demo(api_key: &str) -> Result<(), Box<dyn std::error::Error>> {
//!     let document = DocumentLoader::new().load_document("converted_text.pdf")?;
//!     let mut session = Session::new(document, GeminiBackend::new(api_key), GoogleTts::new());
//!     let reply = session.ask("What is federalism?").await?;
//!     println!("{}", reply.answer());
//!     Ok(())
//! }
//! ```

pub use mindmap_core::*;

/// Gemini answer generation.
#[cfg(feature = "gemini")]
pub use mindmap_gemini as gemini;

/// Google Translate speech synthesis.
#[cfg(feature = "speech")]
pub use mindmap_speech as speech;

/// PDF text extraction and caching.
#[cfg(feature = "pdf")]
pub use mindmap_pdf as pdf;

/// Question/answer sessions.
#[cfg(feature = "assistant")]
pub use mindmap_assistant as assistant;
