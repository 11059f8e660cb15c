//! # mindmap
//!
//! **Ask questions about one document, hear the answers** 📘
//!
//! `mindmap-core` hosts the no-std trait APIs and plain data types that the rest of the
//! workspace builds on. Provider crates implement the traits; the assistant crate wires them
//! into a question/answer session.
//!
//! ```text
//! ┌─────────────────┐    ┌──────────────────┐    ┌─────────────────┐
//! │   Assistant     │───▶│  mindmap-core    │◀───│   Providers     │
//! │                 │    │   (this crate)   │    │                 │
//! │ - Session       │    │ - LanguageModel  │    │ - gemini        │
//! │ - History       │    │ - Speech         │    │ - google tts    │
//! │ - CLI           │    │ - build_prompt   │    │                 │
//! └─────────────────┘    └──────────────────┘    └─────────────────┘
//! ```
//!
//! ## Supported capabilities
//!
//! | Capability | Trait | Description |
//! |------------|-------|-------------|
//! | **Language Models** | [`LanguageModel`] | Turn a prompt into a single answer |
//! | **Text-to-Speech** | [`SpeechSynthesizer`] | Turn text into compressed audio for a language code |
//!
//! ## Example
//!
//! ```rust
//! use mindmap_core::{AnswerLength, History, Language, build_prompt};
//!
//! let prompt = build_prompt(
//!     "Topic: Federalism means division of power.",
//!     "What is federalism?",
//!     AnswerLength::Short,
//!     &Language::English,
//! );
//! assert!(prompt.contains("give a short explanation in English"));
//!
//! let mut history = History::new();
//! history.append("What is federalism?", "Division of power.");
//! assert_eq!(history.len(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`audio`]: speech synthesis trait.
//! - [`llm`]: language model trait.
//! - [`language`]: the fixed answer-language table and its synthesis codes.
//! - [`prompt`]: deterministic prompt construction.
//! - [`history`]: append-only question/answer history.

#![no_std]
extern crate alloc;

/// Speech synthesis.
///
/// Contains the [`SpeechSynthesizer`] trait.
pub mod audio;
pub mod history;
pub mod language;
pub mod llm;
pub mod prompt;

#[doc(inline)]
pub use audio::SpeechSynthesizer;
#[doc(inline)]
pub use history::{History, QaRecord};
#[doc(inline)]
pub use language::{DEFAULT_SYNTHESIS_CODE, Language};
#[doc(inline)]
pub use llm::LanguageModel;
#[doc(inline)]
pub use prompt::{AnswerLength, build_prompt};
