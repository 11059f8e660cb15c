//! Question/answer sessions over a single document.
//!
//! A [`Session`] owns one user's history and preferences and runs each question through the
//! same short pipeline: build the prompt, generate the answer, record it, then speak it.
//! Generation failures end the question with a [`GenerationError`]; speech failures never do,
//! they are reported inside the [`Reply`].
//!
//! ```rust
//! use mindmap_assistant::Session;
//! use mindmap_core::{LanguageModel, SpeechSynthesizer, audio::Data};
//!
//! struct Canned;
//!
//! impl LanguageModel for Canned {
//!     type Error = core::convert::Infallible;
//!
//!     async fn generate(&self, _prompt: &str) -> Result<String, Self::Error> {
//!         Ok("Division of power.".to_string())
//!     }
//! }
//!
//! struct Mute;
//!
//! impl SpeechSynthesizer for Mute {
//!     type Error = core::convert::Infallible;
//!
//!     async fn synthesize(&self, _text: &str, _lang_code: &str) -> Result<Data, Self::Error> {
//!         Ok(Vec::new())
//!     }
//! }
//!
//! # async fn run() {
//! let mut session = Session::new("Federalism means division of power.", Canned, Mute);
//! let reply = session.ask("What is federalism?").await.unwrap();
//! assert_eq!(reply.answer(), "Division of power.");
//! assert_eq!(session.history().len(), 1);
//! # }
//! ```

mod error;
mod phase;
mod session;

pub use error::{BoxError, GenerationError, SynthesisError};
pub use phase::Phase;
pub use session::{Preferences, Reply, Session, Speech};
