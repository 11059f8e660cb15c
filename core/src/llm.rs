//! # Language models
//!
//! A [`LanguageModel`] turns one fully assembled prompt into one answer. There is no
//! conversation state here: each call is independent and every question is sent together with
//! its context (see [`crate::prompt`]).
//!
//! ```rust
//! use mindmap_core::LanguageModel;
//!
//! struct Echo;
//!
//! impl LanguageModel for Echo {
//!     type Error = core::convert::Infallible;
//!
//!     async fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
//!         Ok(prompt.to_uppercase())
//!     }
//! }
//!
//! # async fn run() {
//! let answer = Echo.generate("hello").await.unwrap();
//! assert_eq!(answer, "HELLO");
//! # }
//! ```

use alloc::string::String;
use core::future::Future;

/// A hosted or local model that answers a prompt with generated text.
///
/// Implementations perform exactly one model call per [`generate`](Self::generate) invocation:
/// no caching and no retries. Callers decide what to do with a failure.
pub trait LanguageModel {
    /// The error type returned by this model.
    type Error: core::error::Error + Send + Sync + 'static;

    /// Generates the answer text for `prompt`.
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String, Self::Error>> + Send;

    /// Human-readable model identifier used in logs.
    fn name(&self) -> &str {
        "unknown"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::{
        format,
        string::{String, ToString},
    };
    use core::fmt;

    #[derive(Debug)]
    struct QuotaExceeded;

    impl fmt::Display for QuotaExceeded {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("quota exceeded")
        }
    }

    impl core::error::Error for QuotaExceeded {}

    struct MockModel {
        budget: usize,
    }

    impl LanguageModel for MockModel {
        type Error = QuotaExceeded;

        async fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
            if prompt.len() > self.budget {
                return Err(QuotaExceeded);
            }
            Ok(format!("answer to: {prompt}"))
        }

        fn name(&self) -> &str {
            "mock"
        }
    }

    #[tokio::test]
    async fn generates_within_budget() {
        let model = MockModel { budget: 64 };
        let answer = model.generate("What is federalism?").await.unwrap();
        assert_eq!(answer, "answer to: What is federalism?");
        assert_eq!(model.name(), "mock");
    }

    #[tokio::test]
    async fn surfaces_model_error() {
        let model = MockModel { budget: 4 };
        let err = model.generate("too long").await.unwrap_err();
        assert_eq!(err.to_string(), "quota exceeded");
    }
}
