use std::error::Error as StdError;

/// Boxed error produced by a model or synthesizer.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// The language model could not produce an answer.
///
/// Recoverable: the session stays usable and nothing was added to its history.
#[derive(Debug, thiserror::Error)]
#[error("could not generate an answer: {source}")]
pub struct GenerationError {
    #[source]
    source: BoxError,
}

impl GenerationError {
    pub(crate) fn new(source: impl StdError + Send + Sync + 'static) -> Self {
        Self {
            source: Box::new(source),
        }
    }

    /// The model's own error, if it has type `E`.
    #[must_use]
    pub fn cause<E: StdError + 'static>(&self) -> Option<&E> {
        self.source.downcast_ref()
    }

    /// Unwraps the model's error.
    #[must_use]
    pub fn into_inner(self) -> BoxError {
        self.source
    }
}

/// Speech could not be produced for an answer.
///
/// Never fatal: the text answer was delivered and stored regardless.
#[derive(Debug, thiserror::Error)]
#[error("could not synthesize speech in `{lang_code}`: {source}")]
pub struct SynthesisError {
    lang_code: &'static str,
    #[source]
    source: BoxError,
}

impl SynthesisError {
    pub(crate) fn new(
        lang_code: &'static str,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self {
            lang_code,
            source: Box::new(source),
        }
    }

    /// The synthesis code that was requested.
    #[must_use]
    pub const fn lang_code(&self) -> &'static str {
        self.lang_code
    }

    /// The synthesizer's own error, if it has type `E`.
    #[must_use]
    pub fn cause<E: StdError + 'static>(&self) -> Option<&E> {
        self.source.downcast_ref()
    }
}
