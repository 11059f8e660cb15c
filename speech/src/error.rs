use reqwest::StatusCode;

/// Errors raised while synthesizing speech.
#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    /// Transport failure talking to the speech service.
    #[error("speech request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The service answered with a non-success status.
    #[error("speech service returned HTTP {status}")]
    Status {
        /// HTTP status code.
        status: StatusCode,
    },
    /// The language code has no voice.
    #[error("language `{0}` is not supported for speech")]
    UnsupportedLanguage(String),
    /// The response did not carry an audio stream.
    #[error("no audio stream in speech response")]
    NoAudio,
    /// The audio payload was not valid base64.
    #[error("invalid audio payload: {0}")]
    Decode(#[from] base64::DecodeError),
    /// Nothing speakable was left after removing punctuation and whitespace.
    #[error("no text to synthesize")]
    EmptyText,
}

/// Result type used by this crate.
pub type Result<T> = core::result::Result<T, SpeechError>;
