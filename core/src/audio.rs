use alloc::vec::Vec;
use core::future::Future;

/// Audio data as bytes.
///
/// Type alias for [`Vec<u8>`] holding a complete compressed audio clip (MP3 for the bundled
/// providers).
pub type Data = Vec<u8>;

/// Generates speech audio from text in a given language.
///
/// # Example
///
/// ```rust
/// use mindmap_core::audio::{Data, SpeechSynthesizer};
///
/// struct Silence;
///
/// impl SpeechSynthesizer for Silence {
///     type Error = core::convert::Infallible;
///
///     async fn synthesize(&self, text: &str, _lang_code: &str) -> Result<Data, Self::Error> {
///         Ok(vec![0u8; text.len()])
///     }
/// }
/// ```
pub trait SpeechSynthesizer {
    /// The error type returned by this synthesizer.
    type Error: core::error::Error + Send + Sync + 'static;

    /// Synthesizes `text` spoken in the language identified by `lang_code` (for example `"en"`
    /// or `"zh-CN"`).
    ///
    /// Returns the whole audio clip once synthesis completes.
    fn synthesize(
        &self,
        text: &str,
        lang_code: &str,
    ) -> impl Future<Output = Result<Data, Self::Error>> + Send;
}
