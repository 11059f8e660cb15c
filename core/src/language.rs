//! Answer languages and their speech synthesis codes.
//!
//! The answer language is chosen from a fixed table of display names. Each entry maps to the
//! short code the speech service needs to pick a voice. A name outside the table is still
//! accepted: it is passed through to the prompt unchanged and speaks with
//! [`DEFAULT_SYNTHESIS_CODE`].

use alloc::string::String;
use core::{fmt, str::FromStr};

/// Synthesis code used for any language that is not in the fixed table.
pub const DEFAULT_SYNTHESIS_CODE: &str = "en";

/// Selected answer language.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// English (`en`).
    #[default]
    English,
    /// Urdu (`ur`).
    Urdu,
    /// Hindi (`hi`).
    Hindi,
    /// Arabic (`ar`).
    Arabic,
    /// French (`fr`).
    French,
    /// Spanish (`es`).
    Spanish,
    /// Chinese, simplified (`zh-CN`).
    Chinese,
    /// Russian (`ru`).
    Russian,
    /// Turkish (`tr`).
    Turkish,
    /// Any other display name. Spoken with [`DEFAULT_SYNTHESIS_CODE`].
    Other(String),
}

impl Language {
    /// Every language offered by the selector, in display order.
    pub const ALL: [Self; 9] = [
        Self::English,
        Self::Urdu,
        Self::Hindi,
        Self::Arabic,
        Self::French,
        Self::Spanish,
        Self::Chinese,
        Self::Russian,
        Self::Turkish,
    ];

    /// Resolves a display name, ignoring ASCII case and surrounding whitespace.
    ///
    /// Unknown names become [`Language::Other`] instead of failing.
    #[must_use]
    pub fn from_display_name(name: &str) -> Self {
        let trimmed = name.trim();
        Self::ALL
            .into_iter()
            .find(|language| language.display_name().eq_ignore_ascii_case(trimmed))
            .unwrap_or_else(|| Self::Other(trimmed.into()))
    }

    /// Name used in the selector and inside the prompt.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            Self::English => "English",
            Self::Urdu => "Urdu",
            Self::Hindi => "Hindi",
            Self::Arabic => "Arabic",
            Self::French => "French",
            Self::Spanish => "Spanish",
            Self::Chinese => "Chinese",
            Self::Russian => "Russian",
            Self::Turkish => "Turkish",
            Self::Other(name) => name,
        }
    }

    /// Code handed to the speech synthesizer.
    #[must_use]
    pub const fn synthesis_code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Urdu => "ur",
            Self::Hindi => "hi",
            Self::Arabic => "ar",
            Self::French => "fr",
            Self::Spanish => "es",
            Self::Chinese => "zh-CN",
            Self::Russian => "ru",
            Self::Turkish => "tr",
            Self::Other(_) => DEFAULT_SYNTHESIS_CODE,
        }
    }

    /// Whether this language comes from the fixed table.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Language {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_display_name(s))
    }
}
