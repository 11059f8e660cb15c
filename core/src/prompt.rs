//! Prompt construction.
//!
//! [`build_prompt`] is a pure function of its four inputs. It never truncates: if the document
//! is larger than the model accepts, the model call fails and reports it.

use alloc::string::String;
use core::{fmt, str::FromStr};

use crate::language::Language;

/// How much detail the answer should contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnswerLength {
    /// A brief explanation.
    #[default]
    Short,
    /// A longer, more thorough explanation.
    Detailed,
}

impl AnswerLength {
    /// Both choices, in selector order.
    pub const ALL: [Self; 2] = [Self::Short, Self::Detailed];

    /// Label shown in the selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Short => "Short",
            Self::Detailed => "Detailed",
        }
    }

    /// Lower-cased label, as it appears inside the prompt.
    #[must_use]
    pub const fn as_prompt_word(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Detailed => "detailed",
        }
    }
}

impl fmt::Display for AnswerLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing an unknown [`AnswerLength`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAnswerLength(String);

impl fmt::Display for UnknownAnswerLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown answer length `{}` (expected `short` or `detailed`)",
            self.0
        )
    }
}

impl core::error::Error for UnknownAnswerLength {}

impl FromStr for AnswerLength {
    type Err = UnknownAnswerLength;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|length| length.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownAnswerLength(trimmed.into()))
    }
}

const PREAMBLE: &str = "\nYou are an educational assistant. Use the following textbook content to answer the question.\n\nTextbook Content:\n";

/// Builds the prompt sent to the language model.
///
/// The layout is fixed: assistant framing, the whole document, the requested length and
/// language, then the question verbatim. Empty inputs produce an empty slot, never an error.
#[must_use]
pub fn build_prompt(
    document: &str,
    question: &str,
    length: AnswerLength,
    language: &Language,
) -> String {
    let length = length.as_prompt_word();
    let language = language.display_name();
    let mut prompt = String::with_capacity(
        PREAMBLE.len() + document.len() + question.len() + language.len() + 64,
    );
    prompt.push_str(PREAMBLE);
    prompt.push_str(document);
    prompt.push_str("\n\nNow, give a ");
    prompt.push_str(length);
    prompt.push_str(" explanation in ");
    prompt.push_str(language);
    prompt.push_str(" for this question:\n");
    prompt.push_str(question);
    prompt.push('\n');
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    const DOCUMENT: &str = "Topic: Federalism means division of power.";
    const QUESTION: &str = "What is federalism?";

    #[test]
    fn matches_template_exactly() {
        let prompt = build_prompt(DOCUMENT, QUESTION, AnswerLength::Short, &Language::English);
        assert_eq!(
            prompt,
            "\nYou are an educational assistant. Use the following textbook content to answer the question.\n\
             \n\
             Textbook Content:\n\
             Topic: Federalism means division of power.\n\
             \n\
             Now, give a short explanation in English for this question:\n\
             What is federalism?\n"
        );
    }

    #[test]
    fn is_deterministic() {
        let a = build_prompt(DOCUMENT, QUESTION, AnswerLength::Detailed, &Language::Urdu);
        let b = build_prompt(DOCUMENT, QUESTION, AnswerLength::Detailed, &Language::Urdu);
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn sections_appear_in_order() {
        let prompt = build_prompt(DOCUMENT, QUESTION, AnswerLength::Detailed, &Language::French);
        let framing = prompt.find("educational assistant").unwrap();
        let document = prompt.find(DOCUMENT).unwrap();
        let length = prompt.find("detailed").unwrap();
        let language = prompt.find("French").unwrap();
        let question = prompt.find(QUESTION).unwrap();
        assert!(framing < document);
        assert!(document < length);
        assert!(length < language);
        assert!(language < question);
    }

    #[test]
    fn custom_language_name_is_used_verbatim() {
        let language = Language::from_display_name("Punjabi");
        let prompt = build_prompt(DOCUMENT, QUESTION, AnswerLength::Short, &language);
        assert!(prompt.contains("explanation in Punjabi for this question"));
    }

    #[test]
    fn empty_inputs_still_produce_a_prompt() {
        let prompt = build_prompt("", "", AnswerLength::Short, &Language::English);
        assert!(prompt.starts_with("\nYou are an educational assistant."));
        assert!(prompt.contains("Textbook Content:\n\n\nNow, give a short explanation"));
        assert!(prompt.ends_with("for this question:\n\n"));
    }

    #[test]
    fn question_is_not_escaped() {
        let question = "Explain {braces} and \"quotes\"\nacross lines";
        let prompt = build_prompt(DOCUMENT, question, AnswerLength::Short, &Language::English);
        assert!(prompt.contains(question));
    }

    #[test]
    fn parses_answer_length() {
        assert_eq!("short".parse::<AnswerLength>().unwrap(), AnswerLength::Short);
        assert_eq!(
            " Detailed ".parse::<AnswerLength>().unwrap(),
            AnswerLength::Detailed
        );
        let err = "medium".parse::<AnswerLength>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown answer length `medium` (expected `short` or `detailed`)"
        );
    }

    #[test]
    fn prompt_word_is_lowercase_label() {
        for length in AnswerLength::ALL {
            assert_eq!(length.as_prompt_word(), length.label().to_lowercase());
        }
    }
}
