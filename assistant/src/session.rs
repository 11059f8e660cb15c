use std::sync::Arc;

use mindmap_core::{
    AnswerLength, History, Language, LanguageModel, QaRecord, SpeechSynthesizer, audio::Data,
    build_prompt,
};

use crate::{
    error::{GenerationError, SynthesisError},
    phase::Phase,
};

/// Per-session choices that shape each answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    /// How long the answer should be.
    pub length: AnswerLength,
    /// Language the answer is written and spoken in.
    pub language: Language,
    /// Whether to synthesize speech for each answer.
    pub speak: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            length: AnswerLength::default(),
            language: Language::default(),
            speak: true,
        }
    }
}

/// Outcome of the speech step for one answer.
#[derive(Debug)]
pub enum Speech {
    /// Speech was turned off.
    Skipped,
    /// The synthesized clip.
    Audio(Data),
    /// Synthesis failed; the answer text is unaffected.
    Failed(SynthesisError),
}

impl Speech {
    /// The audio bytes, if synthesis succeeded.
    #[must_use]
    pub fn audio(&self) -> Option<&[u8]> {
        match self {
            Self::Audio(data) => Some(data),
            _ => None,
        }
    }

    /// The synthesis failure, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&SynthesisError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// A delivered answer: the stored record plus the speech outcome.
#[derive(Debug)]
pub struct Reply {
    record: QaRecord,
    speech: Speech,
}

impl Reply {
    /// The question that was asked.
    #[must_use]
    pub const fn question(&self) -> &str {
        self.record.question()
    }

    /// The generated answer text.
    #[must_use]
    pub const fn answer(&self) -> &str {
        self.record.answer()
    }

    /// What happened when speaking the answer.
    #[must_use]
    pub const fn speech(&self) -> &Speech {
        &self.speech
    }
}

/// One user's conversation with a document.
///
/// The document text is shared read-only and may back any number of sessions; the history
/// belongs to this session alone. Questions are handled one at a time: [`ask`](Self::ask)
/// borrows the session mutably until the pipeline is back to [`Phase::Idle`].
#[derive(Debug)]
pub struct Session<M, S> {
    document: Arc<str>,
    model: M,
    synthesizer: S,
    preferences: Preferences,
    history: History,
    phase: Phase,
}

impl<M, S> Session<M, S>
where
    M: LanguageModel,
    S: SpeechSynthesizer,
{
    /// Start a session over `document` with default preferences and an empty history.
    pub fn new(document: impl Into<Arc<str>>, model: M, synthesizer: S) -> Self {
        let document = document.into();
        if document.trim().is_empty() {
            tracing::warn!("document has no text; answers will rely on the model alone");
        }
        Self {
            document,
            model,
            synthesizer,
            preferences: Preferences::default(),
            history: History::new(),
            phase: Phase::Idle,
        }
    }

    /// Replace the preferences.
    #[must_use]
    pub fn with_preferences(mut self, preferences: Preferences) -> Self {
        self.preferences = preferences;
        self
    }

    /// Current preferences.
    #[must_use]
    pub const fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    /// Change the answer language. Unknown names are kept for the prompt and spoken in English.
    pub fn set_language(&mut self, language: Language) {
        tracing::debug!(language = %language, code = language.synthesis_code(), "language changed");
        self.preferences.language = language;
    }

    /// Change the answer length.
    pub fn set_length(&mut self, length: AnswerLength) {
        tracing::debug!(length = length.label(), "answer length changed");
        self.preferences.length = length;
    }

    /// Turn speech on or off.
    pub fn set_speak(&mut self, speak: bool) {
        tracing::debug!(speak, "speech toggled");
        self.preferences.speak = speak;
    }

    /// The document text every prompt is built from.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    /// Answered questions, most recent first via [`History::all`].
    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Current pipeline phase. Always [`Phase::Idle`] between questions.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// The language model in use.
    #[must_use]
    pub const fn model(&self) -> &M {
        &self.model
    }

    /// Answer `question` from the document, then try to speak the answer.
    ///
    /// The answer is appended to history as soon as it is generated, so a speech failure
    /// only shows up in [`Reply::speech`].
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] if the model call fails. History is left untouched and the
    /// session can take the next question.
    pub async fn ask(&mut self, question: impl Into<String>) -> Result<Reply, GenerationError> {
        let question = question.into();
        let prompt = build_prompt(
            &self.document,
            &question,
            self.preferences.length,
            &self.preferences.language,
        );

        self.advance(Phase::Generating);
        tracing::debug!(
            model = self.model.name(),
            prompt_chars = prompt.chars().count(),
            "generating answer"
        );
        let answer = match self.model.generate(&prompt).await {
            Ok(answer) => answer,
            Err(err) => {
                self.advance(Phase::GenerationFailed);
                tracing::error!(model = self.model.name(), error = %err, "answer generation failed");
                self.advance(Phase::Idle);
                return Err(GenerationError::new(err));
            }
        };

        self.advance(Phase::Generated);
        let record = self.history.append(question, answer).clone();

        let speech = if self.preferences.speak {
            self.speak(record.answer()).await
        } else {
            Speech::Skipped
        };

        self.advance(Phase::Idle);
        Ok(Reply { record, speech })
    }

    async fn speak(&mut self, text: &str) -> Speech {
        let lang_code = self.preferences.language.synthesis_code();
        self.advance(Phase::Synthesizing);
        match self.synthesizer.synthesize(text, lang_code).await {
            Ok(audio) => {
                self.advance(Phase::Synthesized);
                Speech::Audio(audio)
            }
            Err(err) => {
                self.advance(Phase::SynthesisFailed);
                tracing::warn!(lang = lang_code, error = %err, "speech synthesis failed");
                Speech::Failed(SynthesisError::new(lang_code, err))
            }
        }
    }

    fn advance(&mut self, next: Phase) {
        debug_assert!(
            self.phase.can_advance_to(next),
            "invalid phase transition {} -> {next}",
            self.phase
        );
        tracing::debug!(from = %self.phase, to = %next, "phase");
        self.phase = next;
    }
}
