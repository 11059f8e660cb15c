use core::fmt;

/// Where a question is in the answer pipeline.
///
/// ```text
/// Idle -> Generating -> Generated -> [Synthesizing -> Synthesized | SynthesisFailed] -> Idle
///                    -> GenerationFailed -> Idle
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Waiting for a question.
    #[default]
    Idle,
    /// The model call is in flight.
    Generating,
    /// An answer arrived and was recorded in history.
    Generated,
    /// The model call failed; nothing was recorded.
    GenerationFailed,
    /// The synthesizer call is in flight.
    Synthesizing,
    /// Audio is ready.
    Synthesized,
    /// Audio failed; the text answer stands.
    SynthesisFailed,
}

impl Phase {
    /// Whether the pipeline may move from `self` to `next`.
    #[must_use]
    pub const fn can_advance_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Idle, Self::Generating)
                | (Self::Generating, Self::Generated | Self::GenerationFailed)
                | (Self::Generated, Self::Synthesizing | Self::Idle)
                | (Self::Synthesizing, Self::Synthesized | Self::SynthesisFailed)
                | (
                    Self::GenerationFailed | Self::Synthesized | Self::SynthesisFailed,
                    Self::Idle
                )
        )
    }

    /// Lowercase name used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Generating => "generating",
            Self::Generated => "generated",
            Self::GenerationFailed => "generation_failed",
            Self::Synthesizing => "synthesizing",
            Self::Synthesized => "synthesized",
            Self::SynthesisFailed => "synthesis_failed",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
