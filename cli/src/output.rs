//! Files and text the CLI produces from answers.

use std::{
    fmt::Write as _,
    io,
    path::{Path, PathBuf},
};

use mindmap_core::History;

/// File the latest answer is saved to by `/save`.
pub const ANSWER_TEXT_FILE: &str = "css_answer.txt";
/// File each spoken answer is written to. Overwritten by the next answer.
pub const ANSWER_AUDIO_FILE: &str = "css_answer.mp3";

/// Write `answer` as plain text into `dir`, replacing any previous answer.
///
/// # Errors
///
/// Returns the I/O error if the file cannot be written.
pub async fn save_answer(dir: &Path, answer: &str) -> io::Result<PathBuf> {
    let path = dir.join(ANSWER_TEXT_FILE);
    tokio::fs::write(&path, answer).await?;
    Ok(path)
}

/// Write an MP3 clip into `dir`, replacing the previous clip.
///
/// # Errors
///
/// Returns the I/O error if the file cannot be written.
pub async fn save_audio(dir: &Path, audio: &[u8]) -> io::Result<PathBuf> {
    let path = dir.join(ANSWER_AUDIO_FILE);
    tokio::fs::write(&path, audio).await?;
    tracing::debug!(path = %path.display(), bytes = audio.len(), "saved answer audio");
    Ok(path)
}

/// Render the history most recent first, numbered from 1.
#[must_use]
pub fn format_history(history: &History) -> String {
    let mut out = String::new();
    for (index, record) in history.all().enumerate() {
        let n = index + 1;
        let _ = writeln!(out, "Q{n}: {}", record.question());
        let _ = writeln!(out, "A{n}: {}", record.answer());
        out.push('\n');
    }
    out
}
