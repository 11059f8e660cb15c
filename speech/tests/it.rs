//! Integration tests against the live Google Translate voice.

use mindmap_core::SpeechSynthesizer;
use mindmap_speech::GoogleTts;

fn looks_like_mp3(audio: &[u8]) -> bool {
    audio.starts_with(b"ID3") || (audio.len() > 1 && audio[0] == 0xFF && audio[1] & 0xE0 == 0xE0)
}

#[tokio::test]
#[ignore = "Requires network access."]
async fn test_synthesize_english() {
    let audio = GoogleTts::new()
        .synthesize("Federalism divides power between levels of government.", "en")
        .await
        .expect("Failed to synthesize");
    assert!(looks_like_mp3(&audio));
}

#[tokio::test]
#[ignore = "Requires network access."]
async fn test_synthesize_long_urdu_text() {
    let text = "وفاقیت ایک ایسا نظام ہے جس میں اختیارات مرکزی اور صوبائی حکومتوں کے درمیان تقسیم ہوتے ہیں۔ "
        .repeat(3);
    let audio = GoogleTts::new()
        .synthesize(&text, "ur")
        .await
        .expect("Failed to synthesize");
    assert!(!audio.is_empty());
}
