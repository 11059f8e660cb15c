use mindmap_core::LanguageModel;

use crate::{
    client::call_generate,
    config::GeminiBackend,
    error::GeminiError,
    types::{GenerateContentRequest, GenerateContentResponse},
};

impl LanguageModel for GeminiBackend {
    type Error = GeminiError;

    async fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        let cfg = self.config();
        tracing::debug!(
            model = self.text_model(),
            prompt_chars = prompt.chars().count(),
            "requesting Gemini answer"
        );
        let request = GenerateContentRequest::user_text(prompt);
        let response = call_generate(&cfg, &cfg.text_model, request).await?;
        answer_text(&response)
    }

    fn name(&self) -> &str {
        self.text_model()
    }
}

/// Joins the visible text of the first candidate.
fn answer_text(response: &GenerateContentResponse) -> Result<String, GeminiError> {
    let block_reason = response
        .prompt_feedback
        .as_ref()
        .and_then(|feedback| feedback.block_reason.as_deref());
    if let Some(reason) = block_reason {
        return Err(GeminiError::Blocked(reason.to_string()));
    }

    let Some(candidate) = response.primary_candidate() else {
        return Err(GeminiError::Api("Gemini response missing candidate".into()));
    };

    let Some(content) = &candidate.content else {
        return match candidate.finish_reason.as_deref() {
            Some(reason @ ("SAFETY" | "RECITATION" | "BLOCKLIST" | "PROHIBITED_CONTENT")) => {
                Err(GeminiError::Blocked(reason.to_string()))
            }
            _ => Err(GeminiError::Api("Gemini response missing content".into())),
        };
    };

    let text = content.text_chunks().concat();
    if text.trim().is_empty() {
        return Err(GeminiError::Api("Gemini returned an empty answer".into()));
    }
    if candidate.finish_reason.as_deref() == Some("MAX_TOKENS") {
        tracing::warn!("Gemini answer was truncated at the output token limit");
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> GenerateContentResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn joins_candidate_parts() {
        let response = parse(json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [
                        { "text": "Federalism is a system where power is divided " },
                        { "text": "between central and state governments." }
                    ]
                },
                "finishReason": "STOP"
            }]
        }));
        assert_eq!(
            answer_text(&response).unwrap(),
            "Federalism is a system where power is divided between central and state governments."
        );
    }

    #[test]
    fn blocked_prompt_is_reported() {
        let response = parse(json!({ "promptFeedback": { "blockReason": "SAFETY" } }));
        let err = answer_text(&response).unwrap_err();
        assert!(matches!(err, GeminiError::Blocked(ref reason) if reason == "SAFETY"));
    }

    #[test]
    fn safety_stop_without_content_is_blocked() {
        let response = parse(json!({ "candidates": [{ "finishReason": "SAFETY" }] }));
        assert!(matches!(
            answer_text(&response).unwrap_err(),
            GeminiError::Blocked(_)
        ));
    }

    #[test]
    fn empty_answers_are_errors() {
        let no_candidates = parse(json!({ "candidates": [] }));
        assert!(matches!(
            answer_text(&no_candidates).unwrap_err(),
            GeminiError::Api(_)
        ));

        let blank = parse(json!({
            "candidates": [{ "content": { "role": "model", "parts": [{ "text": "  " }] } }]
        }));
        let err = answer_text(&blank).unwrap_err();
        assert_eq!(err.to_string(), "Gemini returned an empty answer");
    }

    #[test]
    fn name_is_the_model() {
        let backend = GeminiBackend::new("key").with_text_model("gemini-2.5-flash");
        assert_eq!(LanguageModel::name(&backend), "gemini-2.5-flash");
    }
}
