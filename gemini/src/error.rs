use std::fmt;

use reqwest::StatusCode;
use serde::Deserialize;

/// Errors raised by the Gemini backend.
#[derive(Debug)]
pub enum GeminiError {
    /// HTTP transport errors (connect, TLS, timeout, body read).
    Http(reqwest::Error),
    /// Non-success HTTP status with a user-facing explanation.
    Status {
        /// HTTP status code.
        status: StatusCode,
        /// Message extracted from the error body, or a generic one for the status.
        message: String,
    },
    /// The prompt is larger than the model accepts.
    InputTooLarge(String),
    /// Rate limit exceeded (includes retry delay if available).
    RateLimit {
        /// Message extracted from the error body.
        message: String,
        /// Suggested wait before trying again.
        retry_after_secs: Option<u64>,
    },
    /// The prompt or the answer was blocked by safety filters.
    Blocked(String),
    /// JSON deserialization problems.
    Json(serde_json::Error),
    /// API level errors such as a response without any answer text.
    Api(String),
}

/// Gemini API error response structure.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorResponse {
    pub error: Option<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorDetail {
    pub message: Option<String>,
    pub status: Option<String>,
    pub details: Option<Vec<ApiErrorInfo>>,
}

/// One entry of `error.details`; which fields are set depends on `@type`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiErrorInfo {
    #[serde(rename = "@type")]
    pub type_url: Option<String>,
    pub violations: Option<Vec<QuotaViolation>>,
    pub retry_delay: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QuotaViolation {
    pub quota_id: Option<String>,
    pub quota_value: Option<String>,
}

impl ApiErrorInfo {
    fn is(&self, kind: &str) -> bool {
        self.type_url.as_deref().is_some_and(|t| t.ends_with(kind))
    }
}

impl ApiErrorResponse {
    /// Extract a user-friendly message from the error response.
    pub fn friendly_message(&self) -> String {
        let Some(error) = &self.error else {
            return "Unknown API error".to_string();
        };

        let base_msg = error.message.clone().unwrap_or_else(|| {
            error
                .status
                .clone()
                .unwrap_or_else(|| "Unknown error".to_string())
        });

        let quota = error
            .details
            .iter()
            .flatten()
            .filter(|detail| detail.is("QuotaFailure"))
            .find_map(|detail| detail.violations.as_ref()?.first());
        if let Some(violation) = quota {
            let quota_id = violation.quota_id.as_deref().unwrap_or("unknown");
            let quota_value = violation.quota_value.as_deref().unwrap_or("?");
            return format!(
                "Rate limit exceeded: {} (limit: {quota_value})",
                quota_id.split('-').next().unwrap_or(quota_id)
            );
        }

        base_msg
    }

    /// Extract retry delay in seconds from the error response.
    pub fn retry_delay_secs(&self) -> Option<u64> {
        let details = self.error.as_ref()?.details.as_ref()?;
        details
            .iter()
            .filter(|detail| detail.is("RetryInfo"))
            // Delay is formatted like "20s".
            .find_map(|detail| detail.retry_delay.as_deref()?.trim_end_matches('s').parse().ok())
    }
}

impl fmt::Display for GeminiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(err) => write!(f, "{}", transport_message(err)),
            Self::Status { message, .. } => write!(f, "{message}"),
            Self::InputTooLarge(message) => {
                write!(f, "Prompt exceeds the model's input limit: {message}")
            }
            Self::RateLimit {
                message,
                retry_after_secs,
            } => {
                if let Some(secs) = retry_after_secs {
                    write!(f, "{message} (retry after {secs}s)")
                } else {
                    write!(f, "{message}")
                }
            }
            Self::Blocked(reason) => write!(f, "Gemini blocked the request: {reason}"),
            Self::Json(err) => write!(f, "Invalid response format: {err}"),
            Self::Api(message) => write!(f, "{message}"),
        }
    }
}

fn transport_message(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        return "Request timed out - please try again".to_string();
    }
    if err.is_connect() {
        return "Network connection failed - check your internet connection".to_string();
    }
    format!("Request failed: {err}")
}

fn status_message(status: StatusCode) -> String {
    match status.as_u16() {
        400 => "Invalid request".to_string(),
        401 => "Authentication failed - check your API key".to_string(),
        403 => "Access denied - check your API key permissions".to_string(),
        404 => "Model not found".to_string(),
        429 => "Rate limit exceeded - please wait before retrying".to_string(),
        500 => "Server error - please try again".to_string(),
        502..=504 => "Service temporarily unavailable - please try again".to_string(),
        _ => format!("HTTP error {status}"),
    }
}

fn mentions_input_limit(message: &str) -> bool {
    let lower = message.to_ascii_lowercase();
    lower.contains("token") && (lower.contains("exceed") || lower.contains("too long"))
}

impl std::error::Error for GeminiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(err) => Some(err),
            Self::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl GeminiError {
    /// Classify a non-success response from its status and body.
    pub(crate) fn from_status(status: StatusCode, body: &str) -> Self {
        let api_error = serde_json::from_str::<ApiErrorResponse>(body)
            .ok()
            .filter(|parsed| parsed.error.is_some());

        if status == StatusCode::TOO_MANY_REQUESTS {
            return api_error.map_or_else(
                || Self::RateLimit {
                    message: "Rate limit exceeded".to_string(),
                    retry_after_secs: None,
                },
                |api_error| Self::RateLimit {
                    message: api_error.friendly_message(),
                    retry_after_secs: api_error.retry_delay_secs(),
                },
            );
        }

        let message = api_error
            .as_ref()
            .map_or_else(|| status_message(status), ApiErrorResponse::friendly_message);

        if status == StatusCode::PAYLOAD_TOO_LARGE
            || (status == StatusCode::BAD_REQUEST && mentions_input_limit(&message))
        {
            return Self::InputTooLarge(message);
        }

        Self::Status { status, message }
    }

    /// Whether the prompt was rejected for being too large.
    #[must_use]
    pub const fn is_input_too_large(&self) -> bool {
        matches!(self, Self::InputTooLarge(_))
    }
}

impl From<serde_json::Error> for GeminiError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_without_body_uses_status_table() {
        let err = GeminiError::from_status(StatusCode::UNAUTHORIZED, "");
        assert_eq!(err.to_string(), "Authentication failed - check your API key");
    }

    #[test]
    fn api_message_is_preferred() {
        let body = r#"{"error":{"code":400,"message":"API key not valid. Please pass a valid API key.","status":"INVALID_ARGUMENT"}}"#;
        let err = GeminiError::from_status(StatusCode::BAD_REQUEST, body);
        assert!(matches!(err, GeminiError::Status { .. }));
        assert_eq!(
            err.to_string(),
            "API key not valid. Please pass a valid API key."
        );
    }

    #[test]
    fn token_limit_is_input_too_large() {
        let body = r#"{"error":{"code":400,"message":"The input token count (1200000) exceeds the maximum number of tokens allowed (1048576).","status":"INVALID_ARGUMENT"}}"#;
        let err = GeminiError::from_status(StatusCode::BAD_REQUEST, body);
        assert!(err.is_input_too_large());
        assert!(err.to_string().starts_with("Prompt exceeds the model's input limit"));

        let err = GeminiError::from_status(StatusCode::PAYLOAD_TOO_LARGE, "");
        assert!(err.is_input_too_large());
    }

    #[test]
    fn rate_limit_reads_quota_and_retry_delay() {
        let body = r#"{
            "error": {
                "code": 429,
                "message": "Resource has been exhausted",
                "status": "RESOURCE_EXHAUSTED",
                "details": [
                    {
                        "@type": "type.googleapis.com/google.rpc.QuotaFailure",
                        "violations": [
                            {
                                "quotaMetric": "generativelanguage.googleapis.com/generate_content_free_tier_requests",
                                "quotaId": "GenerateRequestsPerMinutePerProjectPerModel-FreeTier",
                                "quotaValue": "15"
                            }
                        ]
                    },
                    {
                        "@type": "type.googleapis.com/google.rpc.RetryInfo",
                        "retryDelay": "20s"
                    }
                ]
            }
        }"#;
        let err = GeminiError::from_status(StatusCode::TOO_MANY_REQUESTS, body);
        match &err {
            GeminiError::RateLimit {
                message,
                retry_after_secs,
            } => {
                assert_eq!(
                    message,
                    "Rate limit exceeded: GenerateRequestsPerMinutePerProjectPerModel (limit: 15)"
                );
                assert_eq!(*retry_after_secs, Some(20));
            }
            other => panic!("expected rate limit, got {other:?}"),
        }
        assert!(err.to_string().ends_with("(retry after 20s)"));
    }

    #[test]
    fn rate_limit_without_body() {
        let err = GeminiError::from_status(StatusCode::TOO_MANY_REQUESTS, "<html>");
        assert_eq!(err.to_string(), "Rate limit exceeded");
    }

    #[test]
    fn unknown_status_reports_code() {
        let err = GeminiError::from_status(StatusCode::IM_A_TEAPOT, "");
        assert_eq!(err.to_string(), "HTTP error 418 I'm a teapot");
    }
}
