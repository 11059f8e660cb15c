use serde::{Serialize, de::DeserializeOwned};

use crate::{
    config::{AuthMode, GeminiConfig, USER_AGENT},
    error::GeminiError,
    types::{GenerateContentRequest, GenerateContentResponse},
};

pub async fn call_generate(
    cfg: &GeminiConfig,
    model: &str,
    request: GenerateContentRequest,
) -> Result<GenerateContentResponse, GeminiError> {
    post_json(cfg, cfg.model_endpoint(model, "generateContent"), &request).await
}

/// Single attempt; failures are reported to the caller as they are.
async fn post_json<T: DeserializeOwned, S: Serialize + Sync>(
    cfg: &GeminiConfig,
    endpoint: String,
    body: &S,
) -> Result<T, GeminiError> {
    let mut builder = cfg
        .http
        .post(endpoint)
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .json(body);
    if cfg.auth == AuthMode::Header {
        builder = builder.header("x-goog-api-key", cfg.api_key.as_str());
    }

    // Query auth puts the key in the URL; keep it out of error text.
    let response = builder
        .send()
        .await
        .map_err(|err| GeminiError::Http(err.without_url()))?;
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|err| GeminiError::Http(err.without_url()))?;
    if !status.is_success() {
        tracing::warn!(status = status.as_u16(), "Gemini request failed");
        return Err(GeminiError::from_status(status, &text));
    }

    tracing::trace!(bytes = text.len(), "Gemini response received");
    Ok(serde_json::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use std::{io::Read, net::TcpListener, thread};

    use mindmap_core::LanguageModel;

    use crate::GeminiBackend;

    const KEY: &str = "SECRET-TEST-KEY";

    /// Accepts one connection, reads a little of the request and hangs up.
    fn hang_up_server() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 512];
                let _ = stream.read(&mut buf);
            }
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn transport_errors_do_not_reveal_the_key() {
        let gemini = GeminiBackend::new(KEY).with_base_url(hang_up_server());

        let err = gemini.generate("hi").await.unwrap_err();

        assert!(!err.to_string().contains(KEY), "{err}");
        assert!(!format!("{err:?}").contains(KEY), "{err:?}");
    }
}
