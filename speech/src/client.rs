use std::sync::Arc;

use base64::{Engine, engine::general_purpose::STANDARD};
use mindmap_core::{SpeechSynthesizer, audio::Data};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Value, json};

use crate::{
    error::{Result, SpeechError},
    languages::canonical_code,
    tokenizer::{MAX_CHUNK_CHARS, split_text},
};

/// Google Translate top-level domain used unless overridden.
pub const DEFAULT_TLD: &str = "com";

const RPC_ID: &str = "jQ1olc";
const RPC_PATH: &str = "/_/TranslateWebserverUi/data/batchexecute";
const REFERER: &str = "http://translate.google.com/";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/47.0.2526.106 Safari/537.36";

static AUDIO_PAYLOAD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"jQ1olc","\[\\"(.*)\\"]"#).expect("audio payload pattern is valid")
});

/// Speech synthesizer backed by the Google Translate voice.
///
/// Text longer than one request allows is split (see [`split_text`]) and the MP3 pieces are
/// concatenated into one clip. The language code is checked before anything is sent.
#[derive(Clone, Debug)]
pub struct GoogleTts {
    inner: Arc<TtsConfig>,
}

#[derive(Clone, Debug)]
struct TtsConfig {
    tld: String,
    slow: bool,
    base_url: Option<String>,
    http: reqwest::Client,
}

impl Default for GoogleTts {
    fn default() -> Self {
        Self::new()
    }
}

impl GoogleTts {
    /// Create a synthesizer talking to `translate.google.com` at normal speed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(TtsConfig {
                tld: DEFAULT_TLD.to_string(),
                slow: false,
                base_url: None,
                http: reqwest::Client::new(),
            }),
        }
    }

    /// Use another Google Translate domain, for example `co.uk` or `com.pk`.
    #[must_use]
    pub fn with_tld(mut self, tld: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.inner).tld = tld.into();
        self
    }

    /// Read more slowly.
    #[must_use]
    pub fn with_slow(mut self, slow: bool) -> Self {
        Arc::make_mut(&mut self.inner).slow = slow;
        self
    }

    /// Send requests to `base_url` instead of the Google Translate host (proxies, tests).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.inner).base_url = Some(base_url.into());
        self
    }

    /// Use a preconfigured HTTP client (timeouts, proxies).
    #[must_use]
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        Arc::make_mut(&mut self.inner).http = client;
        self
    }

    fn endpoint(&self) -> String {
        let base = self.inner.base_url.as_ref().map_or_else(
            || format!("https://translate.google.{}", self.inner.tld),
            |url| url.trim_end_matches('/').to_string(),
        );
        format!("{base}{RPC_PATH}")
    }

    async fn fetch_chunk(&self, endpoint: &str, text: &str, lang: &str) -> Result<Data> {
        let payload = rpc_payload(text, lang, self.inner.slow);
        let response = self
            .inner
            .http
            .post(endpoint)
            .header(reqwest::header::REFERER, REFERER)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .form(&[("f.req", payload.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SpeechError::Status { status });
        }
        let body = response.text().await?;
        decode_audio(&body)
    }
}

impl SpeechSynthesizer for GoogleTts {
    type Error = SpeechError;

    async fn synthesize(&self, text: &str, lang_code: &str) -> Result<Data> {
        let lang = canonical_code(lang_code)
            .ok_or_else(|| SpeechError::UnsupportedLanguage(lang_code.to_string()))?;
        let chunks = split_text(text, MAX_CHUNK_CHARS);
        if chunks.is_empty() {
            return Err(SpeechError::EmptyText);
        }

        let endpoint = self.endpoint();
        let mut audio = Data::new();
        for (index, chunk) in chunks.iter().enumerate() {
            tracing::debug!(lang, chunk = index + 1, of = chunks.len(), "synthesizing speech chunk");
            audio.extend(self.fetch_chunk(&endpoint, chunk, lang).await?);
        }
        tracing::info!(lang, chunks = chunks.len(), bytes = audio.len(), "synthesized speech");
        Ok(audio)
    }
}

/// The `f.req` form value for one chunk.
fn rpc_payload(text: &str, lang: &str, slow: bool) -> String {
    let speed = if slow { Value::Bool(true) } else { Value::Null };
    let parameter = json!([text, lang, speed, "null"]).to_string();
    json!([[[RPC_ID, parameter, null, "generic"]]]).to_string()
}

/// Finds the base64 MP3 in a `batchexecute` response.
fn decode_audio(body: &str) -> Result<Data> {
    let payload = body
        .lines()
        .filter(|line| line.contains(RPC_ID))
        .find_map(|line| AUDIO_PAYLOAD.captures(line))
        .and_then(|captures| captures.get(1))
        .ok_or(SpeechError::NoAudio)?;
    Ok(STANDARD.decode(payload.as_str())?)
}

#[cfg(test)]
mod tests {
    use std::{
        io::{BufRead, BufReader, Read, Write},
        net::TcpListener,
        thread,
    };

    use super::*;

    /// Serves `responses` in order, one per connection, and hands back the request bodies.
    fn canned_server(responses: Vec<(u16, String)>) -> (String, thread::JoinHandle<Vec<String>>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = thread::spawn(move || {
            let mut bodies = Vec::new();
            for (status, body) in responses {
                let (stream, _) = listener.accept().unwrap();
                let mut reader = BufReader::new(stream);
                let mut length = 0;
                loop {
                    let mut line = String::new();
                    reader.read_line(&mut line).unwrap();
                    let line = line.trim_end();
                    if line.is_empty() {
                        break;
                    }
                    if let Some((name, value)) = line.split_once(':') {
                        if name.eq_ignore_ascii_case("content-length") {
                            length = value.trim().parse().unwrap();
                        }
                    }
                }
                let mut request = vec![0; length];
                reader.read_exact(&mut request).unwrap();
                bodies.push(String::from_utf8(request).unwrap());

                let mut stream = reader.into_inner();
                write!(
                    stream,
                    "HTTP/1.1 {status} X\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                )
                .unwrap();
            }
            bodies
        });
        (format!("http://{addr}"), handle)
    }

    fn audio_response(base64: &str) -> String {
        format!(
            ")]}}'\n\n[[\"wrb.fr\",\"jQ1olc\",\"[\\\"{base64}\\\"]\",null,null,null,\"generic\"]]\n"
        )
    }

    #[test]
    fn payload_matches_rpc_shape() {
        assert_eq!(
            rpc_payload("hi", "en", false),
            r#"[[["jQ1olc","[\"hi\",\"en\",null,\"null\"]",null,"generic"]]]"#
        );
        assert_eq!(
            rpc_payload("hi", "ur", true),
            r#"[[["jQ1olc","[\"hi\",\"ur\",true,\"null\"]",null,"generic"]]]"#
        );
    }

    #[test]
    fn decodes_audio_line() {
        let body = r#")]}'

104
[["wrb.fr","jQ1olc","[\"SUQzBAA=\"]",null,null,null,"generic"],["di",52]]
25
[["e",4,null,null,140]]
"#;
        assert_eq!(decode_audio(body).unwrap(), b"ID3\x04\x00");
    }

    #[test]
    fn missing_audio_is_reported() {
        let body = r#")]}'

[["wrb.fr","jQ1olc",null,null,null,[3],"generic"]]
"#;
        assert!(matches!(decode_audio(body), Err(SpeechError::NoAudio)));
        assert!(matches!(decode_audio(""), Err(SpeechError::NoAudio)));
    }

    #[test]
    fn corrupt_audio_is_a_decode_error() {
        let body = r#"[["wrb.fr","jQ1olc","[\"@@not base64@@\"]",null,null,null,"generic"]]"#;
        assert!(matches!(decode_audio(body), Err(SpeechError::Decode(_))));
    }

    #[test]
    fn endpoint_uses_tld_or_base_url() {
        assert_eq!(
            GoogleTts::new().endpoint(),
            "https://translate.google.com/_/TranslateWebserverUi/data/batchexecute"
        );
        assert_eq!(
            GoogleTts::new().with_tld("com.pk").endpoint(),
            "https://translate.google.com.pk/_/TranslateWebserverUi/data/batchexecute"
        );
        assert_eq!(
            GoogleTts::new()
                .with_base_url("http://127.0.0.1:9/")
                .endpoint(),
            "http://127.0.0.1:9/_/TranslateWebserverUi/data/batchexecute"
        );
    }

    #[tokio::test]
    async fn unsupported_language_fails_before_any_request() {
        // Port 9 is never contacted: validation comes first.
        let tts = GoogleTts::new().with_base_url("http://127.0.0.1:9");
        let err = tts.synthesize("hello", "xx").await.unwrap_err();
        assert!(matches!(err, SpeechError::UnsupportedLanguage(ref code) if code == "xx"));
    }

    #[tokio::test]
    async fn punctuation_only_text_is_empty() {
        let tts = GoogleTts::new().with_base_url("http://127.0.0.1:9");
        let err = tts.synthesize(" ... ", "en").await.unwrap_err();
        assert!(matches!(err, SpeechError::EmptyText));
    }

    #[tokio::test]
    async fn long_text_is_one_request_per_chunk_in_order() {
        let text = "Federalism divides power between the centre and the provinces. \
                    Each level keeps its own powers and neither can abolish the other.";
        assert_eq!(split_text(text, MAX_CHUNK_CHARS).len(), 2);
        let (url, server) = canned_server(vec![
            (200, audio_response("SUQz")),
            (200, audio_response("AQID")),
        ]);

        let audio = GoogleTts::new()
            .with_base_url(url)
            .synthesize(text, "en")
            .await
            .unwrap();

        assert_eq!(audio, b"ID3\x01\x02\x03");
        let bodies = server.join().unwrap();
        assert_eq!(bodies.len(), 2);
        assert!(bodies[0].starts_with("f.req="));
        assert!(bodies[0].contains("Federalism"));
        assert!(bodies[1].contains("abolish"));
    }

    #[tokio::test]
    async fn error_status_is_reported() {
        let (url, server) = canned_server(vec![(500, "oops".to_string())]);

        let err = GoogleTts::new()
            .with_base_url(url)
            .synthesize("hello", "en")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            SpeechError::Status { status } if status == reqwest::StatusCode::INTERNAL_SERVER_ERROR
        ));
        server.join().unwrap();
    }
}
