use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;
use tokio::time::{timeout, Duration};

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,

    #[error("generation request timed out")]
    Timeout,

    #[error("generation request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("model endpoint returned status {status}: {body}")]
    UpstreamStatus { status: StatusCode, body: String },
}

/// One prompt in, generated text out. The text may be empty; deciding what
/// an empty answer means is left to the caller.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}

pub struct GeminiClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    timeout: Duration,
}

impl GeminiClient {
    pub fn new(
        api_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout_ms: u64,
    ) -> Self {
        let api_url = api_url.into();
        let endpoint = format!(
            "{}/v1beta/models/{}:generateContent",
            api_url.trim_end_matches('/'),
            model.into()
        );

        Self {
            http: reqwest::Client::new(),
            endpoint,
            api_key: api_key.into(),
            timeout: Duration::from_millis(timeout_ms),
        }
    }

    async fn call(&self, prompt: &str) -> Result<String, ProviderError> {
        let payload = serde_json::json!({
            "contents": [
                { "parts": [ { "text": prompt } ] }
            ]
        });

        let response = self
            .http
            .post(&self.endpoint)
            .header("x-goog-api-key", self.api_key.as_str())
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response body>".to_string());
            return Err(ProviderError::UpstreamStatus { status, body });
        }

        let body: GenerateContentResponse = response.json().await?;
        Ok(body.into_text())
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        if self.api_key.is_empty() {
            return Err(ProviderError::MissingApiKey);
        }

        // The whole exchange, body read included, runs under one deadline.
        timeout(self.timeout, self.call(prompt))
            .await
            .map_err(|_| ProviderError::Timeout)?
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GenerateContentResponse {
    // Text parts of the first candidate, concatenated; anything absent
    // (blocked prompt, no parts, non-text parts) reads as empty.
    fn into_text(self) -> String {
        self.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .map(|part| part.text)
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

/// Scripted generator for tests: replays queued results in order and
/// records every prompt it was given.
#[derive(Default)]
pub struct MockTextGenerator {
    responses: Mutex<VecDeque<Result<String, ProviderError>>>,
    prompts: Mutex<Vec<String>>,
}

impl MockTextGenerator {
    pub fn push_text(&self, text: impl Into<String>) {
        self.responses.lock().unwrap().push_back(Ok(text.into()));
    }

    pub fn push_error(&self, error: ProviderError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for MockTextGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(String::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> GenerateContentResponse {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn joins_text_parts_of_first_candidate() {
        let response = parse(
            r#"{"candidates":[{"content":{"parts":[{"text":"Assalomu "},{"text":"alaykum!"}]}}]}"#,
        );
        assert_eq!(response.into_text(), "Assalomu alaykum!");
    }

    #[test]
    fn ignores_candidates_after_the_first() {
        let response = parse(
            r#"{"candidates":[{"content":{"parts":[{"text":"birinchi"}]}},{"content":{"parts":[{"text":"ikkinchi"}]}}]}"#,
        );
        assert_eq!(response.into_text(), "birinchi");
    }

    #[test]
    fn missing_candidates_read_as_empty() {
        assert_eq!(parse("{}").into_text(), "");
        assert_eq!(parse(r#"{"candidates":[]}"#).into_text(), "");
    }

    #[test]
    fn candidate_without_content_reads_as_empty() {
        let response = parse(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#);
        assert_eq!(response.into_text(), "");
    }

    #[test]
    fn non_text_parts_read_as_empty() {
        let response =
            parse(r#"{"candidates":[{"content":{"parts":[{"inlineData":{"data":"xyz"}}]}}]}"#);
        assert_eq!(response.into_text(), "");
    }
}
