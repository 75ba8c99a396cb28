use thiserror::Error;
use tracing::warn;

use crate::api::{AskRequest, AskResponse};

/// Fallback text of [`RelayClient::research_answer`] when the relay itself
/// cannot be reached.
pub const RESEARCH_UNAVAILABLE_TEXT: &str = "Tizimda vaqtinchalik uzilish yuz berdi.";

/// Fallback text of [`RelayClient::feedback_summary`].
pub const SUMMARY_UNAVAILABLE_TEXT: &str = "AI xato berdi.";

/// Fallback text of [`RelayClient::management_insights`].
pub const INSIGHTS_UNAVAILABLE_TEXT: &str = "AI tahlili vaqtincha imkonsiz.";

#[derive(Debug, Error)]
#[error("relay request failed: {0}")]
pub struct ClientError(#[from] reqwest::Error);

pub struct RelayClient {
    http: reqwest::Client,
    base_url: String,
}

impl RelayClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Sends one prompt and returns the `text` field of the relay's answer,
    /// whatever the HTTP status: the relay responds 200, 400 and 500 with
    /// the same body shape. Only failing to reach or decode it is an error.
    pub async fn ask(&self, prompt: &str) -> Result<String, ClientError> {
        let request = AskRequest {
            prompt: prompt.to_string(),
        };

        let response = self
            .http
            .post(format!("{}/ask", self.base_url))
            .json(&request)
            .send()
            .await?;

        let body: AskResponse = response.json().await?;
        Ok(body.text)
    }

    /// Research Q&A: the caller's question goes out unmodified.
    pub async fn research_answer(&self, query: &str) -> String {
        self.ask_or(query, RESEARCH_UNAVAILABLE_TEXT).await
    }

    /// Two-sentence summary of one piece of user feedback.
    pub async fn feedback_summary(&self, message: &str) -> String {
        self.ask_or(&summary_prompt(message), SUMMARY_UNAVAILABLE_TEXT)
            .await
    }

    /// Three strategic recommendations for the given statistics text.
    pub async fn management_insights(&self, stats: &str) -> String {
        self.ask_or(&insights_prompt(stats), INSIGHTS_UNAVAILABLE_TEXT)
            .await
    }

    // UI code displays whatever string it gets, so the named operations
    // absorb transport failures into fixed texts; `ask` stays typed.
    async fn ask_or(&self, prompt: &str, fallback: &str) -> String {
        match self.ask(prompt).await {
            Ok(text) => text,
            Err(error) => {
                warn!(%error, "relay unreachable, returning fallback text");
                fallback.to_string()
            }
        }
    }
}

pub fn summary_prompt(message: &str) -> String {
    format!("Summarize this user feedback in 2 sentences: \"{message}\"")
}

pub fn insights_prompt(stats: &str) -> String {
    format!(
        "Siz ARM rahbariyati uchun strategik maslahatchisiz. \
         Quyidagi kutubxona statistikasi asosida fondni shakllantirish va \
         xizmat sifatini oshirish bo'yicha 3 ta muhim tavsiya bering: \
         \"{stats}\". Javob o'zbek tilida, professional bo'lsin."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_prompt_wraps_message_in_the_instruction() {
        assert_eq!(
            summary_prompt("Zal doim band."),
            "Summarize this user feedback in 2 sentences: \"Zal doim band.\""
        );
    }

    #[test]
    fn insights_prompt_asks_for_three_recommendations_in_uzbek() {
        let prompt = insights_prompt("Top fanlar: Informatika (42)");

        assert!(prompt.contains("3 ta muhim tavsiya bering"));
        assert!(prompt.contains("\"Top fanlar: Informatika (42)\""));
        assert!(prompt.contains("o'zbek tilida"));
    }
}
