use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::config::Settings;
use crate::error::{AppError, Result};

pub const MODEL: &str = "deepseek/deepseek-chat";
pub const MAX_TOKENS: u32 = 1000;
pub const TEMPERATURE: f32 = 0.7;
pub const APP_TITLE: &str = "BridgeHub Web3 AI Assistant";

pub const SYSTEM_PROMPT: &str = "You are a Web3 and blockchain expert assistant. Provide accurate, helpful information about DeFi protocols, NFT markets, DAO governance, cryptocurrency, and blockchain technology. Use current data when possible and cite sources. Keep responses informative but concise.";

pub const FALLBACK_ANSWER: &str = "I apologize, but I couldn't generate a response. Please try rephrasing your question.";

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'static str,
    messages: [ChatMessage<'a>; 2],
    max_tokens: u32,
    temperature: f32,
}

pub struct OpenRouterClient {
    http: Client,
    api_key: String,
    base_url: String,
    site_url: String,
}

impl OpenRouterClient {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let api_key = settings.api_key.clone().ok_or(AppError::MissingApiKey)?;
        Ok(Self {
            http: Client::new(),
            api_key,
            base_url: settings.base_url.clone(),
            site_url: settings.site_url.clone(),
        })
    }

    pub async fn complete(&self, question: &str) -> Result<String> {
        let body = ChatRequest {
            model: MODEL,
            messages: [
                ChatMessage { role: "system", content: SYSTEM_PROMPT },
                ChatMessage { role: "user", content: question },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        tracing::debug!(model = MODEL, question_len = question.len(), "Sending chat completion request");

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .header("HTTP-Referer", &self.site_url)
            .header("X-Title", APP_TITLE)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Other(anyhow::Error::new(e).context("chat completion request failed")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::Upstream(format!("status {status}: {error_text}")));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("unreadable completion payload: {e}")))?;

        Ok(extract_answer(&payload))
    }
}

/// First choice's message text, or the canned apology when it is missing,
/// empty, or not a string.
pub fn extract_answer(payload: &Value) -> String {
    payload
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| FALLBACK_ANSWER.to_string())
}
