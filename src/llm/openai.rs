//! OpenAI chat-completions client.
//!
//! Issues exactly one request per call and classifies failures into
//! [`LlmError`]; retry and backoff are out of scope for this service.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{ChatMessage, ChatResponse, LlmClient, LlmError};

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// OpenAI API client.
pub struct OpenAiClient {
    client: Client,
    api_key: Option<String>,
    endpoint: String,
}

impl OpenAiClient {
    /// Create a client against the public OpenAI endpoint.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            endpoint: OPENAI_API_URL.to_string(),
        }
    }

    /// Create a client against a custom endpoint (tests, proxies).
    pub fn with_endpoint(api_key: Option<String>, endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            endpoint: endpoint.into(),
        }
    }

    /// The configured key, or `None` when absent or blank.
    fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn chat_completion(
        &self,
        model: &str,
        messages: &[ChatMessage],
        temperature: f64,
    ) -> Result<ChatResponse, LlmError> {
        let api_key = self.api_key().ok_or(LlmError::MissingApiKey)?;

        let request = CompletionRequest {
            model: model.to_string(),
            temperature,
            messages: messages.to_vec(),
        };

        tracing::debug!("Sending completion request: model={}", model);

        let response = match self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                return Err(if e.is_timeout() {
                    LlmError::Network(format!("Request timeout: {}", e))
                } else if e.is_connect() {
                    LlmError::Network(format!("Connection failed: {}", e))
                } else {
                    LlmError::Network(format!("Request failed: {}", e))
                });
            }
        };

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if !status.is_success() {
            return Err(LlmError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: CompletionResponse = serde_json::from_str(&body)
            .map_err(|e| LlmError::Parse(format!("{}", e)))?;

        // An empty choices array is not an error here; the caller treats
        // absent content as an empty completion.
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content);

        Ok(ChatResponse {
            content,
            model: parsed.model.or(Some(request.model)),
        })
    }
}

/// OpenAI API request format.
#[derive(Debug, Serialize)]
struct CompletionRequest {
    model: String,
    temperature: f64,
    messages: Vec<ChatMessage>,
}

/// OpenAI API response format.
#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
    #[serde(default)]
    model: Option<String>,
}

/// A choice in the completion response.
#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

/// Message in the completion response.
#[derive(Debug, Deserialize)]
struct CompletionMessage {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_api_key_treated_as_missing() {
        assert!(OpenAiClient::new(None).api_key().is_none());
        assert!(OpenAiClient::new(Some("   ".to_string())).api_key().is_none());
        assert_eq!(
            OpenAiClient::new(Some(" sk-test ".to_string())).api_key(),
            Some("sk-test")
        );
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_any_request() {
        // Endpoint is unroutable; the call must fail on the key check first.
        let client = OpenAiClient::with_endpoint(None, "http://127.0.0.1:1/v1/chat/completions");
        let result = client.chat_completion("gpt-4o-mini", &[], 0.6).await;
        assert!(matches!(result, Err(LlmError::MissingApiKey)));
    }
}
