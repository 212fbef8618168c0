//! OpenAI chat-completions client

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::CompletionGateway;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4";
pub const DEFAULT_TEMPERATURE: f32 = 0.3;

/// Failure of a single completion call
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("HTTP request failed: {0}")]
    Http(#[source] reqwest::Error),

    #[error("OpenAI API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("No response from model")]
    EmptyResponse,
}

/// Client for the OpenAI chat-completions API
#[derive(Clone)]
pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
}

/// A message in the conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn system(content: &str) -> Self {
        Self {
            role: "system".to_string(),
            content: content.to_string(),
        }
    }

    pub fn user(content: &str) -> Self {
        Self {
            role: "user".to_string(),
            content: content.to_string(),
        }
    }
}

/// Request body for the chat-completions endpoint
#[derive(Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: Vec<Message>,
    temperature: f32,
}

/// Response from the chat-completions endpoint
#[derive(Debug, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

/// Error envelope returned by the API
#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl OpenAiClient {
    /// Create a client against the public OpenAI endpoint with default model
    pub fn new(api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    /// Point the client at another OpenAI-compatible base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send an ordered list of messages, return the raw API response
    pub async fn send(&self, messages: Vec<Message>) -> Result<ApiResponse, GatewayError> {
        let request = ApiRequest {
            model: &self.model,
            messages,
            temperature: self.temperature,
        };

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(GatewayError::Http)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<ApiError>(&body) {
                Ok(api_err) => api_err.error.message,
                Err(_) => body,
            };
            return Err(GatewayError::Api { status, message });
        }

        response
            .json::<ApiResponse>()
            .await
            .map_err(GatewayError::Decode)
    }

    /// Text of the first choice, if the model produced any
    pub fn extract_text(&self, response: ApiResponse) -> Result<String, GatewayError> {
        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or(GatewayError::EmptyResponse)
    }
}

#[async_trait]
impl CompletionGateway for OpenAiClient {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, GatewayError> {
        let messages = vec![Message::system(system), Message::user(prompt)];
        let response = self.send(messages).await?;
        self.extract_text(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(body: serde_json::Value) -> ApiResponse {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_extract_text_first_choice() {
        let client = OpenAiClient::new("key".into());
        let resp = response(serde_json::json!({
            "choices": [
                {"message": {"role": "assistant", "content": "{\"a\": 1}"}},
                {"message": {"role": "assistant", "content": "ignored"}}
            ]
        }));
        assert_eq!(client.extract_text(resp).unwrap(), "{\"a\": 1}");
    }

    #[test]
    fn test_extract_text_empty() {
        let client = OpenAiClient::new("key".into());
        for body in [
            serde_json::json!({"choices": []}),
            serde_json::json!({}),
            serde_json::json!({"choices": [{"message": {"content": ""}}]}),
        ] {
            assert!(matches!(
                client.extract_text(response(body)),
                Err(GatewayError::EmptyResponse)
            ));
        }
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = OpenAiClient::new("key".into()).with_base_url("http://localhost:9000/v1/");
        assert_eq!(client.base_url, "http://localhost:9000/v1");
    }
}
