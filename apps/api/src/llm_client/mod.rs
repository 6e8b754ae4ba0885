//! LLM Client — the single point of entry for all chat-completion calls.
//!
//! Handlers never talk to the provider directly; they go through the
//! `ChatGateway` trait carried in `AppState`. `LlmClient` is the OpenRouter
//! implementation used in production.
//!
//! No retries and no explicit timeout: a failed call is reported once.
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

pub mod prompts;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {body}")]
    Api { status: u16, body: Value },
}

impl LlmError {
    /// Diagnostic payload for logs and callers: the provider's error body
    /// when it sent one, otherwise the transport error message.
    pub fn details(&self) -> Value {
        match self {
            LlmError::Http(e) => Value::String(e.to_string()),
            LlmError::Api { body, .. } => body.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// One entry of a conversation.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: MessageContent,
}

impl ChatMessage {
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: MessageContent::Text(text.into()),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: MessageContent::Text(text.into()),
        }
    }

    pub fn user_parts(parts: Vec<ContentPart>) -> Self {
        Self {
            role: Role::User,
            content: MessageContent::Parts(parts),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentPart {
    Text { text: String },
    File { file: FileAttachment },
}

#[derive(Debug, Clone, Serialize)]
pub struct FileAttachment {
    pub filename: String,
    /// Inline `data:` URL carrying the file's type and bytes.
    pub file_data: String,
}

/// Structured-output mode requested from the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponseFormat {
    JsonObject,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

/// The provider's response, kept as-is. Only the first choice's message
/// content is ever read; everything else is opaque.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatEnvelope(pub Value);

impl ChatEnvelope {
    /// `choices[0].message.content`, if present and textual.
    pub fn text(&self) -> Option<&str> {
        self.0
            .get("choices")
            .and_then(|choices| choices.get(0))
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(Value::as_str)
    }

    pub fn into_inner(self) -> Value {
        self.0
    }
}

/// Sends a conversation to a chat-completion provider.
///
/// Carried in `AppState` as `Arc<dyn ChatGateway>`.
#[async_trait]
pub trait ChatGateway: Send + Sync {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        model: &str,
        response_format: Option<ResponseFormat>,
    ) -> Result<ChatEnvelope, LlmError>;
}

/// OpenRouter chat-completions client.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    url: String,
}

impl LlmClient {
    pub fn new(api_key: String, url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            url,
        }
    }
}

#[async_trait]
impl ChatGateway for LlmClient {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        model: &str,
        response_format: Option<ResponseFormat>,
    ) -> Result<ChatEnvelope, LlmError> {
        let request_body = ChatRequest {
            model,
            messages,
            response_format,
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(LlmError::Api {
                status: status.as_u16(),
                body: error_body(status.as_u16(), body),
            });
        }

        debug!("Chat completion succeeded (model: {model}, status: {status})");

        Ok(ChatEnvelope(json_or_text(body)))
    }
}

/// Provider bodies that are not JSON are kept as plain strings.
fn json_or_text(body: String) -> Value {
    serde_json::from_str(&body).unwrap_or(Value::String(body))
}

fn error_body(status: u16, body: String) -> Value {
    if body.trim().is_empty() {
        Value::String(format!("Request failed with status code {status}"))
    } else {
        json_or_text(body)
    }
}
