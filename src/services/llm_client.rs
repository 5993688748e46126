use std::time::Duration;

use async_openai::{config::OpenAIConfig, error::OpenAIError, Client};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use crate::{config::Config, constants::messages};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    Text,
    JsonObject,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub system_prompt: Option<String>,
    pub user_prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub response_format: ResponseFormat,
}

impl CompletionRequest {
    pub fn new(model: impl Into<String>, user_prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            system_prompt: None,
            user_prompt: user_prompt.into(),
            max_tokens: 500,
            temperature: 0.7,
            response_format: ResponseFormat::Text,
        }
    }

    pub fn with_system(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(system_prompt.into());
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn json(mut self) -> Self {
        self.response_format = ResponseFormat::JsonObject;
        self
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LlmError {
    #[error("no API key configured")]
    MissingCredential,

    #[error("quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("invalid credential: {0}")]
    InvalidCredential(String),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("provider error: {0}")]
    Provider(String),
}

impl LlmError {
    /// Fixed string shown to the patient in place of an answer.
    pub fn user_message(&self) -> &'static str {
        match self {
            LlmError::MissingCredential => messages::LLM_MISSING_CREDENTIAL,
            LlmError::QuotaExceeded(_) => messages::LLM_QUOTA_EXCEEDED,
            LlmError::InvalidRequest(_) => messages::LLM_INVALID_REQUEST,
            LlmError::InvalidCredential(_) => messages::LLM_INVALID_CREDENTIAL,
            LlmError::Timeout(_) | LlmError::Provider(_) => messages::LLM_GENERIC_FAILURE,
        }
    }

    /// Maps an OpenAI-style error `type`/`code` pair onto the error taxonomy.
    pub fn classify(kind: Option<&str>, code: Option<&str>, message: String) -> Self {
        let matches = |needle: &str| kind == Some(needle) || code == Some(needle);

        if matches("insufficient_quota") || matches("rate_limit_exceeded") {
            LlmError::QuotaExceeded(message)
        } else if matches("invalid_api_key") || matches("authentication_error") {
            LlmError::InvalidCredential(message)
        } else if matches("invalid_request_error") {
            LlmError::InvalidRequest(message)
        } else {
            LlmError::Provider(message)
        }
    }
}

impl From<OpenAIError> for LlmError {
    fn from(err: OpenAIError) -> Self {
        match err {
            OpenAIError::ApiError(api) => {
                LlmError::classify(api.r#type.as_deref(), api.code.as_deref(), api.message)
            }
            other => LlmError::Provider(other.to_string()),
        }
    }
}

/// The only seam between the quiz core and the model provider.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError>;
}

#[derive(Debug, Deserialize)]
struct ChatCompletionBody {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

pub struct OpenAiClient {
    client: Option<Client<OpenAIConfig>>,
    timeout: Duration,
}

impl OpenAiClient {
    pub fn new(api_key: Option<&SecretString>, api_base: Option<&str>, timeout: Duration) -> Self {
        let client = api_key.map(|key| {
            let mut config = OpenAIConfig::new().with_api_key(key.expose_secret());
            if let Some(base) = api_base {
                config = config.with_api_base(base);
            }
            Client::with_config(config)
        });

        Self { client, timeout }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.openai_api_key.as_ref(),
            config.openai_api_base.as_deref(),
            config.llm_timeout(),
        )
    }

    fn request_body(request: &CompletionRequest) -> serde_json::Value {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = &request.system_prompt {
            messages.push(json!({ "role": "system", "content": system }));
        }
        messages.push(json!({ "role": "user", "content": request.user_prompt }));

        let mut body = json!({
            "model": request.model,
            "messages": messages,
            "max_tokens": request.max_tokens,
            "temperature": request.temperature,
        });
        if request.response_format == ResponseFormat::JsonObject {
            body["response_format"] = json!({ "type": "json_object" });
        }
        body
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError> {
        let client = self.client.as_ref().ok_or(LlmError::MissingCredential)?;
        let body = Self::request_body(&request);

        log::debug!("Sending chat completion to model {}", request.model);

        let response: ChatCompletionBody =
            tokio::time::timeout(self.timeout, client.chat().create_byot(body))
                .await
                .map_err(|_| LlmError::Timeout(self.timeout))??;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| LlmError::Provider("response contained no message content".to_string()))
    }
}

/// Cuts `text` to at most `limit` characters on a char boundary.
pub fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((byte_index, _)) => text[..byte_index].to_string(),
        None => text.to_string(),
    }
}
