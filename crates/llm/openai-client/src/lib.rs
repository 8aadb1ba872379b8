//! # OpenAI API client
//!
//! Thin wrapper around [async-openai] for the calls a bound user model needs: chat completion,
//! model listing (used as the token liveness check) and audio transcription.
//! Provides token masking for safe logging. Errors are `anyhow` errors wrapping
//! [`async_openai::error::OpenAIError`], so callers can downcast to classify them.

use async_openai::{
    types::{CreateChatCompletionRequestArgs, CreateTranscriptionRequestArgs},
    Client,
};
use std::path::Path;
use std::sync::Arc;

pub use async_openai::config::OpenAIConfig;
pub use async_openai::error::{ApiError, OpenAIError};
pub use async_openai::types::{
    ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
};

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Masks an API key/token for safe logging: shows first 7 chars + "***" + last 4 chars.
/// If length <= 11, returns "***" to avoid leaking any part of the key.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    let len = chars.len();
    if len <= 11 {
        return "***".to_string();
    }
    let head: String = chars[..7].iter().collect();
    let tail: String = chars[len - 4..].iter().collect();
    format!("{}***{}", head, tail)
}

/// OpenAI client bound to one API key.
#[derive(Clone)]
pub struct OpenAIClient {
    client: Arc<Client<OpenAIConfig>>,
    /// Masked once at construction; only this form is ever logged.
    masked_key: String,
}

impl OpenAIClient {
    /// Builds a client using the given API key and default API base URL.
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Builds a client with a custom base URL (e.g. for proxies or compatible endpoints).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let masked_key = mask_token(&api_key);
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(base_url);
        Self {
            client: Arc::new(Client::with_config(config)),
            masked_key,
        }
    }

    /// Masked form of the API key, for log fields.
    pub fn masked_key(&self) -> &str {
        &self.masked_key
    }

    /// Sends a chat completion request and returns the first choice's content.
    ///
    /// Logs masked API key, message count, and token usage.
    pub async fn chat_completion(
        &self,
        model: &str,
        messages: Vec<ChatCompletionRequestMessage>,
    ) -> anyhow::Result<String> {
        tracing::info!(
            model = %model,
            message_count = messages.len(),
            api_key = %self.masked_key,
            "OpenAI chat_completion request"
        );

        let request = CreateChatCompletionRequestArgs::default()
            .model(model)
            .messages(messages)
            .build()?;

        if let Ok(json) = serde_json::to_string(&request) {
            tracing::debug!(request_json = %json, "OpenAI chat_completion request JSON");
        }

        let response = self.client.chat().create(request).await?;

        if let Some(ref u) = response.usage {
            tracing::info!(
                prompt_tokens = u.prompt_tokens,
                completion_tokens = u.completion_tokens,
                total_tokens = u.total_tokens,
                "OpenAI chat_completion usage"
            );
        }

        match response.choices.first() {
            Some(choice) => Ok(choice.message.content.clone().unwrap_or_default()),
            None => anyhow::bail!("No response from OpenAI"),
        }
    }

    /// Lists the models visible to this key and returns how many there are.
    /// Succeeds only if the key is accepted by the provider.
    pub async fn list_models(&self) -> anyhow::Result<usize> {
        tracing::info!(api_key = %self.masked_key, "OpenAI list_models request");
        let response = self.client.models().list().await?;
        Ok(response.data.len())
    }

    /// Transcribes an audio file and returns the recognized text.
    pub async fn transcribe(&self, model: &str, audio_path: &Path) -> anyhow::Result<String> {
        tracing::info!(
            model = %model,
            audio_path = %audio_path.display(),
            api_key = %self.masked_key,
            "OpenAI transcription request"
        );

        let request = CreateTranscriptionRequestArgs::default()
            .file(audio_path)
            .model(model)
            .build()?;

        let response = self.client.audio().transcribe(request).await?;
        tracing::info!(text_len = response.text.len(), "OpenAI transcription completed");
        Ok(response.text)
    }
}
