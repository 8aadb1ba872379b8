//! OpenAI 实现的 ModelClient：包装 openai-client 与 image-generation-client。

use async_trait::async_trait;
use image_generation_client::ImageGenerationClient;
use openai_client::{
    ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs, OpenAIClient,
};
use prompt::{ChatMessage, MessageRole};
use std::path::Path;
use std::sync::Arc;
use tracing::{instrument, warn};

use crate::{ModelClient, ModelClientFactory, ModelError, ModelSettings};

/// Converts a single [`ChatMessage`] into OpenAI API message format.
fn chat_message_to_openai(msg: &ChatMessage) -> anyhow::Result<ChatCompletionRequestMessage> {
    let content = msg.content.clone();
    let openai_msg: ChatCompletionRequestMessage = match msg.role {
        MessageRole::System => ChatCompletionRequestSystemMessageArgs::default()
            .content(content)
            .build()?
            .into(),
        MessageRole::User => ChatCompletionRequestUserMessageArgs::default()
            .content(content)
            .build()?
            .into(),
        MessageRole::Assistant => ChatCompletionRequestAssistantMessageArgs::default()
            .content(content)
            .build()?
            .into(),
    };
    Ok(openai_msg)
}

/// One user's OpenAI binding.
#[derive(Clone)]
pub struct OpenAIModelClient {
    client: OpenAIClient,
    images: ImageGenerationClient,
    settings: ModelSettings,
}

impl OpenAIModelClient {
    pub fn new(api_key: String, settings: ModelSettings) -> Self {
        let client = OpenAIClient::with_base_url(api_key.clone(), settings.base_url.clone());
        let images = ImageGenerationClient::with_base_url(api_key, settings.base_url.clone())
            .with_model(settings.image_model.clone());
        Self {
            client,
            images,
            settings,
        }
    }
}

#[async_trait]
impl ModelClient for OpenAIModelClient {
    #[instrument(skip(self), fields(api_key = %self.client.masked_key()))]
    async fn validate_token(&self) -> bool {
        match self.client.list_models().await {
            Ok(count) => {
                tracing::info!(model_count = count, "Token accepted by provider");
                true
            }
            Err(e) => {
                warn!(error = %e, "Token rejected by provider");
                false
            }
        }
    }

    #[instrument(skip(self, messages), fields(message_count = messages.len()))]
    async fn chat_completion(&self, messages: &[ChatMessage]) -> Result<String, ModelError> {
        let openai_messages = messages
            .iter()
            .map(chat_message_to_openai)
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| ModelError::Upstream(e.to_string()))?;

        let reply = self
            .client
            .chat_completion(&self.settings.chat_model, openai_messages)
            .await
            .map_err(|e| ModelError::classify(&e))?;

        if reply.trim().is_empty() {
            return Err(ModelError::EmptyResponse);
        }
        Ok(reply)
    }

    #[instrument(skip(self, prompt))]
    async fn image_generation(&self, prompt: &str) -> Result<String, ModelError> {
        self.images
            .generate_image(prompt)
            .await
            .map_err(|e| ModelError::classify(&e))
    }

    #[instrument(skip(self))]
    async fn audio_transcription(&self, audio_path: &Path) -> Result<String, ModelError> {
        self.client
            .transcribe(&self.settings.transcription_model, audio_path)
            .await
            .map_err(|e| ModelError::classify(&e))
    }
}

/// Builds [`OpenAIModelClient`]s sharing one [`ModelSettings`].
#[derive(Debug, Clone, Default)]
pub struct OpenAIModelFactory {
    settings: ModelSettings,
}

impl OpenAIModelFactory {
    pub fn new(settings: ModelSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ModelSettings {
        &self.settings
    }
}

impl ModelClientFactory for OpenAIModelFactory {
    fn create(&self, token: &str) -> Arc<dyn ModelClient> {
        Arc::new(OpenAIModelClient::new(token.to_string(), self.settings.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_message_conversion_keeps_roles() {
        let converted = [
            ChatMessage::system("s"),
            ChatMessage::user("u"),
            ChatMessage::assistant("a"),
        ]
        .iter()
        .map(chat_message_to_openai)
        .collect::<anyhow::Result<Vec<_>>>()
        .unwrap();

        assert!(matches!(converted[0], ChatCompletionRequestMessage::System(_)));
        assert!(matches!(converted[1], ChatCompletionRequestMessage::User(_)));
        assert!(matches!(converted[2], ChatCompletionRequestMessage::Assistant(_)));
    }

    #[test]
    fn test_factory_builds_without_network() {
        let factory = OpenAIModelFactory::new(ModelSettings {
            chat_model: "gpt-4o-mini".to_string(),
            ..ModelSettings::default()
        });
        let _client = factory.create("sk-test-token-0000");
        assert_eq!(factory.settings().chat_model, "gpt-4o-mini");
    }

    /// Requires a real key: OPENAI_API_KEY.
    #[tokio::test]
    #[ignore]
    async fn test_validate_token_against_provider() {
        let key = std::env::var("OPENAI_API_KEY").unwrap();
        let client = OpenAIModelClient::new(key, ModelSettings::default());
        assert!(client.validate_token().await);
    }
}
