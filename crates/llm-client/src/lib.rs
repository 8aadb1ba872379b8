//! # LLM client abstraction
//!
//! Defines the [`ModelClient`] trait a user binding is built on (token liveness check, chat
//! completion, image generation, audio transcription), the [`ModelError`] classification of upstream
//! failures, and the [`ModelClientFactory`] used to build a client from a user's token.
//! The OpenAI implementation lives in [`openai_llm`].

use async_trait::async_trait;
use prompt::ChatMessage;
use std::path::Path;
use std::sync::Arc;

mod config;
mod error;
mod openai_llm;

pub use config::ModelSettings;
pub use error::ModelError;
pub use openai_llm::{OpenAIModelClient, OpenAIModelFactory};

/// Operations available once a user's token is bound.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Returns true if the provider accepts the token.
    async fn validate_token(&self) -> bool;

    /// Returns the assistant reply for the ordered messages (system first).
    async fn chat_completion(&self, messages: &[ChatMessage]) -> Result<String, ModelError>;

    /// Generates an image and returns its URL.
    async fn image_generation(&self, prompt: &str) -> Result<String, ModelError>;

    /// Transcribes the audio file at `audio_path`.
    async fn audio_transcription(&self, audio_path: &Path) -> Result<String, ModelError>;
}

/// Builds a candidate [`ModelClient`] for a token. Construction never touches the network.
pub trait ModelClientFactory: Send + Sync {
    fn create(&self, token: &str) -> Arc<dyn ModelClient>;
}
