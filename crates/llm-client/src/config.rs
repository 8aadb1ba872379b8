//! Model settings shared by every user binding.

use openai_client::DEFAULT_BASE_URL;

/// Which upstream endpoint and models a bound client talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSettings {
    pub base_url: String,
    pub chat_model: String,
    pub image_model: String,
    pub transcription_model: String,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            chat_model: "gpt-3.5-turbo".to_string(),
            image_model: image_generation_client::DEFAULT_IMAGE_MODEL.to_string(),
            transcription_model: "whisper-1".to_string(),
        }
    }
}
