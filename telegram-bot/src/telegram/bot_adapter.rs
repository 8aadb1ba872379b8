//! Wraps teloxide::Bot and implements [`relay_core::Bot`]. Tests substitute another Bot impl.

use async_trait::async_trait;
use relay_core::{Bot as CoreBot, Chat, RelayError, Result, VoiceRef};
use teloxide::net::Download;
use teloxide::prelude::*;
use teloxide::types::{ChatId, FileId, InputFile};
use tracing::debug;

/// Thin wrapper around teloxide::Bot that implements core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| RelayError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_photo(&self, chat: &Chat, image_url: &str, caption: Option<&str>) -> Result<()> {
        let url = reqwest::Url::parse(image_url)
            .map_err(|e| RelayError::Bot(format!("Invalid image url {}: {}", image_url, e)))?;
        let request = self.bot.send_photo(ChatId(chat.id), InputFile::url(url));
        let request = match caption {
            Some(caption) => request.caption(caption.to_string()),
            None => request,
        };
        request.await.map_err(|e| RelayError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn download_voice(&self, voice: &VoiceRef) -> Result<Vec<u8>> {
        let file = self
            .bot
            .get_file(FileId(voice.file_id.clone()))
            .await
            .map_err(|e| RelayError::Bot(e.to_string()))?;

        let mut bytes = Vec::new();
        self.bot
            .download_file(&file.path, &mut bytes)
            .await
            .map_err(|e| RelayError::Bot(e.to_string()))?;
        debug!(file_id = %voice.file_id, size = bytes.len(), "Voice note downloaded");
        Ok(bytes)
    }
}
