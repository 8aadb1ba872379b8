//! Bot abstraction for delivering replies and fetching voice-note bytes.
//!
//! [`Bot`] is transport-agnostic; the teloxide implementation lives in the telegram-bot crate and
//! tests substitute an in-memory mock.

use crate::error::Result;
use crate::types::{Chat, Reply, VoiceRef};
use async_trait::async_trait;

/// Transport operations the relay needs.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends an image by URL, with optional caption.
    async fn send_photo(&self, chat: &Chat, image_url: &str, caption: Option<&str>) -> Result<()>;
    /// Downloads the raw bytes of a voice note.
    async fn download_voice(&self, voice: &VoiceRef) -> Result<Vec<u8>>;

    /// Delivers a [`Reply`] using the matching send method.
    async fn send_reply(&self, chat: &Chat, reply: &Reply) -> Result<()> {
        match reply {
            Reply::Text(text) => self.send_message(chat, text).await,
            Reply::Image { url } => self.send_photo(chat, url, None).await,
        }
    }
}
