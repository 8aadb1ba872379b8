//! Core types: user, chat, inbound message, outgoing reply, handler response, and Handler trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User identity as supplied by the transport.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl User {
    /// Stable key used for all per-user state (bindings, sessions, credentials).
    pub fn key(&self) -> String {
        self.id.to_string()
    }
}

/// Chat (channel or private) identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

/// Reference to a voice note held by the transport; bytes are fetched through [`crate::Bot::download_voice`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceRef {
    pub file_id: String,
    pub mime_type: Option<String>,
}

impl VoiceRef {
    /// File extension for the temporary audio file. Unknown or missing mime types fall back to `m4a`.
    pub fn extension(&self) -> &'static str {
        match self.mime_type.as_deref() {
            Some("audio/ogg") | Some("audio/opus") => "ogg",
            Some("audio/mpeg") | Some("audio/mp3") => "mp3",
            Some("audio/wav") | Some("audio/x-wav") => "wav",
            Some("audio/webm") => "webm",
            _ => "m4a",
        }
    }
}

/// What the inbound event carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessagePayload {
    Text(String),
    Voice(VoiceRef),
    /// Anything the relay does not route (stickers, photos, ...). Holds a short kind label for logs.
    Unsupported(String),
}

/// A single inbound event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub payload: MessagePayload,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Text content, if this is a text message.
    pub fn text(&self) -> Option<&str> {
        match &self.payload {
            MessagePayload::Text(t) => Some(t.as_str()),
            _ => None,
        }
    }

    /// Short label of the payload kind, for logging.
    pub fn kind(&self) -> &str {
        match &self.payload {
            MessagePayload::Text(_) => "text",
            MessagePayload::Voice(_) => "voice",
            MessagePayload::Unsupported(kind) => kind.as_str(),
        }
    }
}

/// The single outgoing message produced for an inbound event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reply {
    Text(String),
    Image { url: String },
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Reply::Text(text.into())
    }

    /// Text body, or the image URL for image replies.
    pub fn body(&self) -> &str {
        match self {
            Reply::Text(t) => t,
            Reply::Image { url } => url,
        }
    }
}

/// Handler result for the chain. `Reply(text)` carries the response body so later handlers can use it in `after()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; no response body.
    Stop,
    /// Skip this handler, try next.
    Ignore,
    /// Stop the chain and attach reply body.
    Reply(String),
}

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific message type to core [`Message`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}

/// Single handler concept: optional before / handle / after. Chain runs all before → handle until Stop/Reply → all after (reverse).
#[async_trait]
pub trait Handler: Send + Sync {
    /// Runs before the handle phase. Return false to stop the chain.
    async fn before(&self, _message: &Message) -> crate::error::Result<bool> {
        Ok(true)
    }
    /// Processes the message. Return Stop or Reply to end the handle phase. Default: Continue.
    async fn handle(&self, _message: &Message) -> crate::error::Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }
    /// Runs after the handle phase (reverse order), with the final response.
    async fn after(
        &self,
        _message: &Message,
        _response: &HandlerResponse,
    ) -> crate::error::Result<()> {
        Ok(())
    }
}
