use relay_core::{Chat, Message, MessagePayload, ToCoreMessage, ToCoreUser, User, VoiceRef};
use teloxide::types::MediaKind;
use teloxide::types::MessageKind;

/// Telegram 用户到 Core 用户的转换器
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Telegram 消息到 Core 消息的转换器
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        Message {
            id: self.0.id.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(|| User {
                    id: 0,
                    username: None,
                    first_name: None,
                    last_name: None,
                }),
            chat: Chat {
                id: self.0.chat.id.0,
                chat_type: format!("{:?}", self.0.chat.kind),
            },
            payload: self.payload(),
            created_at: chrono::Utc::now(),
        }
    }
}

impl<'a> TelegramMessageWrapper<'a> {
    /// 文本、语音（voice / audio）之外的消息均为 Unsupported
    fn payload(&self) -> MessagePayload {
        if let Some(text) = self.0.text() {
            return MessagePayload::Text(text.to_string());
        }
        if let Some(voice) = self.0.voice() {
            return MessagePayload::Voice(VoiceRef {
                file_id: voice.file.id.0.clone(),
                mime_type: voice.mime_type.as_ref().map(|m| m.essence_str().to_string()),
            });
        }
        if let Some(audio) = self.0.audio() {
            return MessagePayload::Voice(VoiceRef {
                file_id: audio.file.id.0.clone(),
                mime_type: audio.mime_type.as_ref().map(|m| m.essence_str().to_string()),
            });
        }
        MessagePayload::Unsupported(self.kind_label().to_string())
    }

    fn kind_label(&self) -> &'static str {
        match &self.0.kind {
            MessageKind::Common(common) => match &common.media_kind {
                MediaKind::Photo(_) => "photo",
                MediaKind::Sticker(_) => "sticker",
                MediaKind::Video(_) => "video",
                MediaKind::Document(_) => "document",
                MediaKind::Location(_) => "location",
                _ => "media",
            },
            _ => "service",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_telegram_user_wrapper_to_core() {
        let user = teloxide::types::User {
            id: teloxide::types::UserId(123),
            is_bot: false,
            first_name: "Test".to_string(),
            last_name: Some("User".to_string()),
            username: Some("testuser".to_string()),
            language_code: Some("en".to_string()),
            is_premium: false,
            added_to_attachment_menu: false,
        };

        let core_user = TelegramUserWrapper(&user).to_core();

        assert_eq!(core_user.id, 123);
        assert_eq!(core_user.key(), "123");
        assert_eq!(core_user.username, Some("testuser".to_string()));
        assert_eq!(core_user.last_name, Some("User".to_string()));
    }
}
