//! Handler-chain adapter: routes each inbound message and sends its single reply.

use async_trait::async_trait;
use relay_core::{Bot, Handler, HandlerResponse, Message, MessagePayload, Reply, Result};
use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::CommandRouter;

const MSG_VOICE_DOWNLOAD_FAILED: &str = "Sorry, the voice message could not be downloaded.";

/// Terminal handler: text and voice messages get exactly one reply; other payloads are ignored.
pub struct RelayHandler {
    router: Arc<CommandRouter>,
    bot: Arc<dyn Bot>,
}

impl RelayHandler {
    pub fn new(router: Arc<CommandRouter>, bot: Arc<dyn Bot>) -> Self {
        Self { router, bot }
    }
}

#[async_trait]
impl Handler for RelayHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id, kind = message.kind()))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let user_id = message.user.key();

        let reply = match &message.payload {
            MessagePayload::Text(text) => self.router.handle_text(&user_id, text).await,
            MessagePayload::Voice(voice) => match self.bot.download_voice(voice).await {
                Ok(bytes) => {
                    self.router
                        .handle_audio(&user_id, &bytes, voice.extension())
                        .await
                }
                Err(e) => {
                    error!(error = %e, file_id = %voice.file_id, "Voice download failed");
                    Reply::text(MSG_VOICE_DOWNLOAD_FAILED)
                }
            },
            MessagePayload::Unsupported(_) => return Ok(HandlerResponse::Ignore),
        };

        self.bot.send_reply(&message.chat, &reply).await?;
        info!(chat_id = message.chat.id, "Reply sent");
        Ok(HandlerResponse::Reply(reply.body().to_string()))
    }
}
