//! Logs each inbound event in before() and its outcome in after(); always continues.

use async_trait::async_trait;
use relay_core::{Handler, HandlerResponse, Message, Result};
use tracing::{info, instrument};

pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        info!(
            user_id = message.user.id,
            username = %message.user.username.as_deref().unwrap_or("unknown"),
            kind = %message.kind(),
            text_len = message.text().map(str::len).unwrap_or(0),
            "Received message"
        );
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        let replied = matches!(response, HandlerResponse::Reply(_));
        info!(
            message_id = %message.id,
            user_id = message.user.id,
            replied,
            "Processed message"
        );
        Ok(())
    }
}
