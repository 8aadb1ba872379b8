//! # In-memory session store
//!
//! Windows live in an `Arc<RwLock<HashMap<user_id, ConversationWindow>>>`; every operation takes the
//! lock once, so map-level get/append/remove are atomic. State is lost on restart.

use async_trait::async_trait;
use prompt::{ChatMessage, MessageRole};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::{ConversationWindow, MemoryConfig, SessionStore};

#[derive(Debug, Clone)]
pub struct InMemorySessionStore {
    config: MemoryConfig,
    windows: Arc<RwLock<HashMap<String, ConversationWindow>>>,
}

impl InMemorySessionStore {
    pub fn new(config: MemoryConfig) -> Self {
        Self {
            config,
            windows: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn config(&self) -> &MemoryConfig {
        &self.config
    }

    /// Number of users with a window.
    pub async fn user_count(&self) -> usize {
        self.windows.read().await.len()
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new(MemoryConfig::default())
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, user_id: &str) -> anyhow::Result<Vec<ChatMessage>> {
        let windows = self.windows.read().await;
        let messages = match windows.get(user_id) {
            Some(window) => window.to_messages(&self.config.system_message),
            None => vec![ChatMessage::system(self.config.system_message.as_str())],
        };
        Ok(messages)
    }

    async fn append(&self, user_id: &str, role: MessageRole, content: &str) -> anyhow::Result<()> {
        let mut windows = self.windows.write().await;
        let window = windows
            .entry(user_id.to_string())
            .or_insert_with(|| ConversationWindow::new(self.config.message_count));
        window.push(role, content);
        debug!(
            user_id = %user_id,
            role = role.as_str(),
            window_len = window.len(),
            "Session entry appended"
        );
        Ok(())
    }

    async fn change_system_message(&self, user_id: &str, text: &str) -> anyhow::Result<()> {
        let mut windows = self.windows.write().await;
        windows
            .entry(user_id.to_string())
            .or_insert_with(|| ConversationWindow::new(self.config.message_count))
            .set_system_override(text);
        debug!(user_id = %user_id, "Session system message changed");
        Ok(())
    }

    async fn remove(&self, user_id: &str) -> anyhow::Result<()> {
        let removed = self.windows.write().await.remove(user_id).is_some();
        debug!(user_id = %user_id, removed, "Session removed");
        Ok(())
    }
}
