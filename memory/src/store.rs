//! Session store interface.

use async_trait::async_trait;
use prompt::{ChatMessage, MessageRole};

/// Per-user conversation state. Each method is atomic with respect to one user's state; no
/// transaction spans several calls.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// System entry (override or default) followed by the stored window, oldest first.
    async fn get(&self, user_id: &str) -> anyhow::Result<Vec<ChatMessage>>;

    /// Appends an entry, creating the window if needed and evicting the oldest entries past capacity.
    async fn append(&self, user_id: &str, role: MessageRole, content: &str) -> anyhow::Result<()>;

    /// Sets the per-user system message; existing entries are kept.
    async fn change_system_message(&self, user_id: &str, text: &str) -> anyhow::Result<()>;

    /// Drops the window and the override. Absent users are not an error.
    async fn remove(&self, user_id: &str) -> anyhow::Result<()>;
}
