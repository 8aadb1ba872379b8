use async_trait::async_trait;
use std::collections::HashMap;

use crate::StorageError;

/// user id → token.
pub type CredentialMap = HashMap<String, String>;

/// Durable user → token mapping. One token per user; saving again overwrites.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Every stored credential. A store that has never been written returns an empty map.
    async fn load_all(&self) -> Result<CredentialMap, StorageError>;

    /// Inserts or replaces the user's token.
    async fn save_or_update(&self, user_id: &str, token: &str) -> Result<(), StorageError>;
}
