//! SQLite credential store.
//!
//! Table `credentials(user_id TEXT PRIMARY KEY, token TEXT NOT NULL, updated_at TEXT NOT NULL)`;
//! saves are upserts keyed on `user_id`.

use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use crate::{CredentialMap, CredentialStore, SqlitePoolManager, StorageError};

#[derive(Clone)]
pub struct SqliteCredentialStore {
    pool_manager: SqlitePoolManager,
}

impl SqliteCredentialStore {
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool_manager = SqlitePoolManager::new(database_url).await?;
        let store = Self { pool_manager };
        store.init().await?;
        Ok(store)
    }

    async fn init(&self) -> Result<(), StorageError> {
        info!("Creating credentials table if not exist");
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS credentials (
                user_id TEXT PRIMARY KEY,
                token TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(self.pool_manager.pool())
        .await?;
        Ok(())
    }
}

#[async_trait]
impl CredentialStore for SqliteCredentialStore {
    async fn load_all(&self) -> Result<CredentialMap, StorageError> {
        let rows: Vec<(String, String)> =
            sqlx::query_as("SELECT user_id, token FROM credentials")
                .fetch_all(self.pool_manager.pool())
                .await?;
        info!(count = rows.len(), "Loaded credentials from SQLite");
        Ok(rows.into_iter().collect())
    }

    async fn save_or_update(&self, user_id: &str, token: &str) -> Result<(), StorageError> {
        sqlx::query(
            r#"
            INSERT INTO credentials (user_id, token, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT(user_id) DO UPDATE SET token = excluded.token, updated_at = excluded.updated_at
            "#,
        )
        .bind(user_id)
        .bind(token)
        .bind(Utc::now())
        .execute(self.pool_manager.pool())
        .await?;

        info!(user_id = %user_id, "Credential saved to SQLite");
        Ok(())
    }
}
