//! JSON file credential store.
//!
//! The file holds one object mapping user ids to tokens. Writes go to a sibling temp file that is
//! renamed over the original, so a crash mid-write never leaves a truncated file.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::info;

use crate::{CredentialMap, CredentialStore, StorageError};

pub struct JsonFileCredentialStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles within the process.
    write_lock: Mutex<()>,
}

impl JsonFileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_map(&self) -> Result<CredentialMap, StorageError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ok(CredentialMap::new()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(CredentialMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl CredentialStore for JsonFileCredentialStore {
    async fn load_all(&self) -> Result<CredentialMap, StorageError> {
        let map = self.read_map().await?;
        info!(path = %self.path.display(), count = map.len(), "Loaded credentials from file");
        Ok(map)
    }

    async fn save_or_update(&self, user_id: &str, token: &str) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;

        let mut map = self.read_map().await?;
        map.insert(user_id.to_string(), token.to_string());

        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                tokio::fs::create_dir_all(dir).await?;
            }
        }
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, serde_json::to_vec_pretty(&map)?).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        info!(path = %self.path.display(), user_id = %user_id, "Credential saved to file");
        Ok(())
    }
}
