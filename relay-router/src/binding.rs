//! Model binding registry: user id → bound [`ModelClient`].

use llm_client::{ModelClient, ModelClientFactory};
use openai_client::mask_token;
use std::collections::HashMap;
use std::sync::Arc;
use storage::{CredentialStore, StorageError};
use tokio::sync::RwLock;
use tracing::{info, instrument, warn};

use crate::RouterError;

/// Owns every user's bound model client and keeps the credential store in step with it.
pub struct BindingRegistry {
    bindings: RwLock<HashMap<String, Arc<dyn ModelClient>>>,
    factory: Arc<dyn ModelClientFactory>,
    credentials: Arc<dyn CredentialStore>,
}

impl BindingRegistry {
    /// Empty registry.
    pub fn new(factory: Arc<dyn ModelClientFactory>, credentials: Arc<dyn CredentialStore>) -> Self {
        Self {
            bindings: RwLock::new(HashMap::new()),
            factory,
            credentials,
        }
    }

    /// Registry rebuilt from every stored credential. Tokens are not re-validated here; a
    /// revoked token surfaces on the user's first model call.
    pub async fn restore(
        factory: Arc<dyn ModelClientFactory>,
        credentials: Arc<dyn CredentialStore>,
    ) -> Result<Self, StorageError> {
        let stored = credentials.load_all().await?;
        let bindings = stored
            .iter()
            .map(|(user_id, token)| (user_id.clone(), factory.create(token)))
            .collect::<HashMap<_, _>>();
        info!(count = bindings.len(), "Restored model bindings from credential store");

        Ok(Self {
            bindings: RwLock::new(bindings),
            factory,
            credentials,
        })
    }

    /// Validates `token` against the provider, persists it and binds it to the user.
    ///
    /// On any failure the previous binding and stored token are left as they were.
    #[instrument(skip(self, token), fields(token = %mask_token(token)))]
    pub async fn register(
        &self,
        user_id: &str,
        token: &str,
    ) -> Result<Arc<dyn ModelClient>, RouterError> {
        if token.is_empty() {
            return Err(RouterError::InvalidCredential);
        }

        let candidate = self.factory.create(token);
        if !candidate.validate_token().await {
            warn!(user_id = %user_id, "Token failed liveness check");
            return Err(RouterError::InvalidCredential);
        }

        self.credentials.save_or_update(user_id, token).await?;
        self.bindings
            .write()
            .await
            .insert(user_id.to_string(), Arc::clone(&candidate));

        info!(user_id = %user_id, "User registered");
        Ok(candidate)
    }

    pub async fn get(&self, user_id: &str) -> Option<Arc<dyn ModelClient>> {
        self.bindings.read().await.get(user_id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.bindings.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.bindings.read().await.is_empty()
    }
}
