//! Model binding registry: registration, persistence and restoration.

mod common;

use common::*;
use relay_core::Reply;
use relay_router::{BindingRegistry, RouterError};
use std::sync::Arc;

/// **Test: A valid token binds the user and is persisted.**
#[tokio::test]
async fn test_register_valid_token() {
    let h = Harness::new(MockFactory::default().with(VALID_TOKEN, Arc::new(MockModelClient::new(true))));

    let reply = h.router.handle_text("1", "/register sk-valid").await;
    assert_eq!(reply, Reply::text("Token is valid, registration succeeded"));
    assert!(h.bindings.get("1").await.is_some());
    assert_eq!(
        h.credentials.saved.lock().unwrap().get("1").map(String::as_str),
        Some(VALID_TOKEN)
    );
    // Registration does not touch the conversation.
    assert_eq!(h.sessions.user_count().await, 0);
}

/// **Test: An invalid token keeps the previous binding and stored token.**
#[tokio::test]
async fn test_register_invalid_token_keeps_prior_binding() {
    let first = Arc::new(MockModelClient::new(true));
    let h = Harness::new(MockFactory::default().with(VALID_TOKEN, first));
    h.bindings.register("1", VALID_TOKEN).await.unwrap();

    let err = h.bindings.register("1", "sk-revoked").await.err().unwrap();
    assert!(matches!(err, RouterError::InvalidCredential));

    let reply = h.router.handle_text("1", "/register sk-revoked").await;
    assert_eq!(
        reply,
        Reply::text("Invalid token, please register again using /register sk-xxxxx")
    );
    assert!(h.bindings.get("1").await.unwrap().validate_token().await);
    assert_eq!(
        h.credentials.saved.lock().unwrap().get("1").map(String::as_str),
        Some(VALID_TOKEN)
    );
}

/// **Test: /register with no token is rejected without calling the provider.**
#[tokio::test]
async fn test_register_empty_token() {
    let h = Harness::new(MockFactory::default());
    let reply = h.router.handle_text("1", "/register   ").await;
    assert_eq!(
        reply,
        Reply::text("Invalid token, please register again using /register sk-xxxxx")
    );
    assert!(h.bindings.is_empty().await);
}

/// **Test: A storage failure during registration leaves the user unbound.**
#[tokio::test]
async fn test_register_storage_failure() {
    let h = Harness::with_credentials(
        MockFactory::default().with(VALID_TOKEN, Arc::new(MockModelClient::new(true))),
        MemoryCredentialStore {
            fail_saves: true,
            ..Default::default()
        },
    );
    let reply = h.router.handle_text("1", "/register sk-valid").await;
    assert!(reply.body().contains("read-only"));
    assert!(h.bindings.get("1").await.is_none());
}

/// **Test: Re-registering replaces the binding.**
#[tokio::test]
async fn test_reregister_overwrites() {
    let old = Arc::new(MockModelClient::new(true));
    let new = Arc::new(MockModelClient::new(true));
    let h = Harness::new(
        MockFactory::default()
            .with(VALID_TOKEN, old.clone())
            .with("sk-valid-2", new.clone()),
    );
    h.bindings.register("1", VALID_TOKEN).await.unwrap();
    h.bindings.register("1", "sk-valid-2").await.unwrap();

    h.router.handle_text("1", "hi").await;
    assert_eq!(old.chat_call_count(), 0);
    assert_eq!(new.chat_call_count(), 1);
    assert_eq!(h.bindings.len().await, 1);
}

/// **Test: Restore binds every stored user without validating tokens.**
#[tokio::test]
async fn test_restore_skips_validation() {
    let credentials = Arc::new(MemoryCredentialStore::default());
    credentials
        .saved
        .lock()
        .unwrap()
        .extend([("1".to_string(), "sk-stale".to_string()), ("2".to_string(), VALID_TOKEN.to_string())]);

    let factory = MockFactory::default().with(VALID_TOKEN, Arc::new(MockModelClient::new(true)));
    let registry = BindingRegistry::restore(Arc::new(factory), credentials).await.unwrap();

    assert_eq!(registry.len().await, 2);
    // The stale token is bound anyway; it only fails once used.
    assert!(!registry.get("1").await.unwrap().validate_token().await);
    assert!(registry.get("3").await.is_none());
}
