//! Storage crate: durable credential persistence.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`credential_store`] – `CredentialStore` trait
//! - [`json_store`] – JSON file implementation (`{"user_id": "token", ...}`)
//! - [`sqlite_store`] – SQLite implementation
//! - [`sqlite_pool`] – SqlitePoolManager

mod credential_store;
mod error;
mod json_store;
mod sqlite_pool;
mod sqlite_store;

pub use credential_store::{CredentialMap, CredentialStore};
pub use error::StorageError;
pub use json_store::JsonFileCredentialStore;
pub use sqlite_pool::SqlitePoolManager;
pub use sqlite_store::SqliteCredentialStore;
