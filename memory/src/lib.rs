//! # Session memory
//!
//! Keeps a short rolling conversation per user plus an optional per-user system message override.
//!
//! - [`ConversationWindow`]: FIFO buffer bounded to `2 × pairs` raw entries.
//! - [`SessionStore`]: the store interface the router is built on.
//! - [`InMemorySessionStore`]: process-local implementation (`Arc<RwLock<HashMap>>`).
//!
//! `get` always yields the system entry first (override, else the configured default) followed by
//! the window in chronological order. The system entry is never stored in the window, so capacity
//! pressure can never evict it.

mod config;
mod inmemory;
mod store;
mod window;

pub use config::{MemoryConfig, DEFAULT_MEMORY_MESSAGE_COUNT};
pub use inmemory::InMemorySessionStore;
pub use store::SessionStore;
pub use window::ConversationWindow;
