//! # Telegram relay bot application
//!
//! Loads config from env, assembles the credential store, session memory, model bindings, content
//! sources and router, and runs the teloxide REPL through a handler chain
//! (`LoggingHandler` → `RelayHandler`).

pub mod cli;
pub mod components;
pub mod config;
pub mod handlers;
pub mod runner;
pub mod telegram;

pub use cli::{load_config, Cli, Commands};
pub use components::{build_bot_components, build_handler_chain, open_credential_store, BotComponents};
pub use config::{BaseConfig, BotConfig, CredentialStoreKind};
pub use handlers::LoggingHandler;
pub use runner::{list_users, run_bot};
pub use telegram::{run_repl, TelegramBotAdapter, TelegramMessageWrapper, TelegramUserWrapper};
