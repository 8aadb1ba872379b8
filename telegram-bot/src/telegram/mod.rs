//! Telegram transport: teloxide ↔ core conversions, the [`relay_core::Bot`] adapter and the REPL.

mod adapters;
mod bot_adapter;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use runner::run_repl;
