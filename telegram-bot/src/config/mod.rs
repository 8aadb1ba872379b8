//! Bot configuration: BaseConfig (Telegram + log) + relay settings (models, memory, credentials,
//! content sources). Loaded from env.

mod base;
mod bot_config;

#[cfg(test)]
mod tests;

pub use base::BaseConfig;
pub use bot_config::{BotConfig, CredentialStoreKind};
