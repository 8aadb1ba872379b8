//! CLI parser and config loading.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::BotConfig;

#[derive(Parser)]
#[command(name = "relay-bot")]
#[command(about = "Telegram relay bot for OpenAI chat, images, link summaries and voice notes", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// List registered user ids with masked tokens from the credential store.
    Users,
}

/// Load BotConfig from environment. If `token` is provided it overrides BOT_TOKEN.
pub fn load_config(token: Option<String>) -> Result<BotConfig> {
    BotConfig::load(token)
}
