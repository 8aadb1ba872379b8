use anyhow::Result;
use openai_client::mask_token;
use relay_core::init_tracing;
use tracing::{info, instrument};

use crate::components::{build_bot_components, build_handler_chain, open_credential_store};
use crate::config::BotConfig;
use crate::telegram::run_repl;

/// Main entry: validate config, init logging, build components, then run the REPL.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.log_file())?;

    info!(
        credential_store = ?config.credential_store,
        log_file = %config.log_file(),
        "Initializing bot"
    );

    let components = build_bot_components(&config).await?;
    let handler_chain = build_handler_chain(&components);

    info!("Bot started successfully");

    run_repl(components.teloxide_bot.clone(), handler_chain).await
}

/// `user_id  token` lines for every stored credential, tokens masked, sorted by user id.
pub async fn list_users(config: &BotConfig) -> Result<Vec<String>> {
    let store = open_credential_store(config).await?;
    let mut users: Vec<(String, String)> = store.load_all().await?.into_iter().collect();
    users.sort();
    Ok(users
        .into_iter()
        .map(|(user_id, token)| format!("{}\t{}", user_id, mask_token(&token)))
        .collect())
}
