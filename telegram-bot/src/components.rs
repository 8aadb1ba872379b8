//! Component factory: builds BotComponents from config. Isolates assembly logic from runner.

use anyhow::{Context, Result};
use content_sources::{RegexUrlClassifier, WebsiteSource, YoutubeTranscriptSource};
use handler_chain::HandlerChain;
use llm_client::OpenAIModelFactory;
use memory::{InMemorySessionStore, SessionStore};
use relay_router::{BindingRegistry, CommandRouter, ContentSources, RelayHandler};
use std::sync::Arc;
use storage::{CredentialStore, JsonFileCredentialStore, SqliteCredentialStore};
use teloxide::prelude::*;
use tracing::{error, info, instrument};

use crate::config::{BotConfig, CredentialStoreKind};
use crate::handlers::LoggingHandler;
use crate::telegram::TelegramBotAdapter;

/// Everything run_bot needs; produced by the component factory.
#[derive(Clone)]
pub struct BotComponents {
    pub teloxide_bot: Bot,
    pub bot_adapter: Arc<dyn relay_core::Bot>,
    pub router: Arc<CommandRouter>,
}

/// Opens the configured credential store.
#[instrument(skip(config))]
pub async fn open_credential_store(config: &BotConfig) -> Result<Arc<dyn CredentialStore>> {
    let store: Arc<dyn CredentialStore> = match &config.credential_store {
        CredentialStoreKind::File { path } => {
            info!(path = %path, "Using JSON file credential store");
            Arc::new(JsonFileCredentialStore::new(path))
        }
        CredentialStoreKind::Sqlite { database_url } => {
            info!(database_url = %database_url, "Using SQLite credential store");
            Arc::new(
                SqliteCredentialStore::new(database_url)
                    .await
                    .with_context(|| format!("Failed to open credential database {}", database_url))?,
            )
        }
    };
    Ok(store)
}

fn build_teloxide_bot(config: &BotConfig) -> Bot {
    let bot = Bot::new(config.bot_token().to_string());
    match config.telegram_api_url() {
        Some(url_str) => match reqwest::Url::parse(url_str) {
            Ok(url) => bot.set_api_url(url),
            Err(e) => {
                error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                bot
            }
        },
        None => bot,
    }
}

/// Builds the credential store, session memory, restored bindings, content sources and router.
#[instrument(skip(config))]
pub async fn build_bot_components(config: &BotConfig) -> Result<BotComponents> {
    let teloxide_bot = build_teloxide_bot(config);
    let bot_adapter: Arc<dyn relay_core::Bot> =
        Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));

    let credentials = open_credential_store(config).await?;
    let factory = Arc::new(OpenAIModelFactory::new(config.model.clone()));
    let bindings = Arc::new(
        BindingRegistry::restore(factory, credentials)
            .await
            .context("Failed to restore model bindings")?,
    );

    let sessions: Arc<dyn SessionStore> =
        Arc::new(InMemorySessionStore::new(config.memory.clone()));

    let sources = ContentSources {
        urls: Arc::new(RegexUrlClassifier),
        videos: Arc::new(
            YoutubeTranscriptSource::new(config.youtube_chunk_count)
                .context("Failed to build YouTube HTTP client")?,
        ),
        pages: Arc::new(
            WebsiteSource::new(config.website_chunk_size)
                .context("Failed to build website HTTP client")?,
        ),
    };

    info!(
        bound_users = bindings.len().await,
        chat_model = %config.model.chat_model,
        memory_pairs = config.memory.message_count,
        "Bot components ready"
    );

    let router = Arc::new(CommandRouter::new(
        sessions,
        bindings,
        sources,
        config.prompts.clone(),
    ));

    Ok(BotComponents {
        teloxide_bot,
        bot_adapter,
        router,
    })
}

/// Handler chain: LoggingHandler, then the relay handler that answers every message.
pub fn build_handler_chain(components: &BotComponents) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(RelayHandler::new(
            components.router.clone(),
            components.bot_adapter.clone(),
        )))
}
