//! BotConfig: BaseConfig + model, memory, credential store and content source settings.

use anyhow::{Context, Result};
use content_sources::{DEFAULT_WEBSITE_CHUNK_SIZE, DEFAULT_YOUTUBE_CHUNK_COUNT};
use llm_client::ModelSettings;
use memory::MemoryConfig;
use prompt::SummaryPrompts;
use std::env;
use std::str::FromStr;

use super::BaseConfig;

/// Where registered tokens are persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialStoreKind {
    /// CREDENTIAL_STORE=file, path from CREDENTIAL_FILE_PATH
    File { path: String },
    /// CREDENTIAL_STORE=sqlite, DATABASE_URL
    Sqlite { database_url: String },
}

impl CredentialStoreKind {
    fn from_env() -> Result<Self> {
        let kind = env::var("CREDENTIAL_STORE").unwrap_or_else(|_| "file".to_string());
        match kind.to_lowercase().as_str() {
            "file" => Ok(Self::File {
                path: env::var("CREDENTIAL_FILE_PATH").unwrap_or_else(|_| "db.json".to_string()),
            }),
            "sqlite" => Ok(Self::Sqlite {
                database_url: env::var("DATABASE_URL")
                    .unwrap_or_else(|_| "./data/credentials.db".to_string()),
            }),
            other => anyhow::bail!("CREDENTIAL_STORE must be 'file' or 'sqlite', got '{}'", other),
        }
    }
}

/// Reads `name` and parses it, falling back to `default` when unset.
fn env_parse<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} has an invalid value: {}", name, raw)),
        Err(_) => Ok(default),
    }
}

/// Bot config. Use BotConfig::load() for env-based loading, then validate().
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub base: BaseConfig,
    pub model: ModelSettings,
    pub memory: MemoryConfig,
    pub credential_store: CredentialStoreKind,
    pub youtube_chunk_count: usize,
    pub website_chunk_size: usize,
    pub prompts: SummaryPrompts,
}

impl BotConfig {
    /// Load full config from environment variables. If `token` is provided it overrides BOT_TOKEN.
    pub fn load(token: Option<String>) -> Result<Self> {
        let base = BaseConfig::load(token)?;

        let defaults = ModelSettings::default();
        let model = ModelSettings {
            base_url: env::var("OPENAI_BASE_URL").unwrap_or(defaults.base_url),
            chat_model: env::var("OPENAI_MODEL_ENGINE").unwrap_or(defaults.chat_model),
            image_model: env::var("OPENAI_MODEL_ENGINE_IMAGE").unwrap_or(defaults.image_model),
            transcription_model: env::var("OPENAI_MODEL_ENGINE_WHISPER")
                .unwrap_or(defaults.transcription_model),
        };

        let memory_defaults = MemoryConfig::default();
        let memory = MemoryConfig {
            system_message: env::var("SYSTEM_MESSAGE").unwrap_or(memory_defaults.system_message),
            message_count: env_parse("MEMORY_MESSAGE_COUNT", memory_defaults.message_count)?,
        };

        let prompt_defaults = SummaryPrompts::default();
        let prompts = SummaryPrompts {
            video: env::var("VIDEO_SUMMARY_PROMPT").unwrap_or(prompt_defaults.video),
            website: env::var("WEBSITE_SUMMARY_PROMPT").unwrap_or(prompt_defaults.website),
        };

        Ok(Self {
            base,
            model,
            memory,
            credential_store: CredentialStoreKind::from_env()?,
            youtube_chunk_count: env_parse("YOUTUBE_CHUNK_COUNT", DEFAULT_YOUTUBE_CHUNK_COUNT)?,
            website_chunk_size: env_parse("WEBSITE_CHUNK_SIZE", DEFAULT_WEBSITE_CHUNK_SIZE)?,
            prompts,
        })
    }

    /// Validate config. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        if self.memory.message_count == 0 {
            anyhow::bail!("MEMORY_MESSAGE_COUNT must be at least 1");
        }
        if self.youtube_chunk_count == 0 || self.website_chunk_size == 0 {
            anyhow::bail!("YOUTUBE_CHUNK_COUNT and WEBSITE_CHUNK_SIZE must be positive");
        }
        Ok(())
    }

    pub fn base(&self) -> &BaseConfig {
        &self.base
    }

    pub fn bot_token(&self) -> &str {
        &self.base.bot_token
    }
    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }
    pub fn telegram_api_url(&self) -> Option<&str> {
        self.base.telegram_api_url.as_deref()
    }
}
