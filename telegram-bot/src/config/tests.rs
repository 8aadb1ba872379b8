//! Config tests.

use crate::config::{BotConfig, CredentialStoreKind};
use serial_test::serial;
use std::env;

const VARS: &[&str] = &[
    "BOT_TOKEN",
    "TELEGRAM_API_URL",
    "TELOXIDE_API_URL",
    "LOG_FILE",
    "OPENAI_BASE_URL",
    "OPENAI_MODEL_ENGINE",
    "OPENAI_MODEL_ENGINE_IMAGE",
    "OPENAI_MODEL_ENGINE_WHISPER",
    "SYSTEM_MESSAGE",
    "MEMORY_MESSAGE_COUNT",
    "CREDENTIAL_STORE",
    "CREDENTIAL_FILE_PATH",
    "DATABASE_URL",
    "YOUTUBE_CHUNK_COUNT",
    "WEBSITE_CHUNK_SIZE",
    "VIDEO_SUMMARY_PROMPT",
    "WEBSITE_SUMMARY_PROMPT",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_load_config_with_defaults() {
    clear_env();
    env::set_var("BOT_TOKEN", "test_token");

    let config = BotConfig::load(None).unwrap();

    assert_eq!(config.bot_token(), "test_token");
    assert!(config.telegram_api_url().is_none());
    assert_eq!(config.log_file(), "logs/relay-bot.log");
    assert_eq!(config.model.base_url, "https://api.openai.com/v1");
    assert_eq!(config.model.chat_model, "gpt-3.5-turbo");
    assert_eq!(config.model.image_model, "dall-e-3");
    assert_eq!(config.model.transcription_model, "whisper-1");
    assert_eq!(config.memory.system_message, prompt::DEFAULT_SYSTEM_MESSAGE);
    assert_eq!(config.memory.message_count, 2);
    assert_eq!(
        config.credential_store,
        CredentialStoreKind::File {
            path: "db.json".to_string()
        }
    );
    assert_eq!(config.youtube_chunk_count, 4);
    assert_eq!(config.website_chunk_size, 2000);
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_load_config_with_custom_values() {
    clear_env();
    env::set_var("BOT_TOKEN", "custom_token");
    env::set_var("OPENAI_MODEL_ENGINE", "gpt-4o-mini");
    env::set_var("SYSTEM_MESSAGE", "Be brief.");
    env::set_var("MEMORY_MESSAGE_COUNT", "5");
    env::set_var("CREDENTIAL_STORE", "sqlite");
    env::set_var("DATABASE_URL", "/tmp/creds.db");
    env::set_var("YOUTUBE_CHUNK_COUNT", "8");

    let config = BotConfig::load(None).unwrap();

    assert_eq!(config.model.chat_model, "gpt-4o-mini");
    assert_eq!(config.memory.system_message, "Be brief.");
    assert_eq!(config.memory.message_count, 5);
    assert_eq!(
        config.credential_store,
        CredentialStoreKind::Sqlite {
            database_url: "/tmp/creds.db".to_string()
        }
    );
    assert_eq!(config.youtube_chunk_count, 8);

    clear_env();
}

#[test]
#[serial]
fn test_load_config_with_override_token() {
    clear_env();
    env::set_var("BOT_TOKEN", "env_token");

    let config = BotConfig::load(Some("override_token".to_string())).unwrap();

    assert_eq!(config.bot_token(), "override_token");
    clear_env();
}

#[test]
#[serial]
fn test_invalid_number_is_error() {
    clear_env();
    env::set_var("MEMORY_MESSAGE_COUNT", "two");

    let err = BotConfig::load(None).unwrap_err();
    assert!(err.to_string().contains("MEMORY_MESSAGE_COUNT"));
    clear_env();
}

#[test]
#[serial]
fn test_unknown_credential_store_is_error() {
    clear_env();
    env::set_var("CREDENTIAL_STORE", "mongo");

    assert!(BotConfig::load(None).is_err());
    clear_env();
}

#[test]
#[serial]
fn test_validate_rejects_missing_token_and_zero_capacity() {
    clear_env();
    let config = BotConfig::load(None).unwrap();
    assert!(config.validate().is_err());

    env::set_var("BOT_TOKEN", "t");
    env::set_var("MEMORY_MESSAGE_COUNT", "0");
    let config = BotConfig::load(None).unwrap();
    assert!(config.validate().is_err());
    clear_env();
}

#[test]
#[serial]
fn test_validate_telegram_api_url_invalid() {
    clear_env();
    env::set_var("BOT_TOKEN", "test_token");
    env::set_var("TELEGRAM_API_URL", "not-a-valid-url");

    let config = BotConfig::load(None).unwrap();
    assert!(config.validate().is_err());
    clear_env();
}
