//! # relay-core
//!
//! Core types and traits for the chat relay: [`Bot`] (transport), [`Handler`], inbound [`Message`]
//! and outgoing [`Reply`], plus tracing initialization. Transport-agnostic; the Telegram adapter
//! lives in the telegram-bot crate.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{HandlerError, RelayError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, Handler, HandlerResponse, Message, MessagePayload, Reply, ToCoreMessage, ToCoreUser,
    User, VoiceRef,
};
