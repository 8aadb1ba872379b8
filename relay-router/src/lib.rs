//! # relay-router
//!
//! Per-message orchestration for the relay: parse the text into a [`Command`], check the user's
//! model binding in the [`BindingRegistry`], run the strategy (chat, image, page / video summary,
//! audio transcription) against [`memory::SessionStore`], and map every failure to one reply via
//! [`RouterError::user_reply`]. [`RelayHandler`] plugs the router into the handler chain.

mod binding;
mod command;
mod error;
mod relay_handler;
mod router;
mod summarize;
mod temp_audio;

pub use binding::BindingRegistry;
pub use command::Command;
pub use error::RouterError;
pub use relay_handler::RelayHandler;
pub use router::{CommandRouter, ContentSources, HELP_TEXT};
pub use summarize::fold_summarize;
pub use temp_audio::TempAudioFile;
