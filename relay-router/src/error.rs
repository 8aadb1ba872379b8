//! Router error kinds and their user-facing replies.

use content_sources::SourceError;
use llm_client::ModelError;
use storage::StorageError;
use thiserror::Error;

pub(crate) const MSG_INVALID_CREDENTIAL: &str =
    "Invalid token, please register again using /register sk-xxxxx";
pub(crate) const MSG_MISSING_REGISTRATION: &str =
    "Please register your token first: /register sk-xxxxx";
pub(crate) const MSG_EMPTY_CONTENT: &str = "Unable to extract any text from this website";
pub(crate) const MSG_AUTH_FAILURE: &str =
    "The OpenAI API token is incorrect, please register again.";
pub(crate) const MSG_RATE_LIMITED: &str =
    "The model is currently overloaded, please try again later.";

/// Every way a routed message can fail.
#[derive(Error, Debug)]
pub enum RouterError {
    /// Empty token, or the provider rejected it during `/register`.
    #[error("invalid credential")]
    InvalidCredential,

    #[error("no model binding for user")]
    MissingRegistration,

    /// The URL resolved but yielded no text.
    #[error("no extractable content")]
    EmptyContent,

    #[error(transparent)]
    Upstream(#[from] ModelError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("{0}")]
    Unclassified(String),
}

impl From<anyhow::Error> for RouterError {
    fn from(err: anyhow::Error) -> Self {
        RouterError::Unclassified(format!("{err:#}"))
    }
}

impl From<std::io::Error> for RouterError {
    fn from(err: std::io::Error) -> Self {
        RouterError::Unclassified(err.to_string())
    }
}

impl RouterError {
    /// Detected before any model call; never discards the conversation window.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            RouterError::InvalidCredential | RouterError::MissingRegistration
        )
    }

    /// The single reply text sent for this failure.
    pub fn user_reply(&self) -> String {
        match self {
            RouterError::InvalidCredential => MSG_INVALID_CREDENTIAL.to_string(),
            RouterError::MissingRegistration => MSG_MISSING_REGISTRATION.to_string(),
            RouterError::EmptyContent => MSG_EMPTY_CONTENT.to_string(),
            RouterError::Upstream(ModelError::AuthFailure(_)) => MSG_AUTH_FAILURE.to_string(),
            RouterError::Upstream(ModelError::RateLimited(_)) => MSG_RATE_LIMITED.to_string(),
            other => other.to_string(),
        }
    }
}
