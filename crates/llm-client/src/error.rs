//! Upstream failure classification.

use openai_client::OpenAIError;
use thiserror::Error;

const INCORRECT_API_KEY: &str = "Incorrect API key provided";
const MODEL_OVERLOADED: &str = "That model is currently overloaded with other requests.";

/// A failed model call, classified by what the user can do about it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// The provider rejected the stored token.
    #[error("authentication failed: {0}")]
    AuthFailure(String),

    /// The provider is overloaded or rate limiting.
    #[error("rate limited: {0}")]
    RateLimited(String),

    /// Any other provider or transport failure; the message is shown to the user.
    #[error("{0}")]
    Upstream(String),

    /// The provider answered without usable content.
    #[error("empty response from model")]
    EmptyResponse,
}

impl ModelError {
    /// Classifies a client error. async-openai API errors are inspected by type and message; anything
    /// else falls back to the rendered message text.
    pub fn classify(err: &anyhow::Error) -> Self {
        if let Some(OpenAIError::ApiError(api)) = err.downcast_ref::<OpenAIError>() {
            return Self::from_api_parts(&api.message, api.r#type.as_deref());
        }
        Self::from_message(&err.to_string())
    }

    fn from_api_parts(message: &str, kind: Option<&str>) -> Self {
        match kind {
            Some("insufficient_quota") | Some("rate_limit_exceeded") | Some("server_overloaded") => {
                ModelError::RateLimited(message.to_string())
            }
            _ => Self::from_message(message),
        }
    }

    /// Classifies by message text alone.
    pub fn from_message(message: &str) -> Self {
        if message.starts_with(INCORRECT_API_KEY) || message.contains("invalid_api_key") {
            ModelError::AuthFailure(message.to_string())
        } else if message.starts_with(MODEL_OVERLOADED)
            || message.contains("Rate limit reached")
            || message.contains("rate_limit_exceeded")
        {
            ModelError::RateLimited(message.to_string())
        } else {
            ModelError::Upstream(message.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incorrect_key_is_auth_failure() {
        let err = ModelError::from_api_parts(
            "Incorrect API key provided: sk-abc***. You can find your API key at ...",
            Some("invalid_request_error"),
        );
        assert!(matches!(err, ModelError::AuthFailure(_)));
    }

    #[test]
    fn test_overloaded_is_rate_limited() {
        let err = ModelError::from_api_parts(MODEL_OVERLOADED, Some("server_error"));
        assert!(matches!(err, ModelError::RateLimited(_)));
    }

    #[test]
    fn test_quota_type_is_rate_limited() {
        let err = ModelError::from_api_parts("You exceeded your current quota", Some("insufficient_quota"));
        assert!(matches!(err, ModelError::RateLimited(_)));
    }

    #[test]
    fn test_classify_reads_plain_message() {
        let err = anyhow::anyhow!("Incorrect API key provided: sk-xxx");
        assert!(matches!(ModelError::classify(&err), ModelError::AuthFailure(_)));
    }

    #[test]
    fn test_other_errors_keep_message() {
        let err = anyhow::anyhow!("connection reset by peer");
        assert_eq!(
            ModelError::classify(&err),
            ModelError::Upstream("connection reset by peer".to_string())
        );
    }
}
