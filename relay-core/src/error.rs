use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Unsupported message payload: {0}")]
    UnsupportedPayload(String),

    #[error("State error: {0}")]
    State(String),
}

pub type Result<T> = std::result::Result<T, RelayError>;
