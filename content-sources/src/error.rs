use thiserror::Error;

/// Failures while resolving a URL to text.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Not a video URL: {0}")]
    NotVideo(String),
    #[error("No transcript available for video {0}")]
    NoTranscript(String),
    #[error("Unexpected page format: {0}")]
    Parse(String),
}
