//! Content sources: resolve message text to summarisable chunks.
//!
//! - [`url`] – [`UrlClassifier`], finds the first http(s) URL in a message
//! - [`youtube`] – [`VideoTranscriptSource`], YouTube caption retrieval
//! - [`website`] – [`PageSource`], paragraph text of a web page
//! - [`chunk`] – chunking helpers shared by both sources

pub mod chunk;
mod error;
mod html;
pub mod url;
pub mod website;
pub mod youtube;

pub use chunk::{chunk_by_chars, group_segments};
pub use error::SourceError;
pub use html::{decode_entities, extract_paragraphs};
pub use url::{RegexUrlClassifier, UrlClassifier};
pub use website::{PageSource, WebsiteSource, DEFAULT_WEBSITE_CHUNK_SIZE};
pub use youtube::{
    extract_video_id, watch_url, VideoTranscriptSource, YoutubeTranscriptSource,
    DEFAULT_YOUTUBE_CHUNK_COUNT,
};

/// User agent sent by both HTTP sources.
pub(crate) const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";
