//! Generic web page source.

use async_trait::async_trait;
use tracing::{info, instrument};

use crate::chunk::chunk_by_chars;
use crate::html::extract_paragraphs;
use crate::{SourceError, USER_AGENT};

/// Default maximum characters per page chunk.
pub const DEFAULT_WEBSITE_CHUNK_SIZE: usize = 2000;

/// Page text retrieval. An empty result means the page had no extractable text.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn get_content_chunks(&self, url: &str) -> Result<Vec<String>, SourceError>;
}

/// Fetches a page and packs its paragraph text into bounded chunks.
pub struct WebsiteSource {
    http: reqwest::Client,
    chunk_size: usize,
}

impl WebsiteSource {
    pub fn new(chunk_size: usize) -> Result<Self, SourceError> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            chunk_size: chunk_size.max(1),
        })
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Chunks of a page that has already been downloaded.
    pub fn chunks_from_html(&self, html: &str) -> Vec<String> {
        let text = extract_paragraphs(html).join(" ");
        chunk_by_chars(&text, self.chunk_size)
    }
}

#[async_trait]
impl PageSource for WebsiteSource {
    #[instrument(skip(self))]
    async fn get_content_chunks(&self, url: &str) -> Result<Vec<String>, SourceError> {
        let html = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let chunks = self.chunks_from_html(&html);
        info!(
            html_len = html.len(),
            chunk_count = chunks.len(),
            "Website content extracted"
        );
        Ok(chunks)
    }
}
