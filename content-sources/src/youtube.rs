//! YouTube transcript source.
//!
//! Captions are read from the `captionTracks` array embedded in the watch page; the preferred
//! track's timed-text XML is fetched and its `<text>` segments grouped into a bounded number of
//! contiguous chunks.

use async_trait::async_trait;
use regex::Regex;
use serde::Deserialize;
use std::sync::OnceLock;
use tracing::{info, instrument, warn};

use crate::chunk::group_segments;
use crate::html::decode_entities;
use crate::{SourceError, USER_AGENT};

/// Default upper bound on transcript chunks per video.
pub const DEFAULT_YOUTUBE_CHUNK_COUNT: usize = 4;

/// Caption languages tried in order before falling back to the first listed track.
const PREFERRED_LANGUAGES: &[&str] = &["zh-TW", "zh", "zh-Hant", "zh-Hans", "ja", "ko", "en"];

const CAPTION_TRACKS_KEY: &str = "\"captionTracks\":";

/// Video transcript retrieval.
#[async_trait]
pub trait VideoTranscriptSource: Send + Sync {
    /// First video link anywhere in `text`, as a canonical URL.
    fn find_video_url(&self, text: &str) -> Option<String>;

    /// Transcript of the video as ordered text chunks.
    async fn get_transcript_chunks(&self, url: &str) -> Result<Vec<String>, SourceError>;
}

fn video_id_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?:youtube\.com/(?:watch\?(?:[^#\s]*&)?v=|shorts/|embed/|live/)|youtu\.be/)([A-Za-z0-9_-]{11})",
        )
        .expect("valid video id regex")
    })
}

fn caption_text_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<text\b[^>]*>(.*?)</text>").expect("valid caption regex"))
}

/// Eleven-character video id of the first YouTube watch / short / embed / live / youtu.be link
/// in `text`.
pub fn extract_video_id(text: &str) -> Option<String> {
    video_id_regex()
        .captures(text)
        .map(|caps| caps[1].to_string())
}

pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={video_id}")
}

#[derive(Debug, Clone, Deserialize)]
struct CaptionTrack {
    #[serde(rename = "baseUrl")]
    base_url: String,
    #[serde(rename = "languageCode", default)]
    language_code: String,
}

/// Parses the caption track list out of a watch page.
fn parse_caption_tracks(page: &str) -> Result<Vec<CaptionTrack>, SourceError> {
    let Some(start) = page.find(CAPTION_TRACKS_KEY) else {
        return Ok(Vec::new());
    };
    let rest = &page[start + CAPTION_TRACKS_KEY.len()..];
    serde_json::Deserializer::from_str(rest)
        .into_iter::<Vec<CaptionTrack>>()
        .next()
        .unwrap_or_else(|| Ok(Vec::new()))
        .map_err(|e| SourceError::Parse(format!("captionTracks: {e}")))
}

fn pick_track(tracks: &[CaptionTrack]) -> Option<&CaptionTrack> {
    PREFERRED_LANGUAGES
        .iter()
        .find_map(|lang| tracks.iter().find(|t| t.language_code == *lang))
        .or_else(|| tracks.first())
}

/// Ordered caption segments from timed-text XML. Entities are decoded twice because YouTube
/// double-escapes apostrophes (`&amp;#39;`).
fn parse_caption_segments(xml: &str) -> Vec<String> {
    caption_text_regex()
        .captures_iter(xml)
        .map(|caps| decode_entities(&decode_entities(&caps[1])))
        .map(|s| s.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|s| !s.is_empty())
        .collect()
}

pub struct YoutubeTranscriptSource {
    http: reqwest::Client,
    max_chunks: usize,
}

impl YoutubeTranscriptSource {
    pub fn new(max_chunks: usize) -> Result<Self, SourceError> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            max_chunks: max_chunks.max(1),
        })
    }

    pub fn max_chunks(&self) -> usize {
        self.max_chunks
    }

    async fn fetch_text(&self, url: &str) -> Result<String, SourceError> {
        Ok(self
            .http
            .get(url)
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?)
    }
}

#[async_trait]
impl VideoTranscriptSource for YoutubeTranscriptSource {
    fn find_video_url(&self, text: &str) -> Option<String> {
        extract_video_id(text).map(|id| watch_url(&id))
    }

    #[instrument(skip(self))]
    async fn get_transcript_chunks(&self, url: &str) -> Result<Vec<String>, SourceError> {
        let video_id = extract_video_id(url).ok_or_else(|| SourceError::NotVideo(url.to_string()))?;

        let page = self
            .fetch_text(&watch_url(&video_id))
            .await?;
        let tracks = parse_caption_tracks(&page)?;
        let Some(track) = pick_track(&tracks) else {
            warn!(video_id = %video_id, "No caption tracks on watch page");
            return Err(SourceError::NoTranscript(video_id));
        };

        let xml = self.fetch_text(&track.base_url).await?;
        let segments = parse_caption_segments(&xml);
        if segments.is_empty() {
            return Err(SourceError::NoTranscript(video_id));
        }

        let chunks = group_segments(&segments, self.max_chunks);
        info!(
            video_id = %video_id,
            language = %track.language_code,
            segment_count = segments.len(),
            chunk_count = chunks.len(),
            "Transcript retrieved"
        );
        Ok(chunks)
    }
}
