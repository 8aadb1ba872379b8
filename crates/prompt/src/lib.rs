//! # Prompt
//!
//! Conversation entries exchanged with chat models, and the prompts used when folding a
//! document (web page or video transcript) into a summary.
//!
//! ## Summarization fold
//!
//! Chunks are summarized strictly in order. Each step sends the summarization system prompt and one
//! user message holding the running summary (if any) followed by the next chunk; the reply becomes
//! the new running summary. See [`fold_step_messages`].

use serde::{Deserialize, Serialize};

/// Role of a message, one-to-one with OpenAI Chat Completions API `role` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// System instruction (API `role: "system"`).
    System,
    /// User message (API `role: "user"`).
    User,
    /// Assistant message (API `role: "assistant"`).
    Assistant,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::System => "system",
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

/// A single chat message, one-to-one with one element of OpenAI `messages` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// Default system instruction when neither configuration nor a persona override provides one.
pub const DEFAULT_SYSTEM_MESSAGE: &str = "You are a helpful assistant.";

/// System prompt for summarizing video transcripts.
pub const DEFAULT_VIDEO_SUMMARY_PROMPT: &str = "You are very good at organizing, summarizing and \
consolidating information, you pay attention to details and can point out key viewpoints. The user \
sends a video transcript in parts. Summarize what the video is about, keep its key points in \
order, and answer in the language of the transcript.";

/// System prompt for summarizing web pages.
pub const DEFAULT_WEBSITE_SUMMARY_PROMPT: &str = "You are very good at organizing, summarizing and \
consolidating information. The user sends the text of a web page in parts. Summarize the article, \
keep its key points in order, and answer in the language of the article.";

/// Header placed before the running summary in a fold step.
pub const SECTION_PREVIOUS_SUMMARY: &str = "Summary so far:";

/// Header placed before the chunk in a fold step.
pub const SECTION_NEXT_PART: &str = "Next part:";

/// Which summarization prompt a source uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryKind {
    Video,
    Website,
}

/// Summarization system prompts; defaults can be overridden from configuration.
#[derive(Debug, Clone)]
pub struct SummaryPrompts {
    pub video: String,
    pub website: String,
}

impl Default for SummaryPrompts {
    fn default() -> Self {
        Self {
            video: DEFAULT_VIDEO_SUMMARY_PROMPT.to_string(),
            website: DEFAULT_WEBSITE_SUMMARY_PROMPT.to_string(),
        }
    }
}

impl SummaryPrompts {
    pub fn for_kind(&self, kind: SummaryKind) -> &str {
        match kind {
            SummaryKind::Video => &self.video,
            SummaryKind::Website => &self.website,
        }
    }
}

/// Builds the messages for one fold step.
///
/// The first step (no running summary) sends the chunk alone; later steps prepend the running
/// summary under [`SECTION_PREVIOUS_SUMMARY`] and the chunk under [`SECTION_NEXT_PART`], with the
/// part position (`index` is zero-based).
pub fn fold_step_messages(
    system_prompt: &str,
    previous_summary: Option<&str>,
    chunk: &str,
    index: usize,
    total: usize,
) -> Vec<ChatMessage> {
    let mut body = String::new();
    if let Some(summary) = previous_summary {
        body.push_str(SECTION_PREVIOUS_SUMMARY);
        body.push('\n');
        body.push_str(summary);
        body.push_str("\n\n");
        body.push_str(SECTION_NEXT_PART);
        body.push('\n');
    }
    if total > 1 {
        body.push_str(&format!("[Part {}/{}]\n", index + 1, total));
    }
    body.push_str(chunk);

    vec![ChatMessage::system(system_prompt), ChatMessage::user(body)]
}
