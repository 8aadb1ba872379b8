//! Command router: one inbound message in, exactly one [`Reply`] out.

use content_sources::{PageSource, UrlClassifier, VideoTranscriptSource};
use llm_client::ModelClient;
use memory::SessionStore;
use prompt::{MessageRole, SummaryKind, SummaryPrompts};
use relay_core::Reply;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use crate::summarize::fold_summarize;
use crate::temp_audio::TempAudioFile;
use crate::{BindingRegistry, Command, RouterError};

const MSG_REGISTERED: &str = "Token is valid, registration succeeded";
const MSG_CLEARED: &str = "Conversation history cleared";
const MSG_PERSONA_USAGE: &str = "Usage: /cosplay <persona>, e.g. /cosplay You are a concise summarizer";

pub const HELP_TEXT: &str = "Commands:
/register <API token>
  Get a token at https://platform.openai.com/ first

/cosplay <prompt>
  Make the bot play a role, e.g. /cosplay You are good at summarizing

/clear
  The last two exchanges are remembered; this clears the history

/image <prompt>
  Generate an image from text

Voice message
  Transcribed to text, then answered by ChatGPT

Any other text
  Answered by ChatGPT; links are summarized (YouTube videos via their transcript)";

/// The content resolvers the router consults for URL messages.
#[derive(Clone)]
pub struct ContentSources {
    pub urls: Arc<dyn UrlClassifier>,
    pub videos: Arc<dyn VideoTranscriptSource>,
    pub pages: Arc<dyn PageSource>,
}

pub struct CommandRouter {
    sessions: Arc<dyn SessionStore>,
    bindings: Arc<BindingRegistry>,
    sources: ContentSources,
    prompts: SummaryPrompts,
    audio_dir: PathBuf,
}

impl CommandRouter {
    pub fn new(
        sessions: Arc<dyn SessionStore>,
        bindings: Arc<BindingRegistry>,
        sources: ContentSources,
        prompts: SummaryPrompts,
    ) -> Self {
        Self {
            sessions,
            bindings,
            sources,
            prompts,
            audio_dir: std::env::temp_dir(),
        }
    }

    /// Directory for temporary audio files (default: the system temp dir).
    pub fn with_audio_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.audio_dir = dir.into();
        self
    }

    /// Routes a text message. Never fails: errors become their reply text.
    #[instrument(skip(self, text))]
    pub async fn handle_text(&self, user_id: &str, text: &str) -> Reply {
        let command = Command::parse(text);
        let uses_model = command.uses_model();
        info!(command = command.name(), "Routing message");

        match self.dispatch(user_id, command).await {
            Ok(reply) => reply,
            Err(err) => self.fail(user_id, err, uses_model).await,
        }
    }

    /// Routes a voice note: transcribe, then answer it like a chat message.
    #[instrument(skip(self, audio), fields(audio_len = audio.len()))]
    pub async fn handle_audio(&self, user_id: &str, audio: &[u8], extension: &str) -> Reply {
        match self.audio(user_id, audio, extension).await {
            Ok(reply) => reply,
            Err(err) => self.fail(user_id, err, true).await,
        }
    }

    async fn fail(&self, user_id: &str, err: RouterError, uses_model: bool) -> Reply {
        if uses_model && !err.is_precondition() {
            error!(user_id = %user_id, error = %err, "Request failed; discarding conversation");
            if let Err(e) = self.sessions.remove(user_id).await {
                warn!(user_id = %user_id, error = %e, "Failed to discard conversation");
            }
        } else {
            warn!(user_id = %user_id, error = %err, "Request rejected");
        }
        Reply::text(err.user_reply())
    }

    async fn dispatch(&self, user_id: &str, command: Command) -> Result<Reply, RouterError> {
        match command {
            Command::Register { token } => {
                self.bindings.register(user_id, &token).await?;
                Ok(Reply::text(MSG_REGISTERED))
            }
            Command::Help => Ok(Reply::text(HELP_TEXT)),
            Command::Persona(persona) => {
                if persona.is_empty() {
                    return Ok(Reply::text(MSG_PERSONA_USAGE));
                }
                self.sessions.change_system_message(user_id, &persona).await?;
                Ok(Reply::text(format!("{persona} has been set as the system message")))
            }
            Command::Clear => {
                self.sessions.remove(user_id).await?;
                Ok(Reply::text(MSG_CLEARED))
            }
            Command::Image(prompt) => {
                let model = self.bound_model(user_id).await?;
                self.image(user_id, model.as_ref(), &prompt).await
            }
            Command::Content(text) => {
                let model = self.bound_model(user_id).await?;
                self.content(user_id, model.as_ref(), &text).await
            }
        }
    }

    async fn bound_model(&self, user_id: &str) -> Result<Arc<dyn ModelClient>, RouterError> {
        self.bindings
            .get(user_id)
            .await
            .ok_or(RouterError::MissingRegistration)
    }

    async fn image(
        &self,
        user_id: &str,
        model: &dyn ModelClient,
        prompt: &str,
    ) -> Result<Reply, RouterError> {
        self.sessions.append(user_id, MessageRole::User, prompt).await?;
        let url = model.image_generation(prompt).await?;
        self.sessions
            .append(user_id, MessageRole::Assistant, &url)
            .await?;
        Ok(Reply::Image { url })
    }

    async fn content(
        &self,
        user_id: &str,
        model: &dyn ModelClient,
        text: &str,
    ) -> Result<Reply, RouterError> {
        self.sessions.append(user_id, MessageRole::User, text).await?;

        // A video link anywhere in the text wins over any earlier generic link.
        let (url, kind, chunks) = if let Some(url) = self.sources.videos.find_video_url(text) {
            let chunks = self.sources.videos.get_transcript_chunks(&url).await?;
            (url, SummaryKind::Video, chunks)
        } else if let Some(url) = self.sources.urls.extract_url(text) {
            let chunks = self.sources.pages.get_content_chunks(&url).await?;
            (url, SummaryKind::Website, chunks)
        } else {
            let reply = self.chat(user_id, model).await?;
            return Ok(Reply::Text(reply));
        };
        info!(url = %url, kind = ?kind, chunk_count = chunks.len(), "Summarizing link");
        if chunks.is_empty() {
            return Err(RouterError::EmptyContent);
        }

        let summary = fold_summarize(model, self.prompts.for_kind(kind), &chunks).await?;
        self.sessions
            .append(user_id, MessageRole::Assistant, &summary)
            .await?;
        Ok(Reply::Text(summary))
    }

    /// Chat completion over the stored window; the reply is appended as the assistant entry.
    async fn chat(&self, user_id: &str, model: &dyn ModelClient) -> Result<String, RouterError> {
        let messages = self.sessions.get(user_id).await?;
        let reply = model.chat_completion(&messages).await?;
        self.sessions
            .append(user_id, MessageRole::Assistant, &reply)
            .await?;
        Ok(reply)
    }

    async fn audio(
        &self,
        user_id: &str,
        audio: &[u8],
        extension: &str,
    ) -> Result<Reply, RouterError> {
        let model = self.bound_model(user_id).await?;

        let transcript = {
            let file = TempAudioFile::write(&self.audio_dir, audio, extension).await?;
            model.audio_transcription(file.path()).await?
        };
        info!(transcript_len = transcript.len(), "Voice note transcribed");

        self.sessions
            .append(user_id, MessageRole::User, &transcript)
            .await?;
        let reply = self.chat(user_id, model.as_ref()).await?;
        Ok(Reply::Text(reply))
    }
}
