//! Hand-written fakes shared by the router integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use content_sources::{
    extract_video_id, watch_url, PageSource, RegexUrlClassifier, SourceError,
    VideoTranscriptSource,
};
use llm_client::{ModelClient, ModelClientFactory, ModelError};
use memory::{InMemorySessionStore, MemoryConfig};
use prompt::{ChatMessage, SummaryPrompts};
use relay_router::{BindingRegistry, CommandRouter, ContentSources};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use storage::{CredentialMap, CredentialStore, StorageError};

pub const VALID_TOKEN: &str = "sk-valid";
pub const FAILING_TOKEN: &str = "sk-failing";

/// Model fake: replies `reply N` to the N-th chat call, or fails every call with `fail_with`.
pub struct MockModelClient {
    pub valid: bool,
    pub fail_with: Option<ModelError>,
    pub chat_calls: Mutex<Vec<Vec<ChatMessage>>>,
    pub image_prompts: Mutex<Vec<String>>,
    /// Path handed to transcription and whether the file existed at that moment.
    pub transcribed: Mutex<Vec<(PathBuf, bool)>>,
}

impl MockModelClient {
    pub fn new(valid: bool) -> Self {
        Self {
            valid,
            fail_with: None,
            chat_calls: Mutex::new(Vec::new()),
            image_prompts: Mutex::new(Vec::new()),
            transcribed: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(err: ModelError) -> Self {
        Self {
            fail_with: Some(err),
            ..Self::new(true)
        }
    }

    pub fn chat_call_count(&self) -> usize {
        self.chat_calls.lock().unwrap().len()
    }

    fn check(&self) -> Result<(), ModelError> {
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ModelClient for MockModelClient {
    async fn validate_token(&self) -> bool {
        self.valid
    }

    async fn chat_completion(&self, messages: &[ChatMessage]) -> Result<String, ModelError> {
        let mut calls = self.chat_calls.lock().unwrap();
        calls.push(messages.to_vec());
        let n = calls.len();
        drop(calls);
        self.check()?;
        Ok(format!("reply {}", n))
    }

    async fn image_generation(&self, prompt: &str) -> Result<String, ModelError> {
        self.image_prompts.lock().unwrap().push(prompt.to_string());
        self.check()?;
        Ok(format!("https://img.example/{}.png", prompt.replace(' ', "-")))
    }

    async fn audio_transcription(&self, audio_path: &Path) -> Result<String, ModelError> {
        self.transcribed
            .lock()
            .unwrap()
            .push((audio_path.to_path_buf(), audio_path.exists()));
        self.check()?;
        Ok("transcribed words".to_string())
    }
}

/// Hands out preset clients by token; unknown tokens get a client that fails validation.
#[derive(Default)]
pub struct MockFactory {
    presets: HashMap<String, Arc<MockModelClient>>,
}

impl MockFactory {
    pub fn with(mut self, token: &str, client: Arc<MockModelClient>) -> Self {
        self.presets.insert(token.to_string(), client);
        self
    }
}

impl ModelClientFactory for MockFactory {
    fn create(&self, token: &str) -> Arc<dyn ModelClient> {
        match self.presets.get(token) {
            Some(client) => client.clone() as Arc<dyn ModelClient>,
            None => Arc::new(MockModelClient::new(false)),
        }
    }
}

#[derive(Default)]
pub struct MemoryCredentialStore {
    pub saved: Mutex<CredentialMap>,
    pub fail_saves: bool,
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn load_all(&self) -> Result<CredentialMap, StorageError> {
        Ok(self.saved.lock().unwrap().clone())
    }

    async fn save_or_update(&self, user_id: &str, token: &str) -> Result<(), StorageError> {
        if self.fail_saves {
            return Err(StorageError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only",
            )));
        }
        self.saved
            .lock()
            .unwrap()
            .insert(user_id.to_string(), token.to_string());
        Ok(())
    }
}

pub struct FakeVideoSource {
    pub chunks: Vec<String>,
    pub calls: AtomicUsize,
    pub requested: Mutex<Vec<String>>,
    /// When set, every transcript request fails with `NoTranscript`.
    pub fail: AtomicBool,
}

#[async_trait]
impl VideoTranscriptSource for FakeVideoSource {
    fn find_video_url(&self, text: &str) -> Option<String> {
        extract_video_id(text).map(|id| watch_url(&id))
    }

    async fn get_transcript_chunks(&self, url: &str) -> Result<Vec<String>, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().unwrap().push(url.to_string());
        if self.fail.load(Ordering::SeqCst) {
            return Err(SourceError::NoTranscript(
                extract_video_id(url).unwrap_or_default(),
            ));
        }
        Ok(self.chunks.clone())
    }
}

pub struct FakePageSource {
    pub chunks: Vec<String>,
    pub calls: AtomicUsize,
}

#[async_trait]
impl PageSource for FakePageSource {
    async fn get_content_chunks(&self, _url: &str) -> Result<Vec<String>, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.chunks.clone())
    }
}

fn chunks(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// A router wired to fakes, with handles for inspection.
pub struct Harness {
    pub router: CommandRouter,
    pub sessions: Arc<InMemorySessionStore>,
    pub bindings: Arc<BindingRegistry>,
    pub credentials: Arc<MemoryCredentialStore>,
    pub videos: Arc<FakeVideoSource>,
    pub pages: Arc<FakePageSource>,
}

impl Harness {
    pub fn new(factory: MockFactory) -> Self {
        Self::build(factory, MemoryCredentialStore::default(), &["page part"])
    }

    pub fn with_page_chunks(factory: MockFactory, page_chunks: &[&str]) -> Self {
        Self::build(factory, MemoryCredentialStore::default(), page_chunks)
    }

    pub fn with_credentials(factory: MockFactory, credentials: MemoryCredentialStore) -> Self {
        Self::build(factory, credentials, &["page part"])
    }

    fn build(factory: MockFactory, credentials: MemoryCredentialStore, page_chunks: &[&str]) -> Self {
        let sessions = Arc::new(InMemorySessionStore::new(MemoryConfig {
            system_message: "default system".to_string(),
            message_count: 2,
        }));
        let credentials = Arc::new(credentials);
        let bindings = Arc::new(BindingRegistry::new(Arc::new(factory), credentials.clone()));
        let videos = Arc::new(FakeVideoSource {
            chunks: chunks(&["video part 1", "video part 2"]),
            calls: AtomicUsize::new(0),
            requested: Mutex::new(Vec::new()),
            fail: AtomicBool::new(false),
        });
        let pages = Arc::new(FakePageSource {
            chunks: chunks(page_chunks),
            calls: AtomicUsize::new(0),
        });
        let router = CommandRouter::new(
            sessions.clone(),
            bindings.clone(),
            ContentSources {
                urls: Arc::new(RegexUrlClassifier),
                videos: videos.clone(),
                pages: pages.clone(),
            },
            SummaryPrompts {
                video: "video prompt".to_string(),
                website: "website prompt".to_string(),
            },
        );
        Self {
            router,
            sessions,
            bindings,
            credentials,
            videos,
            pages,
        }
    }

    /// Harness where `user` is already registered with `client`.
    pub async fn registered(user: &str, client: Arc<MockModelClient>) -> Self {
        let harness = Self::new(MockFactory::default().with(VALID_TOKEN, client));
        harness.bindings.register(user, VALID_TOKEN).await.unwrap();
        harness
    }
}
