//! Bounded per-user conversation window.

use prompt::{ChatMessage, MessageRole};
use std::collections::VecDeque;

/// One user's bounded conversation plus optional system override.
#[derive(Debug, Clone)]
pub struct ConversationWindow {
    entries: VecDeque<ChatMessage>,
    system_override: Option<String>,
    max_entries: usize,
}

impl ConversationWindow {
    /// Creates an empty window holding at most `2 × capacity_pairs` entries.
    pub fn new(capacity_pairs: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            system_override: None,
            max_entries: capacity_pairs.saturating_mul(2),
        }
    }

    /// Appends and evicts from the front until within capacity. Eviction ignores roles.
    pub fn push(&mut self, role: MessageRole, content: &str) {
        self.entries.push_back(ChatMessage {
            role,
            content: content.to_string(),
        });
        while self.entries.len() > self.max_entries {
            self.entries.pop_front();
        }
    }

    pub fn set_system_override(&mut self, text: &str) {
        self.system_override = Some(text.to_string());
    }

    pub fn system_override(&self) -> Option<&str> {
        self.system_override.as_deref()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// System entry (override, else `default_system`) followed by the entries.
    pub fn to_messages(&self, default_system: &str) -> Vec<ChatMessage> {
        let system = self.system_override.as_deref().unwrap_or(default_system);
        let mut out = Vec::with_capacity(self.entries.len() + 1);
        out.push(ChatMessage::system(system));
        out.extend(self.entries.iter().cloned());
        out
    }
}
