//! Session memory configuration.

use prompt::DEFAULT_SYSTEM_MESSAGE;

/// Default window capacity in role-pairs.
pub const DEFAULT_MEMORY_MESSAGE_COUNT: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryConfig {
    /// System message used when a user has no override.
    pub system_message: String,
    /// Capacity in user/assistant pairs; the window holds at most twice this many entries.
    pub message_count: usize,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            system_message: DEFAULT_SYSTEM_MESSAGE.to_string(),
            message_count: DEFAULT_MEMORY_MESSAGE_COUNT,
        }
    }
}
