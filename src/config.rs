//! Runtime configuration for the session store and analysis heuristics.
//!
//! The retention window and the token heuristic are rough, undocumented constants in
//! spirit; they are exposed here as configurable parameters with the historical
//! defaults rather than hard-coded literals.

use std::path::PathBuf;

/// Maximum age of a persisted session before it is eligible for cleanup.
pub const DEFAULT_MAX_SESSION_AGE_DAYS: u32 = 7;

/// Rough characters-per-token ratio used by [`crate::TokenEstimator`].
pub const DEFAULT_CHARS_PER_TOKEN: usize = 4;

/// Default row cap when rendering a table into model context.
pub const DEFAULT_MAX_CONTEXT_ROWS: usize = 1000;

/// Configuration for a [`crate::SessionStore`].
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding one `<session_id>.json` file per session.
    pub sessions_dir: PathBuf,
    /// Sessions whose file modification time is older than this are deleted
    /// during store initialization.
    pub max_session_age_days: u32,
}

impl StoreConfig {
    /// Create a config with the given sessions directory and the default retention window.
    pub fn new(sessions_dir: impl Into<PathBuf>) -> Self {
        Self { sessions_dir: sessions_dir.into(), max_session_age_days: DEFAULT_MAX_SESSION_AGE_DAYS }
    }

    /// Override the retention window.
    pub fn with_max_session_age_days(mut self, days: u32) -> Self {
        self.max_session_age_days = days;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(default_sessions_dir())
    }
}

/// Platform-specific default sessions directory
/// - macOS: `~/Library/Application Support/chatbot-core/chat_sessions/`
/// - Linux: `~/.local/share/chatbot-core/chat_sessions/`
/// - Windows: `%LOCALAPPDATA%\chatbot-core\chat_sessions\`
///
/// Falls back to a relative `chat_sessions/` when no platform directory is available.
pub fn default_sessions_dir() -> PathBuf {
    match dirs::data_local_dir() {
        Some(base) => base.join("chatbot-core").join("chat_sessions"),
        None => PathBuf::from("chat_sessions"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_retention() {
        let config = StoreConfig::new("/tmp/sessions");
        assert_eq!(config.max_session_age_days, DEFAULT_MAX_SESSION_AGE_DAYS);
        assert_eq!(config.sessions_dir, PathBuf::from("/tmp/sessions"));
    }

    #[test]
    fn test_retention_override() {
        let config = StoreConfig::new("/tmp/sessions").with_max_session_age_days(30);
        assert_eq!(config.max_session_age_days, 30);
    }

    #[test]
    fn test_default_sessions_dir_ends_with_chat_sessions() {
        let dir = default_sessions_dir();
        assert!(dir.ends_with("chat_sessions") || dir.to_string_lossy().contains("chat_sessions"));
    }
}
