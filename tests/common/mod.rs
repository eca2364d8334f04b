//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::Path;

use chatbot_core::config::StoreConfig;
use chatbot_core::store::SessionStore;
use tempfile::TempDir;

/// Builder for pre-populated sessions directories
pub struct SessionDirBuilder {
    temp_dir: TempDir,
}

impl SessionDirBuilder {
    /// Create a builder with an empty sessions directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the sessions directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a raw session file (content need not be valid JSON)
    pub fn with_raw_file(self, file_name: &str, content: &str) -> Self {
        fs::write(self.temp_dir.path().join(file_name), content)
            .expect("Failed to write session file");
        self
    }

    /// Write a well-formed session file with the given id, created_at, and
    /// (role, content) message pairs
    pub fn with_session(self, session_id: &str, created_at: &str, turns: &[(&str, &str)]) -> Self {
        let content = session_json(session_id, created_at, turns);
        self.with_raw_file(&format!("{session_id}.json"), &content)
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

/// Open a store rooted at `dir` with the default retention window
pub fn store_at(dir: &Path) -> SessionStore {
    SessionStore::new(StoreConfig::new(dir))
}

/// Render a valid session file body for the given turns
pub fn session_json(session_id: &str, created_at: &str, turns: &[(&str, &str)]) -> String {
    let messages = turns
        .iter()
        .map(|(role, content)| {
            format!(
                r#"{{"role":"{role}","content":"{content}","timestamp":"2024-01-01 00:00:00","plots":[]}}"#
            )
        })
        .collect::<Vec<_>>()
        .join(",");

    format!(
        r#"{{"session_id":"{session_id}","created_at":"{created_at}","message_count":{},"messages":[{messages}]}}"#,
        turns.len()
    )
}
