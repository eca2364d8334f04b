//! Timestamp-keyed JSON-file persistence for chat sessions.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use chrono::Local;
use tracing::{debug, info, warn};

use super::record::{SessionRecord, SessionSummary};
use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::models::Message;

const SESSION_FILE_EXT: &str = "json";
const SESSION_ID_FORMAT: &str = "%Y%m%d_%H%M%S_%6f";

/// Append-only session persistence: one whole-file JSON rewrite per save.
///
/// The store is the sole reader/writer of the sessions directory. It assumes a single
/// writer per session id; concurrent processes writing the same id race with
/// last-write-wins semantics and no locking.
pub struct SessionStore {
    sessions_dir: PathBuf,
    max_session_age_days: u32,
    last_session_id: Option<String>,
}

impl SessionStore {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            sessions_dir: config.sessions_dir,
            max_session_age_days: config.max_session_age_days,
            last_session_id: None,
        }
    }

    pub fn sessions_dir(&self) -> &Path {
        &self.sessions_dir
    }

    /// Ensure the sessions directory exists and sweep out stale sessions.
    /// Idempotent; safe to call more than once per process.
    pub fn initialize(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.sessions_dir)?;
        info!(dir = %self.sessions_dir.display(), "session store initialized");
        self.cleanup_stale(self.max_session_age_days);
        Ok(())
    }

    /// Generate a fresh session id from the current time at microsecond resolution.
    ///
    /// Spins until the formatted instant differs from the previously issued id, so
    /// rapid successive calls within the same process stay unique.
    pub fn generate_session_id(&mut self) -> String {
        loop {
            let id = Local::now().format(SESSION_ID_FORMAT).to_string();
            if self.last_session_id.as_deref() != Some(id.as_str()) {
                self.last_session_id = Some(id.clone());
                return id;
            }
        }
    }

    /// Serialize `messages` to `<session_id>.json`, overwriting any existing file.
    pub fn save(&self, session_id: &str, messages: &[Message]) -> Result<(), StoreError> {
        let record = SessionRecord::new(session_id, messages);
        let json = serde_json::to_string_pretty(&record)?;
        fs::write(self.session_path(session_id), json)?;
        info!(session_id, count = messages.len(), "session saved");
        Ok(())
    }

    /// Load the messages persisted for `session_id`.
    ///
    /// Returns `Ok(None)` when the file does not exist, and also when it exists but
    /// fails to parse: a corrupted session file must never crash startup, so it is
    /// logged and treated as absent. `Err` is reserved for read I/O faults.
    pub fn load(&self, session_id: &str) -> Result<Option<Vec<Message>>, StoreError> {
        let path = self.session_path(session_id);
        if !path.exists() {
            debug!(session_id, "session file not found");
            return Ok(None);
        }

        let raw = fs::read_to_string(&path)?;
        match serde_json::from_str::<SessionRecord>(&raw) {
            Ok(record) => {
                info!(session_id, count = record.message_count, "session loaded");
                Ok(Some(record.into_messages()))
            }
            Err(e) => {
                warn!(session_id, error = %e, "corrupted session file, treating as absent");
                Ok(None)
            }
        }
    }

    /// Remove the file for `session_id`. Returns whether a file was actually removed.
    pub fn delete(&self, session_id: &str) -> Result<bool, StoreError> {
        let path = self.session_path(session_id);
        if !path.exists() {
            debug!(session_id, "no session file to delete");
            return Ok(false);
        }
        fs::remove_file(&path)?;
        info!(session_id, "session deleted");
        Ok(true)
    }

    /// List all parseable sessions, sorted by `created_at` descending (newest first).
    ///
    /// The ordering is load-bearing: session resumption adopts the first entry.
    /// Files that fail to parse are skipped, not surfaced as errors.
    pub fn list_sessions(&self) -> Result<Vec<SessionSummary>, StoreError> {
        let mut sessions = Vec::new();
        if !self.sessions_dir.exists() {
            return Ok(sessions);
        }

        for entry in fs::read_dir(&self.sessions_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(SESSION_FILE_EXT) {
                continue;
            }

            let parsed = fs::read_to_string(&path)
                .map_err(StoreError::from)
                .and_then(|raw| {
                    serde_json::from_str::<SessionRecord>(&raw).map_err(StoreError::from)
                });
            match parsed {
                Ok(record) => sessions.push(SessionSummary {
                    session_id: record.session_id,
                    created_at: record.created_at,
                    message_count: record.message_count,
                }),
                Err(e) => {
                    debug!(path = %path.display(), error = %e, "skipping unreadable session file");
                }
            }
        }

        sessions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(sessions)
    }

    /// Delete every session file whose modification time is older than `max_age_days`.
    ///
    /// Best-effort: a failure on one file is logged and the sweep continues.
    /// Returns the number of files deleted.
    pub fn cleanup_stale(&self, max_age_days: u32) -> usize {
        let entries = match fs::read_dir(&self.sessions_dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!(error = %e, "sessions directory not readable, skipping cleanup");
                return 0;
            }
        };

        let cutoff = SystemTime::now() - Duration::from_secs(u64::from(max_age_days) * 86_400);
        let mut deleted = 0;

        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(SESSION_FILE_EXT) {
                continue;
            }

            let mtime = match entry.metadata().and_then(|meta| meta.modified()) {
                Ok(mtime) => mtime,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "cannot stat session file");
                    continue;
                }
            };

            if mtime < cutoff {
                match fs::remove_file(&path) {
                    Ok(()) => deleted += 1,
                    Err(e) => {
                        warn!(path = %path.display(), error = %e, "failed to delete stale session")
                    }
                }
            }
        }

        if deleted > 0 {
            info!(deleted, max_age_days, "removed stale sessions");
        }
        deleted
    }

    fn session_path(&self, session_id: &str) -> PathBuf {
        self.sessions_dir.join(format!("{session_id}.{SESSION_FILE_EXT}"))
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn store_in(dir: &TempDir) -> SessionStore {
        SessionStore::new(StoreConfig::new(dir.path()))
    }

    #[test]
    fn test_generate_session_id_is_unique_under_rapid_calls() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        let mut ids: Vec<String> = (0..1000).map(|_| store.generate_session_id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 1000, "rapid session ids must not collide");
    }

    #[test]
    fn test_load_missing_session_is_absent_not_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.initialize().unwrap();

        assert!(store.load("20240101_000000_000000").unwrap().is_none());
    }

    #[test]
    fn test_delete_reports_whether_file_existed() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.initialize().unwrap();

        store.save("s1", &[Message::user("hi")]).unwrap();
        assert!(store.delete("s1").unwrap());
        assert!(!store.delete("s1").unwrap());
    }

    #[test]
    fn test_corrupt_session_file_loads_as_absent() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.initialize().unwrap();

        fs::write(dir.path().join("broken.json"), "{not json at all").unwrap();
        assert!(store.load("broken").unwrap().is_none());
    }

    #[test]
    fn test_empty_message_sequence_is_representable() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.initialize().unwrap();

        store.save("empty", &[]).unwrap();
        let loaded = store.load("empty").unwrap().unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.initialize().unwrap();
        store.initialize().unwrap();
    }

    #[test]
    fn test_cleanup_retains_files_within_window() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.initialize().unwrap();

        store.save("recent", &[Message::user("hi")]).unwrap();
        assert_eq!(store.cleanup_stale(7), 0);
        assert!(store.load("recent").unwrap().is_some());
    }

    #[test]
    fn test_cleanup_removes_files_older_than_window() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.initialize().unwrap();

        store.save("old", &[Message::user("hi")]).unwrap();
        // A zero-day window makes any already-written file stale.
        std::thread::sleep(Duration::from_millis(50));
        assert_eq!(store.cleanup_stale(0), 1);
        assert!(store.load("old").unwrap().is_none());
    }

    #[test]
    fn test_cleanup_skips_non_session_files() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.initialize().unwrap();

        fs::write(dir.path().join("notes.txt"), "keep me").unwrap();
        std::thread::sleep(Duration::from_millis(50));
        assert_eq!(store.cleanup_stale(0), 0);
        assert!(dir.path().join("notes.txt").exists());
    }
}
