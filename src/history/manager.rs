use tracing::{info, warn};

use crate::models::Message;
use crate::store::SessionStore;

/// In-memory conversation state for the one active session of this process.
///
/// Owns the message sequence exclusively; every append is flushed to the store, but the
/// in-memory state remains the source of truth — a failed save costs durability for
/// that turn, never the turn itself. No storage fault escapes this type.
pub struct HistoryManager {
    store: SessionStore,
    session_id: String,
    messages: Vec<Message>,
}

impl HistoryManager {
    /// Resume the most recently persisted session, or start a fresh one.
    ///
    /// The newest listed session is adopted if it loads with at least one message;
    /// otherwise (empty store, empty session, corrupted file) a new session id is
    /// generated with an empty message sequence. Never fails: storage faults are
    /// logged and degrade to a fresh in-memory session.
    pub fn initialize(mut store: SessionStore) -> Self {
        if let Err(e) = store.initialize() {
            warn!(error = %e, "session store initialization failed, continuing without durability");
        }

        let newest = match store.list_sessions() {
            Ok(sessions) => sessions.into_iter().next(),
            Err(e) => {
                warn!(error = %e, "failed to list sessions");
                None
            }
        };

        if let Some(summary) = newest {
            match store.load(&summary.session_id) {
                Ok(Some(messages)) if !messages.is_empty() => {
                    info!(
                        session_id = %summary.session_id,
                        count = messages.len(),
                        "resumed previous session"
                    );
                    return Self { store, session_id: summary.session_id, messages };
                }
                Ok(_) => {}
                Err(e) => {
                    warn!(session_id = %summary.session_id, error = %e, "failed to load newest session");
                }
            }
        }

        let session_id = store.generate_session_id();
        info!(%session_id, "started fresh session");
        Self { store, session_id, messages: Vec::new() }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// The current in-memory sequence, in conversation order. Never performs I/O.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// The last `n` messages; `n` larger than the sequence returns the whole sequence.
    pub fn last_n_messages(&self, n: usize) -> &[Message] {
        &self.messages[self.messages.len().saturating_sub(n)..]
    }

    /// Append a message and flush the full sequence to the store.
    ///
    /// The append stands even when the save fails; the failure is logged, not
    /// propagated, and nothing is rolled back.
    pub fn add_message(&mut self, message: Message) {
        self.messages.push(message);
        if let Err(e) = self.store.save(&self.session_id, &self.messages) {
            warn!(session_id = %self.session_id, error = %e, "failed to persist session");
        }
    }

    /// Discard the conversation and begin a new empty session. Irreversible.
    ///
    /// The old session file is deleted best-effort; clearing an empty session is a
    /// no-op delete and still yields a usable new session.
    pub fn clear(&mut self) {
        match self.store.delete(&self.session_id) {
            Ok(true) => info!(session_id = %self.session_id, "cleared session"),
            Ok(false) => {}
            Err(e) => {
                warn!(session_id = %self.session_id, error = %e, "failed to delete session file");
            }
        }
        self.messages.clear();
        self.session_id = self.store.generate_session_id();
        info!(session_id = %self.session_id, "started new session");
    }
}
