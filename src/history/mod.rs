//! In-memory conversation state with resume-or-fresh startup.
//!
//! At most one session is active per process. On initialization the manager queries
//! the store for the newest persisted session and adopts it if it is non-empty;
//! otherwise it starts a fresh session. All storage faults are swallowed and logged
//! here — the chat flow stays usable even when the filesystem is unavailable.

pub mod manager;

pub use manager::HistoryManager;
