//! JSON-file session persistence
//!
//! One file per session, named `<session_id>.json` inside a fixed sessions directory.
//! Session ids are derived from the creation time at microsecond resolution
//! (`YYYYMMDD_HHMMSS_microseconds`), so listing files and sorting records by
//! `created_at` both put the newest session first.
//!
//! Every save rewrites the whole file; there is no partial-file update. Stale files
//! (older than the configured retention window, by modification time) are swept out
//! during initialization.

pub mod record;
pub mod session_store;

pub use record::{MessageRecord, SessionRecord, SessionSummary};
pub use session_store::SessionStore;
