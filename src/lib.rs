//! Chatbot Core - session persistence and chat-history lifecycle for an LLM chat front-end
//!
//! This library provides the stateful core behind a web chat UI that talks to a hosted
//! large-language-model API. It supports:
//!
//! - Persisting conversations as timestamp-keyed JSON session files
//! - Resuming the most recent session on startup, or starting a fresh one
//! - Driving one request against a streaming upstream model client
//! - Prompt intent detection (plot requests) and rough token estimation
//!
//! The presentation layer (rendering, input) and the actual model client are external
//! collaborators: the first consumes [`HistoryManager`], the second implements
//! [`UpstreamClient`].
//!
//! # Example
//!
//! ```no_run
//! use chatbot_core::{HistoryManager, Message, SessionStore, StoreConfig};
//!
//! let store = SessionStore::new(StoreConfig::new("chat_sessions"));
//! let mut history = HistoryManager::initialize(store);
//! history.add_message(Message::user("What does this dataset contain?"));
//! println!("{} messages in session {}", history.message_count(), history.session_id());
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod history;
pub mod models;
pub mod orchestrator;
pub mod store;

// Re-export commonly used types
pub use analysis::{TokenEstimator, requires_plot};
pub use config::StoreConfig;
pub use error::{StoreError, UpstreamError};
pub use history::HistoryManager;
pub use models::{DataTable, Message, PlotData, Role};
pub use orchestrator::{ResponseOrchestrator, Turn, UpstreamClient, UpstreamReply};
pub use store::{SessionStore, SessionSummary};
