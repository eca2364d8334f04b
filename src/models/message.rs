use chrono::Local;
use serde::{Deserialize, Serialize};

/// Fixed display format for message timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Author of a conversation turn.
///
/// The upstream API calls the assistant role `"model"`; that spelling is accepted on
/// deserialization but never stored as a distinct role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    #[serde(alias = "model")]
    Assistant,
}

/// One turn in a conversation: text plus optional attached images.
///
/// Immutable once constructed; the timestamp is assigned exactly once, at construction,
/// so a message never acquires a different timestamp on repeated serializations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    role: Role,
    content: String,
    timestamp: String,
    plots: Vec<Vec<u8>>,
    image: Option<Vec<u8>>,
}

impl Message {
    /// Create a message timestamped now.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            plots: Vec::new(),
            image: None,
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    /// Attach a single uploaded image (user messages).
    pub fn with_image(mut self, image: Vec<u8>) -> Self {
        self.image = Some(image);
        self
    }

    /// Attach generated plot images (assistant messages).
    pub fn with_plots(mut self, plots: Vec<Vec<u8>>) -> Self {
        self.plots = plots;
        self
    }

    /// Reassemble a message from persisted parts. An empty timestamp (older records)
    /// is filled in with the current time.
    pub(crate) fn from_parts(
        role: Role,
        content: String,
        timestamp: String,
        plots: Vec<Vec<u8>>,
        image: Option<Vec<u8>>,
    ) -> Self {
        let timestamp = if timestamp.is_empty() {
            Local::now().format(TIMESTAMP_FORMAT).to_string()
        } else {
            timestamp
        };
        Self { role, content, timestamp, plots, image }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// `YYYY-MM-DD HH:MM:SS`, set at construction.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn plots(&self) -> &[Vec<u8>] {
        &self.plots
    }

    pub fn image(&self) -> Option<&[u8]> {
        self.image.as_deref()
    }
}
