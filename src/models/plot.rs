use serde::{Deserialize, Serialize};

/// MIME types accepted for plot images extracted from upstream replies.
pub const PLOT_MIME_TYPES: [&str; 4] = ["image/png", "image/jpeg", "image/webp", "image/svg+xml"];

/// An opaque plot image produced by upstream code execution.
///
/// The bytes are never interpreted by this core; validity is only "non-empty and a
/// recognized image MIME type".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotData {
    pub data: Vec<u8>,
    pub mime_type: String,
}

impl PlotData {
    pub fn new(data: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self { data, mime_type: mime_type.into() }
    }

    pub fn is_valid(&self) -> bool {
        !self.data.is_empty() && PLOT_MIME_TYPES.contains(&self.mime_type.as_str())
    }
}
