//! On-disk record types for session files.
//!
//! One session file is a single pretty-printed JSON object:
//!
//! ```json
//! {
//!   "session_id": "20240102_000000_000000",
//!   "created_at": "2024-01-02T00:00:00Z",
//!   "message_count": 2,
//!   "messages": [
//!     { "role": "user", "content": "hi", "timestamp": "2024-01-02 00:00:00", "plots": [] },
//!     { "role": "assistant", "content": "hello", "timestamp": "2024-01-02 00:00:01", "plots": [] }
//!   ]
//! }
//! ```
//!
//! Binary blob fields (`plots`, `image`) are base64 text in JSON and raw bytes in
//! memory; missing blob fields decode to "no blob", never to an error. Missing `role`
//! or `content` makes the record malformed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Message, Role};

/// On-disk form of one [`Message`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageRecord {
    pub role: Role,
    pub content: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default, with = "blob_list")]
    pub plots: Vec<Vec<u8>>,
    #[serde(default, with = "blob_opt", skip_serializing_if = "Option::is_none")]
    pub image: Option<Vec<u8>>,
}

impl From<&Message> for MessageRecord {
    fn from(message: &Message) -> Self {
        Self {
            role: message.role(),
            content: message.content().to_string(),
            timestamp: message.timestamp().to_string(),
            plots: message.plots().to_vec(),
            image: message.image().map(<[u8]>::to_vec),
        }
    }
}

impl From<MessageRecord> for Message {
    fn from(record: MessageRecord) -> Self {
        Message::from_parts(
            record.role,
            record.content,
            record.timestamp,
            record.plots,
            record.image,
        )
    }
}

/// Whole-file session record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub session_id: String,
    pub created_at: DateTime<Utc>,
    pub message_count: usize,
    pub messages: Vec<MessageRecord>,
}

impl SessionRecord {
    /// Snapshot the given messages under `session_id`, stamped with the current time.
    pub fn new(session_id: &str, messages: &[Message]) -> Self {
        Self {
            session_id: session_id.to_string(),
            created_at: Utc::now(),
            message_count: messages.len(),
            messages: messages.iter().map(MessageRecord::from).collect(),
        }
    }

    pub fn into_messages(self) -> Vec<Message> {
        self.messages.into_iter().map(Message::from).collect()
    }
}

/// Listing entry for one persisted session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub session_id: String,
    pub created_at: DateTime<Utc>,
    pub message_count: usize,
}

/// Base64 (de)serialization for a list of binary blobs.
mod blob_list {
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(plots: &[Vec<u8>], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(plots.iter().map(|plot| BASE64_STANDARD.encode(plot)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<Vec<u8>>, D::Error> {
        let encoded = Vec::<String>::deserialize(deserializer)?;
        encoded
            .iter()
            .map(|blob| BASE64_STANDARD.decode(blob).map_err(serde::de::Error::custom))
            .collect()
    }
}

/// Base64 (de)serialization for an optional binary blob.
mod blob_opt {
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        image: &Option<Vec<u8>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match image {
            Some(bytes) => serializer.serialize_some(&BASE64_STANDARD.encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Vec<u8>>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(encoded) => {
                BASE64_STANDARD.decode(encoded).map(Some).map_err(serde::de::Error::custom)
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blobs_round_trip_through_base64() {
        let message = Message::assistant("chart attached").with_plots(vec![vec![0, 159, 146, 150]]);
        let record = MessageRecord::from(&message);

        let json = serde_json::to_string(&record).unwrap();
        // raw bytes never appear in the JSON, only base64 text
        assert!(json.contains(r#""plots":["AJ+Slg==""#));

        let restored: MessageRecord = serde_json::from_str(&json).unwrap();
        let restored = Message::from(restored);
        assert_eq!(restored.plots(), message.plots());
        assert_eq!(restored.content(), message.content());
    }

    #[test]
    fn test_image_serializes_as_base64_and_back() {
        let message = Message::user("see attached").with_image(vec![255, 216, 255]);
        let record = MessageRecord::from(&message);
        let json = serde_json::to_string(&record).unwrap();

        let restored: MessageRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.image, Some(vec![255, 216, 255]));
    }

    #[test]
    fn test_absent_blob_fields_decode_to_no_blob() {
        let json = r#"{"role":"user","content":"hi"}"#;
        let record: MessageRecord = serde_json::from_str(json).unwrap();
        assert!(record.plots.is_empty());
        assert!(record.image.is_none());
        assert!(record.timestamp.is_empty());
    }

    #[test]
    fn test_missing_role_is_malformed() {
        let json = r#"{"content":"hi"}"#;
        assert!(serde_json::from_str::<MessageRecord>(json).is_err());
    }

    #[test]
    fn test_missing_content_is_malformed() {
        let json = r#"{"role":"assistant"}"#;
        assert!(serde_json::from_str::<MessageRecord>(json).is_err());
    }

    #[test]
    fn test_model_role_stored_as_assistant() {
        let json = r#"{"role":"model","content":"upstream format"}"#;
        let record: MessageRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.role, Role::Assistant);
        assert!(serde_json::to_string(&record).unwrap().contains(r#""role":"assistant""#));
    }

    #[test]
    fn test_session_record_counts_messages() {
        let messages = vec![Message::user("hi"), Message::assistant("hello")];
        let record = SessionRecord::new("s1", &messages);
        assert_eq!(record.message_count, 2);
        assert_eq!(record.session_id, "s1");

        let restored = record.into_messages();
        assert_eq!(restored.len(), 2);
        assert_eq!(restored[0].content(), "hi");
        assert_eq!(restored[1].content(), "hello");
    }
}
