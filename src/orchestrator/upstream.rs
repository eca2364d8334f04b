//! Interface to the hosted model API, implemented outside this crate.

use crate::error::UpstreamError;
use crate::models::{Message, PlotData, Role};

/// One prior conversation turn sent upstream. Text only; blobs never travel upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub role: Role,
    pub text: String,
}

impl From<&Message> for Turn {
    fn from(message: &Message) -> Self {
        Self { role: message.role(), text: message.content().to_string() }
    }
}

/// Lazily streamed text fragments from the upstream client.
pub type FragmentStream = Box<dyn Iterator<Item = Result<String, UpstreamError>>>;

/// What the upstream client returns for one request.
pub enum UpstreamReply {
    /// Text fragments yielded as they arrive on the calling thread.
    Stream(FragmentStream),
    /// A fully formed reply, carrying any plot images generated by code execution.
    Complete { text: String, plots: Vec<PlotData> },
}

/// Blocking client for the hosted model API.
///
/// Receives the new prompt, the prior turns (role + text only), and an optional
/// attachment. Calls have no timeout at this layer; a hung upstream call hangs the
/// request, and cancellation is not supported.
pub trait UpstreamClient {
    fn request(
        &mut self,
        prompt: &str,
        turns: &[Turn],
        attachment: Option<&[u8]>,
    ) -> Result<UpstreamReply, UpstreamError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_from_message_drops_blobs() {
        let message = Message::user("look").with_image(vec![1, 2, 3]);
        let turn = Turn::from(&message);
        assert_eq!(turn.role, Role::User);
        assert_eq!(turn.text, "look");
        // Turn has no blob fields at all; this is the whole point.
    }
}
