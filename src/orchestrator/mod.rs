//! Drives one request/response cycle against the upstream model client.
//!
//! One user submission triggers one synchronous cycle: append the user message, send
//! prompt plus prior turns upstream, surface streamed fragments to the caller as they
//! arrive, and commit the assistant's full reply to history only after the stream is
//! exhausted. An upstream failure is converted into a normal assistant error turn so
//! the conversation record reflects that the call failed; no fault here is fatal.

pub mod upstream;

pub use upstream::{FragmentStream, Turn, UpstreamClient, UpstreamReply};

use tracing::{debug, warn};

use crate::error::UpstreamError;
use crate::history::HistoryManager;
use crate::models::Message;

/// Render an upstream failure into the assistant's user-visible error text.
pub fn format_upstream_error(error: &UpstreamError) -> String {
    format!("Error: {error}\n\nPlease check your API configuration and try again.")
}

/// Orchestrates one turn: prompt in, assistant message appended to history.
pub struct ResponseOrchestrator<C: UpstreamClient> {
    client: C,
}

impl<C: UpstreamClient> ResponseOrchestrator<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Give the client back, e.g. to rebuild the orchestrator with new settings.
    pub fn into_inner(self) -> C {
        self.client
    }

    /// Handle one user submission end to end.
    ///
    /// Appends the user message (with its optional image) to `history`, sends the
    /// prompt and prior turns upstream, and invokes `on_fragment` for each piece of
    /// text as it arrives. The assistant's message — full text plus any valid plot
    /// blobs — is appended once the reply is complete. On upstream failure the error
    /// text is emitted and recorded as the assistant's turn instead.
    ///
    /// Returns the final assistant text.
    pub fn handle_prompt(
        &mut self,
        history: &mut HistoryManager,
        prompt: &str,
        image: Option<Vec<u8>>,
        mut on_fragment: impl FnMut(&str),
    ) -> String {
        // Prior turns exclude the prompt being handled; blobs stay local.
        let turns: Vec<Turn> = history.messages().iter().map(Turn::from).collect();

        let mut user_message = Message::user(prompt);
        if let Some(image) = &image {
            user_message = user_message.with_image(image.clone());
        }
        history.add_message(user_message);

        let result = self.request(prompt, &turns, image.as_deref(), &mut on_fragment);
        let (text, plots) = match result {
            Ok(reply) => reply,
            Err(e) => {
                warn!(error = %e, "upstream request failed");
                let text = format_upstream_error(&e);
                on_fragment(&text);
                (text, Vec::new())
            }
        };

        let mut assistant_message = Message::assistant(text.clone());
        if !plots.is_empty() {
            assistant_message = assistant_message.with_plots(plots);
        }
        history.add_message(assistant_message);

        text
    }

    fn request(
        &mut self,
        prompt: &str,
        turns: &[Turn],
        attachment: Option<&[u8]>,
        on_fragment: &mut impl FnMut(&str),
    ) -> Result<(String, Vec<Vec<u8>>), UpstreamError> {
        match self.client.request(prompt, turns, attachment)? {
            UpstreamReply::Stream(fragments) => {
                let mut full_text = String::new();
                for fragment in fragments {
                    let fragment = fragment?;
                    on_fragment(&fragment);
                    full_text.push_str(&fragment);
                }
                Ok((full_text, Vec::new()))
            }
            UpstreamReply::Complete { text, plots } => {
                on_fragment(&text);
                let total = plots.len();
                let blobs: Vec<Vec<u8>> =
                    plots.into_iter().filter(|plot| plot.is_valid()).map(|plot| plot.data).collect();
                if blobs.len() < total {
                    debug!(discarded = total - blobs.len(), "discarded invalid plot data");
                }
                Ok((text, blobs))
            }
        }
    }
}
