//! Data models for chat conversations.
//!
//! - [`Message`] - one conversation turn: role, text, timestamp, optional image blobs
//! - [`Role`] - user or assistant (the upstream `"model"` alias maps to assistant)
//! - [`PlotData`] - opaque plot image extracted from an upstream reply
//! - [`DataTable`] - non-empty tabular data handed in by the presentation layer
//!
//! Binary blobs (`plots`, `image`) are carried as raw bytes in memory; their base64
//! on-disk form lives in the `store` module's record types.

pub mod message;
pub mod plot;
pub mod table;

pub use message::{Message, Role, TIMESTAMP_FORMAT};
pub use plot::{PLOT_MIME_TYPES, PlotData};
pub use table::DataTable;
