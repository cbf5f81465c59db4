//! Conversation export pipeline
//!
//! Transforms a recorded session log (timestamped events from the user and
//! multiple agents) into human-readable documents:
//!
//! - HTML: classified messages with three visual variants, printable to
//!   PDF from the browser
//! - PDF: raw per-event rendering with numbered entries and separators
//!
//! The whole pipeline is a deterministic batch transform: read one JSON
//! file, render, write one output file. No network, no shared state.

pub mod classify;
pub mod error;
pub mod html;
pub mod markdown;
pub mod pdf;
pub mod session;
pub mod timestamp;

// Re-export main types for convenience
pub use classify::{Message, MessageKind, classified_message_count, classify_event,
    format_agent_name};
pub use error::{ExportError, Result};
pub use html::render_session_html;
pub use markdown::{escape_html, markdown_to_html};
pub use pdf::render_session_pdf;
pub use session::{Content, Event, FunctionResponse, Part, Session};
pub use timestamp::parse_timestamp;
