//! Service summary formatting.
//!
//! Turns resolved route and service data into the chat-ready summary:
//! a title naming the two stations and one body line per service with its
//! live time, lateness, platform and operator glyph.

pub mod formatter;
pub mod icons;
pub mod line;

pub use formatter::{FormattedSummary, Summarizer, ACCENT_COLOUR, MAX_SERVICES};
pub use icons::OperatorIcons;
pub use line::{LineError, Status};
