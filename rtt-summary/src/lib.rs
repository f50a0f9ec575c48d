//! Service summary formatter for the Realtime Trains API.
//!
//! Answers: "what are the next few trains from A to B, and how late are
//! they?" The result is a chat-ready title and body string, one line per
//! service with its live time, platform, operator and a link to RTT.

pub mod domain;
pub mod rtt;
pub mod summary;
