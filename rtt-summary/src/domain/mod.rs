//! Domain types for rail service summaries.
//!
//! These types represent validated rail data. Invariants are enforced at
//! construction time, so code that receives these types can trust them.

mod board;
mod operator;
mod service;
mod service_uid;
mod station;
mod time;

pub use board::{LocationBoard, ServiceHandle};
pub use operator::{AtocCode, InvalidAtocCode};
pub use service::{Service, Stop};
pub use service_uid::{InvalidServiceUid, ServiceUid};
pub use station::{Crs, InvalidCrs, StationRef};
pub use time::{RailTime, TimeError};
