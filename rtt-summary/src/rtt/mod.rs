//! Realtime Trains (RTT) API layer.
//!
//! Wraps the RTT JSON API: route lookups between two stations, station
//! metadata lookups, and per-service detail fetches. Responses are parsed
//! into domain types before leaving this module.

pub mod client;
pub mod convert;
pub mod error;
pub mod mock;
pub mod types;

pub use client::{RttClient, RttConfig};
pub use error::RttError;
pub use mock::MockTimetableClient;

use chrono::NaiveDate;

use crate::domain::{Crs, LocationBoard, Service, ServiceUid, StationRef};

/// The upstream timetable API, as used by the summary formatter.
///
/// `RttClient` is the live implementation; `MockTimetableClient` serves
/// canned data for tests. The formatter is generic over this trait, so
/// nothing above this layer knows whether it is talking to the network.
#[allow(async_fn_in_trait)]
pub trait TimetableClient {
    /// Look up services running from `origin` towards `destination`.
    async fn search_between(
        &self,
        origin: Crs,
        destination: Crs,
    ) -> Result<LocationBoard, RttError>;

    /// Look up a station's display metadata by CRS code.
    async fn location_info(&self, crs: Crs) -> Result<StationRef, RttError>;

    /// Fetch the full stop sequence for a service on a given run date.
    async fn service_details(
        &self,
        uid: &ServiceUid,
        run_date: NaiveDate,
    ) -> Result<Service, RttError>;
}
