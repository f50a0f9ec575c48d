//! RTT API response DTOs.
//!
//! These types map directly to the RTT JSON API responses. They use
//! `Option` liberally because RTT omits fields rather than sending nulls:
//! origin stops have no arrival, and realtime fields only appear once
//! live data exists for a service.

use serde::Deserialize;

/// Response from `search/{station}` or `search/{from}/to/{to}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// The station the search was made from.
    pub location: LocationDetail,

    /// Matching services. RTT sends null when there are none.
    pub services: Option<Vec<ServiceItem>>,
}

/// Station metadata embedded in a search response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationDetail {
    /// Human-readable station name.
    pub name: String,

    /// CRS code of the station.
    pub crs: String,
}

/// One service in a search response.
///
/// Only the fields needed to key a detail fetch are kept; the embedded
/// `locationDetail` summary is ignored because the detail fetch supersedes it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceItem {
    /// RTT service UID.
    pub service_uid: String,

    /// The date this service runs, "YYYY-MM-DD".
    pub run_date: String,

    /// Train operating company ATOC code.
    pub atoc_code: Option<String>,
}

/// Response from `service/{uid}/{yyyy}/{mm}/{dd}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResponse {
    /// RTT service UID.
    pub service_uid: String,

    /// The date this service runs, "YYYY-MM-DD".
    pub run_date: String,

    /// Train operating company ATOC code.
    pub atoc_code: Option<String>,

    /// All calling points, in calling order.
    pub locations: Vec<ServiceLocation>,
}

/// A single calling point in a service detail response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceLocation {
    /// CRS code. Absent for non-passenger locations (junctions, sidings).
    pub crs: Option<String>,

    /// Human-readable location name.
    pub description: Option<String>,

    /// Timetabled arrival, "HHMM". Absent at the origin.
    pub gbtt_booked_arrival: Option<String>,

    /// Timetabled departure, "HHMM". Absent at the destination.
    pub gbtt_booked_departure: Option<String>,

    /// Live arrival, "HHMM", when realtime data exists.
    pub realtime_arrival: Option<String>,

    /// Live departure, "HHMM", when realtime data exists.
    pub realtime_departure: Option<String>,

    /// Platform number/letter, when known.
    pub platform: Option<String>,
}
