//! Route lookup results.

use chrono::NaiveDate;

use super::{ServiceUid, StationRef};

/// A handle to a service found by a route lookup.
///
/// The (UID, run date) pair is the key for a service detail fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceHandle {
    /// RTT service UID
    pub uid: ServiceUid,
    /// The date this service runs
    pub run_date: NaiveDate,
}

/// Result of a route lookup between two stations.
///
/// Services are kept in the order the upstream returned them; that order
/// is trusted and never re-sorted.
#[derive(Debug, Clone)]
pub struct LocationBoard {
    /// The station the lookup was made from, with its display name
    pub station: StationRef,
    /// Services running from this station, upstream order
    pub services: Vec<ServiceHandle>,
}
