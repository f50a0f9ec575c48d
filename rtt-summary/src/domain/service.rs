//! Train service and stop types.
//!
//! A `Service` is a full train journey with its ordered stop sequence, as
//! returned by a service detail fetch. A `Stop` is one calling point with
//! booked and realtime timing data, any of which may be absent: an origin
//! stop has no arrival, and realtime data only exists when RTT has it.

use chrono::NaiveDate;

use super::{AtocCode, Crs, RailTime, ServiceUid};

/// A complete train service with its full stop sequence.
#[derive(Debug, Clone)]
pub struct Service {
    /// RTT service UID
    pub uid: ServiceUid,
    /// The date this service runs
    pub run_date: NaiveDate,
    /// Operating company code, if RTT reported a recognisable one
    pub operator: Option<AtocCode>,
    /// All stops in calling order
    pub stops: Vec<Stop>,
}

impl Service {
    /// Find the stop at the given station, if this service calls there.
    ///
    /// Case differences are already normalised away by `Crs`, so the match
    /// is effectively case-insensitive.
    pub fn stop_at(&self, crs: Crs) -> Option<&Stop> {
        self.stops.iter().find(|stop| stop.crs == crs)
    }
}

/// A single calling point of a service.
#[derive(Debug, Clone)]
pub struct Stop {
    /// Station CRS code
    pub crs: Crs,
    /// Timetabled arrival (absent at the service's origin)
    pub booked_arrival: Option<RailTime>,
    /// Timetabled departure (absent at the service's destination)
    pub booked_departure: Option<RailTime>,
    /// Live arrival time, when RTT has realtime data
    pub realtime_arrival: Option<RailTime>,
    /// Live departure time, when RTT has realtime data
    pub realtime_departure: Option<RailTime>,
    /// Platform, when known
    pub platform: Option<String>,
}

impl Stop {
    /// The booked time to measure this stop by: arrival when present,
    /// otherwise departure (origin stops only have a departure).
    pub fn booked_time(&self) -> Option<RailTime> {
        self.booked_arrival.or(self.booked_departure)
    }

    /// The realtime counterpart of [`Stop::booked_time`]: live arrival when
    /// present, otherwise live departure.
    pub fn realtime_time(&self) -> Option<RailTime> {
        self.realtime_arrival.or(self.realtime_departure)
    }
}
