//! Mock timetable client for testing without API access.
//!
//! Serves pre-registered boards, stations and services from memory as if
//! they were live API responses.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::domain::{Crs, LocationBoard, Service, ServiceUid, StationRef};

use super::TimetableClient;
use super::error::RttError;

/// In-memory implementation of [`TimetableClient`].
///
/// Anything not registered produces the same errors the live client maps
/// from RTT's 404s, so error paths can be exercised too.
#[derive(Debug, Clone, Default)]
pub struct MockTimetableClient {
    boards: HashMap<(Crs, Crs), LocationBoard>,
    stations: HashMap<Crs, StationRef>,
    services: HashMap<(ServiceUid, NaiveDate), Service>,
}

impl MockTimetableClient {
    /// Create an empty mock client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the board returned for a route lookup between two stations.
    pub fn with_board(mut self, origin: Crs, destination: Crs, board: LocationBoard) -> Self {
        self.boards.insert((origin, destination), board);
        self
    }

    /// Register a station metadata lookup result.
    pub fn with_station(mut self, station: StationRef) -> Self {
        self.stations.insert(station.crs, station);
        self
    }

    /// Register a service detail lookup result, keyed by its UID and run date.
    pub fn with_service(mut self, service: Service) -> Self {
        self.services
            .insert((service.uid.clone(), service.run_date), service);
        self
    }
}

impl TimetableClient for MockTimetableClient {
    async fn search_between(
        &self,
        origin: Crs,
        destination: Crs,
    ) -> Result<LocationBoard, RttError> {
        self.boards
            .get(&(origin, destination))
            .cloned()
            .ok_or_else(|| RttError::StationNotFound(format!("{origin} or {destination}")))
    }

    async fn location_info(&self, crs: Crs) -> Result<StationRef, RttError> {
        self.stations
            .get(&crs)
            .cloned()
            .ok_or_else(|| RttError::StationNotFound(crs.to_string()))
    }

    async fn service_details(
        &self,
        uid: &ServiceUid,
        run_date: NaiveDate,
    ) -> Result<Service, RttError> {
        self.services
            .get(&(uid.clone(), run_date))
            .cloned()
            .ok_or(RttError::ServiceNotFound)
    }
}
