//! Conversion from RTT DTOs to domain types.
//!
//! Transforms raw RTT API responses into validated domain types: CRS codes
//! are normalised, run dates parsed, and "HHMM" strings anchored on the
//! service's run date.

use chrono::NaiveDate;

use crate::domain::{
    AtocCode, Crs, LocationBoard, RailTime, Service, ServiceHandle, ServiceUid, StationRef, Stop,
};

use super::types::{SearchResponse, ServiceLocation, ServiceResponse};

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConversionError {
    /// Failed to parse a CRS code
    #[error("invalid CRS code: {0}")]
    InvalidCrs(String),

    /// Failed to parse a run date
    #[error("invalid run date: {0}")]
    InvalidRunDate(String),

    /// Failed to parse a time string
    #[error("invalid time: {0}")]
    InvalidTime(String),

    /// Missing or empty required field
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// Convert a search response to a location board.
pub fn convert_search(resp: &SearchResponse) -> Result<LocationBoard, ConversionError> {
    let station = convert_location(resp)?;

    let items = resp.services.as_deref().unwrap_or(&[]);

    let mut services = Vec::with_capacity(items.len());
    for item in items {
        let uid = ServiceUid::new(item.service_uid.clone())
            .map_err(|_| ConversionError::MissingField("serviceUid"))?;
        let run_date = parse_run_date(&item.run_date)?;
        services.push(ServiceHandle { uid, run_date });
    }

    Ok(LocationBoard { station, services })
}

/// Convert just the station metadata of a search response.
pub fn convert_location(resp: &SearchResponse) -> Result<StationRef, ConversionError> {
    let crs = Crs::parse(&resp.location.crs)
        .map_err(|_| ConversionError::InvalidCrs(resp.location.crs.clone()))?;
    Ok(StationRef::new(crs, resp.location.name.clone()))
}

/// Convert a service detail response to a domain service.
///
/// Calling points without a CRS code (junctions, sidings) are dropped:
/// they can never match a station lookup and carry no passenger timing.
pub fn convert_service(resp: &ServiceResponse) -> Result<Service, ConversionError> {
    let uid = ServiceUid::new(resp.service_uid.clone())
        .map_err(|_| ConversionError::MissingField("serviceUid"))?;
    let run_date = parse_run_date(&resp.run_date)?;

    let operator = resp
        .atoc_code
        .as_deref()
        .and_then(|c| AtocCode::parse(c).ok());

    let mut stops = Vec::with_capacity(resp.locations.len());
    for location in &resp.locations {
        if let Some(stop) = convert_stop(location, run_date)? {
            stops.push(stop);
        }
    }

    Ok(Service {
        uid,
        run_date,
        operator,
        stops,
    })
}

fn convert_stop(
    location: &ServiceLocation,
    run_date: NaiveDate,
) -> Result<Option<Stop>, ConversionError> {
    let Some(crs_str) = location.crs.as_deref() else {
        return Ok(None);
    };

    let crs = Crs::parse(crs_str).map_err(|_| ConversionError::InvalidCrs(crs_str.to_string()))?;

    Ok(Some(Stop {
        crs,
        booked_arrival: parse_time(location.gbtt_booked_arrival.as_deref(), run_date)?,
        booked_departure: parse_time(location.gbtt_booked_departure.as_deref(), run_date)?,
        realtime_arrival: parse_time(location.realtime_arrival.as_deref(), run_date)?,
        realtime_departure: parse_time(location.realtime_departure.as_deref(), run_date)?,
        platform: location.platform.clone(),
    }))
}

fn parse_run_date(s: &str) -> Result<NaiveDate, ConversionError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| ConversionError::InvalidRunDate(s.to_string()))
}

fn parse_time(s: Option<&str>, run_date: NaiveDate) -> Result<Option<RailTime>, ConversionError> {
    match s {
        None => Ok(None),
        Some(s) => RailTime::parse_hhmm(s, run_date)
            .map(Some)
            .map_err(|_| ConversionError::InvalidTime(s.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search_json(services: &str) -> SearchResponse {
        let json = format!(
            r#"{{
                "location": {{"name": "London Kings Cross", "crs": "KGX"}},
                "services": {services}
            }}"#
        );
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn convert_search_with_services() {
        let resp = search_json(
            r#"[
                {"serviceUid": "W12345", "runDate": "2024-03-01", "atocCode": "GR"},
                {"serviceUid": "W67890", "runDate": "2024-03-01", "atocCode": "GR"}
            ]"#,
        );

        let board = convert_search(&resp).unwrap();

        assert_eq!(board.station.crs.as_str(), "KGX");
        assert_eq!(board.station.name, "London Kings Cross");
        assert_eq!(board.services.len(), 2);
        assert_eq!(board.services[0].uid.as_str(), "W12345");
        assert_eq!(
            board.services[0].run_date,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
    }

    #[test]
    fn convert_search_with_null_services() {
        let resp = search_json("null");

        let board = convert_search(&resp).unwrap();
        assert!(board.services.is_empty());
    }

    #[test]
    fn convert_search_rejects_bad_run_date() {
        let resp = search_json(r#"[{"serviceUid": "W12345", "runDate": "01/03/2024"}]"#);

        assert!(matches!(
            convert_search(&resp),
            Err(ConversionError::InvalidRunDate(_))
        ));
    }

    fn service_json(locations: &str) -> ServiceResponse {
        let json = format!(
            r#"{{
                "serviceUid": "W12345",
                "runDate": "2024-03-01",
                "atocCode": "GR",
                "locations": {locations}
            }}"#
        );
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn convert_service_parses_stops() {
        let resp = service_json(
            r#"[
                {"crs": "KGX", "gbttBookedDeparture": "0803", "realtimeDeparture": "0805", "platform": "4"},
                {"crs": "YRK", "gbttBookedArrival": "1001", "realtimeArrival": "1007", "platform": "5"}
            ]"#,
        );

        let service = convert_service(&resp).unwrap();

        assert_eq!(service.uid.as_str(), "W12345");
        assert_eq!(service.operator.unwrap().as_str(), "GR");
        assert_eq!(service.stops.len(), 2);

        let origin = &service.stops[0];
        assert!(origin.booked_arrival.is_none());
        assert_eq!(origin.booked_departure.unwrap().to_string(), "08:03");
        assert_eq!(origin.realtime_departure.unwrap().to_string(), "08:05");
        assert_eq!(origin.platform.as_deref(), Some("4"));
    }

    #[test]
    fn convert_service_drops_locations_without_crs() {
        let resp = service_json(
            r#"[
                {"crs": "KGX", "gbttBookedDeparture": "0803"},
                {"description": "Holgate Jn", "gbttBookedArrival": "0958"},
                {"crs": "YRK", "gbttBookedArrival": "1001"}
            ]"#,
        );

        let service = convert_service(&resp).unwrap();
        assert_eq!(service.stops.len(), 2);
        assert_eq!(service.stops[1].crs.as_str(), "YRK");
    }

    #[test]
    fn convert_service_anchors_times_on_run_date() {
        let resp = service_json(r#"[{"crs": "KGX", "gbttBookedDeparture": "0803"}]"#);

        let service = convert_service(&resp).unwrap();
        let booked = service.stops[0].booked_time().unwrap();
        assert_eq!(booked.date(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn convert_service_rejects_bad_time() {
        let resp = service_json(r#"[{"crs": "KGX", "gbttBookedDeparture": "8:03"}]"#);

        assert!(matches!(
            convert_service(&resp),
            Err(ConversionError::InvalidTime(_))
        ));
    }

    #[test]
    fn convert_service_tolerates_unknown_atoc() {
        let json = r#"{
            "serviceUid": "W12345",
            "runDate": "2024-03-01",
            "atocCode": "ZZZ",
            "locations": []
        }"#;
        let resp: ServiceResponse = serde_json::from_str(json).unwrap();

        // A malformed operator code degrades to "no operator", never an error
        let service = convert_service(&resp).unwrap();
        assert!(service.operator.is_none());
    }
}
