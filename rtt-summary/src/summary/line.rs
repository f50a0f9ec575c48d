//! Per-service display line rendering.
//!
//! Each summarised service becomes one line of chat markup:
//!
//! ```text
//! :lner: :red_circle: [10:07](https://www.realtimetrains.co.uk/service/gb-nr:W12345/2024-03-01) (+6) Platform: 5
//! ```
//!
//! The glyph is the operator's (if mapped), the circle marks lateness
//! status, the clock is the live time linked to the service's RTT page,
//! and the parenthetical is the signed lateness in minutes (omitted when
//! on time).

use chrono::NaiveDate;

use crate::domain::{Crs, RailTime, Service, ServiceUid, Stop};

use super::icons::OperatorIcons;

/// Base URL for service deep links.
const RTT_SERVICE_BASE: &str = "https://www.realtimetrains.co.uk/service/gb-nr:";

/// Errors rendering a single service's line.
///
/// These are per-service conditions: the caller drops the affected service
/// from the summary rather than failing the whole request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineError {
    /// The service's stop sequence has no entry for the origin station
    #[error("service does not call at {0}")]
    NoMatchingStop(Crs),

    /// The matched stop has no booked time, so neither the clock fallback
    /// nor the deep link date can be produced
    #[error("stop has no usable timing data")]
    MissingTimingData,
}

/// Lateness status of a service at a stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Realtime later than booked
    Late,
    /// Realtime earlier than booked
    Early,
    /// Realtime matches booked, or no realtime data
    OnTime,
}

impl Status {
    /// Classify a signed lateness in minutes.
    pub fn from_lateness(minutes: i64) -> Self {
        match minutes {
            m if m > 0 => Status::Late,
            m if m < 0 => Status::Early,
            _ => Status::OnTime,
        }
    }

    /// The chat glyph for this status.
    pub fn marker(&self) -> &'static str {
        match self {
            Status::Late => ":red_circle:",
            Status::Early => ":blue_circle:",
            Status::OnTime => ":green_circle:",
        }
    }
}

/// Whole minutes of lateness: realtime relative to booked.
///
/// Both times are anchored on the service's run date, so a service
/// crossing midnight can show a realtime that appears almost a full day
/// away from its booked time. The difference is therefore normalised into
/// (-720, 720] minutes: 23:58 booked against 00:02 realtime is 4 minutes
/// late, not 1436 minutes early.
pub fn lateness_minutes(realtime: RailTime, booked: RailTime) -> i64 {
    let diff = realtime.signed_duration_since(booked).num_minutes();
    let wrapped = diff.rem_euclid(24 * 60);
    if wrapped > 12 * 60 {
        wrapped - 24 * 60
    } else {
        wrapped
    }
}

/// Deep link to a service's RTT page for a given date.
pub fn service_link(uid: &ServiceUid, date: NaiveDate) -> String {
    format!("{RTT_SERVICE_BASE}{}/{}", uid.as_str(), date.format("%Y-%m-%d"))
}

/// Render the display line for one service at the origin station.
pub fn render_line(
    service: &Service,
    origin: Crs,
    icons: &OperatorIcons,
) -> Result<String, LineError> {
    let stop = service
        .stop_at(origin)
        .ok_or(LineError::NoMatchingStop(origin))?;

    render_stop_line(service, stop, icons)
}

fn render_stop_line(
    service: &Service,
    stop: &Stop,
    icons: &OperatorIcons,
) -> Result<String, LineError> {
    // The booked time carries the deep link date and the clock fallback;
    // without it the line has no valid rendering.
    let booked = stop.booked_time().ok_or(LineError::MissingTimingData)?;
    let realtime = stop.realtime_time();

    let displayed = realtime.unwrap_or(booked);
    let lateness = realtime.map_or(0, |rt| lateness_minutes(rt, booked));
    let status = Status::from_lateness(lateness);

    let link = service_link(&service.uid, booked.date());

    let mut segments: Vec<String> = Vec::with_capacity(5);

    if let Some(icon) = service.operator.and_then(|code| icons.get(code)) {
        segments.push(icon.to_string());
    }

    segments.push(status.marker().to_string());
    segments.push(format!("[{displayed}]({link})"));

    match status {
        Status::Late => segments.push(format!("(+{lateness})")),
        Status::Early => segments.push(format!("({lateness})")),
        Status::OnTime => {}
    }

    if let Some(platform) = stop.platform.as_deref() {
        segments.push(format!("Platform: {platform}"));
    }

    Ok(segments.join(" "))
}
