//! The summary pipeline: fetch, match, render.
//!
//! One invocation makes two parallel lookups (route search and destination
//! metadata), then up to three parallel service detail fetches, then
//! renders a line per service. Any fetch failure fails the whole request;
//! a service that cannot be rendered is dropped with a warning so one bad
//! record never spoils the rest.

use futures::future;
use tracing::warn;

use crate::domain::Crs;
use crate::rtt::{RttError, TimetableClient};

use super::icons::OperatorIcons;
use super::line::render_line;

/// How many services a summary covers at most.
pub const MAX_SERVICES: usize = 3;

/// Accent colour for chat embeds carrying the summary.
pub const ACCENT_COLOUR: &str = "#39bdb8";

/// A rendered summary, ready to hand to a chat embed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedSummary {
    /// "Origin name to Destination name"
    pub title: String,
    /// One line per service, newline-joined; empty when no services run
    pub body: String,
    /// Fixed embed accent colour
    pub colour: &'static str,
}

/// Formats service summaries between two stations.
///
/// Generic over [`TimetableClient`] so the upstream can be the live RTT
/// client or an in-memory mock. The operator icon table is injected at
/// construction.
#[derive(Debug, Clone)]
pub struct Summarizer<C> {
    client: C,
    icons: OperatorIcons,
}

impl<C: TimetableClient> Summarizer<C> {
    /// Create a summarizer over the given client and icon table.
    pub fn new(client: C, icons: OperatorIcons) -> Self {
        Self { client, icons }
    }

    /// Summarise the next few services from `origin` to `destination`.
    ///
    /// Fetch failures propagate unrecovered; there is no partial result.
    /// Services that do not call at the origin, or whose origin stop has
    /// no usable timing data, are skipped with a warning.
    pub async fn summarize(
        &self,
        origin: Crs,
        destination: Crs,
    ) -> Result<FormattedSummary, RttError> {
        // Route lookup and destination metadata only depend on the inputs,
        // so they run concurrently.
        let (board, destination_station) = future::try_join(
            self.client.search_between(origin, destination),
            self.client.location_info(destination),
        )
        .await?;

        // Detail fetches for the selected services are independent of each
        // other; fan out and join.
        let selected = board.services.iter().take(MAX_SERVICES);
        let services = future::try_join_all(
            selected.map(|handle| self.client.service_details(&handle.uid, handle.run_date)),
        )
        .await?;

        let mut lines = Vec::with_capacity(services.len());
        for service in &services {
            match render_line(service, origin, &self.icons) {
                Ok(line) => lines.push(line),
                Err(e) => {
                    warn!(uid = %service.uid, run_date = %service.run_date, "skipping service: {e}");
                }
            }
        }

        Ok(FormattedSummary {
            title: format!("{} to {}", board.station.name, destination_station.name),
            body: lines.join("\n"),
            colour: ACCENT_COLOUR,
        })
    }
}
