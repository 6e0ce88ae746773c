//! Page addressing and extraction on top of a [`PageSource`].

use std::future::Future;

use tracing::info;

use crate::domain::{Direction, Route, RouteLocator, ScheduledTime, TimetableLocator, VehicleType};
use crate::extract::{parse_directions, parse_routes, parse_schedule};
use crate::markup::tokenize;

use super::client::{ClientConfig, GortransClient};
use super::error::ClientError;

const SEARCH_PATH: &str = "/search/";

/// Something that can return the raw markup of a site page.
///
/// This abstraction allows the page helpers to be tested with canned pages.
pub trait PageSource {
    /// Fetch the page at `path` (site-relative, leading slash) with the
    /// given query parameters.
    fn fetch_page(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> impl Future<Output = Result<String, ClientError>> + Send;
}

/// Site path of the full route listing for one vehicle type.
pub fn listing_path(vehicle_type: VehicleType) -> String {
    format!("/routes-list/{}/", vehicle_type.listing_id())
}

/// Typed access to the site's pages.
#[derive(Debug, Clone)]
pub struct Gortrans<S> {
    source: S,
}

impl Gortrans<GortransClient> {
    /// Create an HTTP-backed instance.
    pub fn connect(config: ClientConfig) -> Result<Self, ClientError> {
        Ok(Self::new(GortransClient::new(config)?))
    }
}

impl<S: PageSource> Gortrans<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Free-text route search, e.g. `"80"` or `"7т"`.
    pub async fn search(&self, query: &str) -> Result<Vec<Route>, ClientError> {
        let html = self
            .source
            .fetch_page(SEARCH_PATH, &[("q", query)])
            .await?;
        let routes = parse_routes(tokenize(&html), None)?;
        info!(query, found = routes.len(), "route search");
        Ok(routes)
    }

    /// Every route of one vehicle type.
    pub async fn all_routes(&self, vehicle_type: VehicleType) -> Result<Vec<Route>, ClientError> {
        let html = self
            .source
            .fetch_page(&listing_path(vehicle_type), &[])
            .await?;
        let routes = parse_routes(tokenize(&html), Some(vehicle_type))?;
        info!(%vehicle_type, found = routes.len(), "route listing");
        Ok(routes)
    }

    /// Directions and stops of a route.
    pub async fn directions(&self, route: &RouteLocator) -> Result<Vec<Direction>, ClientError> {
        let html = self.source.fetch_page(route.as_str(), &[]).await?;
        Ok(parse_directions(tokenize(&html))?)
    }

    /// Scheduled arrival times at a stop, in timetable order.
    pub async fn timetable(
        &self,
        stop: &TimetableLocator,
    ) -> Result<Vec<ScheduledTime>, ClientError> {
        let html = self.source.fetch_page(stop.as_str(), &[]).await?;
        Ok(parse_schedule(tokenize(&html))?)
    }
}
