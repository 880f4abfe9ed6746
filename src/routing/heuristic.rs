use async_trait::async_trait;

use super::RouteProvider;
use crate::entities::{GeoPoint, RouteEstimate, RouteSource};
use crate::error::Error;
use crate::estimation::{haversine_km, travel_minutes};

/// Straight-line distance with a bus speed and stop model. Ignores roads, but
/// is always available.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicRouteProvider;

impl HeuristicRouteProvider {
    pub fn estimate(&self, origin: GeoPoint, destination: GeoPoint) -> RouteEstimate {
        let distance_km = haversine_km(origin, destination);
        // haversine never yields a negative or non-finite distance
        let total_minutes = travel_minutes(distance_km).unwrap_or_default();

        RouteEstimate::new(distance_km, total_minutes, RouteSource::Fallback)
    }
}

#[async_trait]
impl RouteProvider for HeuristicRouteProvider {
    async fn route(&self, origin: GeoPoint, destination: GeoPoint) -> Result<RouteEstimate, Error> {
        Ok(self.estimate(origin, destination))
    }
}
