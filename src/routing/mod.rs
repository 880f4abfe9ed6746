mod estimator;
mod heuristic;

use async_trait::async_trait;

use crate::entities::{GeoPoint, RouteEstimate};
use crate::error::Error;

pub use estimator::RouteEstimator;
pub use heuristic::HeuristicRouteProvider;

/// Something that can estimate road distance and travel time between two
/// points.
#[async_trait]
pub trait RouteProvider {
    async fn route(&self, origin: GeoPoint, destination: GeoPoint) -> Result<RouteEstimate, Error>;
}

pub type DynRouteProvider = std::sync::Arc<dyn RouteProvider + Send + Sync>;
