mod fare_api;
mod quote_api;
mod route_api;

use std::sync::Arc;

use crate::{
    api::API,
    cache::TtlCache,
    config::Config,
    error::Error,
    external::osrm::OsrmRouteProvider,
    routing::{DynRouteProvider, RouteEstimator},
};

/// Number of carrier offers synthesized per quote, one per varied fare.
const OFFERS_PER_QUOTE: usize = 5;

pub struct Engine {
    estimator: RouteEstimator,
    fare_variation_percent: f64,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new", skip_all)]
    pub fn new(config: &Config) -> Result<Self, Error> {
        let cache = Arc::new(TtlCache::new(config.route_cache_ttl));

        let remote = match &config.routing_api_base {
            Some(api_base) => {
                tracing::info!("using routing provider at {}", api_base);
                let provider = OsrmRouteProvider::new(api_base, config.routing_timeout)?;
                Some(Arc::new(provider) as DynRouteProvider)
            }
            None => {
                tracing::info!("no routing provider configured, estimates are heuristic only");
                None
            }
        };

        Ok(Self::with_estimator(
            RouteEstimator::new(remote, cache),
            config.fare_variation_percent,
        ))
    }

    pub fn with_estimator(estimator: RouteEstimator, fare_variation_percent: f64) -> Self {
        Self {
            estimator,
            fare_variation_percent,
        }
    }
}

impl API for Engine {}
