use std::sync::Arc;

use super::{DynRouteProvider, HeuristicRouteProvider};
use crate::cache::TtlCache;
use crate::entities::{GeoPoint, RouteEstimate};

/// Point pair quantized to 1e-5 degrees (about a meter).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RouteKey([i64; 4]);

impl RouteKey {
    fn new(origin: GeoPoint, destination: GeoPoint) -> Self {
        let q = |v: f64| (v * 1e5).round() as i64;

        Self([
            q(origin.latitude()),
            q(origin.longitude()),
            q(destination.latitude()),
            q(destination.longitude()),
        ])
    }
}

pub type RouteCache = TtlCache<RouteKey, RouteEstimate>;

/// Prefers the remote provider and substitutes the heuristic whenever it is
/// missing or fails. Only remote answers are cached.
pub struct RouteEstimator {
    remote: Option<DynRouteProvider>,
    fallback: HeuristicRouteProvider,
    cache: Arc<RouteCache>,
}

impl RouteEstimator {
    pub fn new(remote: Option<DynRouteProvider>, cache: Arc<RouteCache>) -> Self {
        Self {
            remote,
            fallback: HeuristicRouteProvider,
            cache,
        }
    }

    pub fn heuristic_only(cache: Arc<RouteCache>) -> Self {
        Self::new(None, cache)
    }

    #[cfg(test)]
    fn cache(&self) -> &Arc<RouteCache> {
        &self.cache
    }

    #[tracing::instrument(skip(self))]
    pub async fn estimate(&self, origin: GeoPoint, destination: GeoPoint) -> RouteEstimate {
        let remote = match &self.remote {
            Some(remote) => remote,
            None => return self.fallback.estimate(origin, destination),
        };

        let key = RouteKey::new(origin, destination);

        if let Some(estimate) = self.cache.get(&key).await {
            tracing::debug!("route cache hit");
            return estimate;
        }

        match remote.route(origin, destination).await {
            Ok(estimate) => {
                let cached = self.cache.insert(key, estimate.clone()).await;
                tracing::debug!(cached, "cached routing provider answer");
                estimate
            }
            Err(err) => {
                tracing::warn!("routing provider failed, using heuristic: {}", err);
                self.fallback.estimate(origin, destination)
            }
        }
    }
}
