use super::Engine;

use async_trait::async_trait;

use crate::{
    api::RouteAPI,
    entities::{City, GeoPoint, RouteEstimate},
    error::Error,
};

#[async_trait]
impl RouteAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn estimate_route(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
    ) -> Result<RouteEstimate, Error> {
        Ok(self.estimator.estimate(origin, destination).await)
    }

    #[tracing::instrument(skip(self))]
    async fn estimate_city_route(
        &self,
        origin: City,
        destination: City,
    ) -> Result<RouteEstimate, Error> {
        let origin_point = origin.coordinates()?;
        let destination_point = destination.coordinates()?;

        self.estimate_route(origin_point, destination_point).await
    }
}
