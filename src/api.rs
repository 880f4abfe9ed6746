use async_trait::async_trait;
use std::sync::Arc;

use crate::entities::{City, FareSpread, GeoPoint, Quote, QuoteRequest, RouteEstimate};
use crate::error::Error;

#[async_trait]
pub trait RouteAPI {
    async fn estimate_route(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
    ) -> Result<RouteEstimate, Error>;

    async fn estimate_city_route(
        &self,
        origin: City,
        destination: City,
    ) -> Result<RouteEstimate, Error>;
}

#[async_trait]
pub trait FareAPI {
    async fn quote_fares(
        &self,
        distance_km: f64,
        seat_class: Option<String>,
    ) -> Result<FareSpread, Error>;
}

#[async_trait]
pub trait QuoteAPI {
    async fn create_quote(&self, request: QuoteRequest) -> Result<Quote, Error>;
}

pub trait API: RouteAPI + FareAPI + QuoteAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
