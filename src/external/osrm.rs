use std::time::Duration;

use async_trait::async_trait;
use geo_types::Point;
use serde::{Deserialize, Serialize};

use crate::{
    entities::{GeoPoint, RouteEstimate, RouteSource},
    error::{invalid_input_error, upstream_error, Error},
    estimation::round_to,
    routing::RouteProvider,
};

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Leg {
    /// meters
    distance: f64,
    /// seconds
    duration: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Response {
    code: String,
    #[serde(default)]
    routes: Vec<Leg>,
}

/// Client for an OSRM-compatible routing service.
#[derive(Clone, Debug)]
pub struct OsrmRouteProvider {
    client: reqwest::Client,
    api_base: String,
}

impl OsrmRouteProvider {
    pub fn new(api_base: &str, timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').into(),
        })
    }

    fn url(&self, origin: GeoPoint, destination: GeoPoint) -> String {
        let origin: Point<f64> = origin.into();
        let destination: Point<f64> = destination.into();

        format!(
            "{}/route/v1/driving/{},{};{},{}",
            self.api_base,
            origin.x(),
            origin.y(),
            destination.x(),
            destination.y()
        )
    }
}

fn to_estimate(data: Response) -> Result<RouteEstimate, Error> {
    if data.code != "Ok" {
        return Err(upstream_error());
    }

    let leg = data.routes.first().ok_or_else(|| upstream_error())?;

    if !(leg.distance.is_finite() && leg.distance >= 0.0)
        || !(leg.duration.is_finite() && leg.duration >= 0.0)
    {
        return Err(upstream_error());
    }

    Ok(RouteEstimate::new(
        round_to(leg.distance / 1000.0, 1),
        (leg.duration / 60.0).round() as u32,
        RouteSource::Remote,
    ))
}

#[async_trait]
impl RouteProvider for OsrmRouteProvider {
    #[tracing::instrument(skip(self))]
    async fn route(&self, origin: GeoPoint, destination: GeoPoint) -> Result<RouteEstimate, Error> {
        let res = self
            .client
            .get(self.url(origin, destination))
            .query(&[("overview", "false")])
            .send()
            .await?;

        let status_code = res.status().as_u16();

        if status_code >= 400 && status_code < 500 {
            return Err(invalid_input_error());
        } else if status_code != 200 {
            return Err(upstream_error());
        }

        let data: Response = res.json().await?;

        to_estimate(data)
    }
}
