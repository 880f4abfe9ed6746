use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::api::DynAPI;
use crate::entities::{City, Coordinates, RouteEstimate};
use crate::error::{missing_coordinates_error, Error};

#[derive(Serialize, Deserialize)]
pub struct EstimateParams {
    #[serde(default)]
    origin: Option<Coordinates>,
    #[serde(default)]
    destination: Option<Coordinates>,
}

#[derive(Serialize, Deserialize)]
pub struct EstimateCitiesParams {
    #[serde(default)]
    origin: Option<City>,
    #[serde(default)]
    destination: Option<City>,
}

pub async fn estimate(
    Extension(api): Extension<DynAPI>,
    params: Result<Json<EstimateParams>, JsonRejection>,
) -> Result<Json<RouteEstimate>, Error> {
    let Json(params) = params?;
    let origin = Coordinates::required(params.origin)?;
    let destination = Coordinates::required(params.destination)?;

    let route = api.estimate_route(origin, destination).await?;

    Ok(route.into())
}

pub async fn estimate_cities(
    Extension(api): Extension<DynAPI>,
    params: Result<Json<EstimateCitiesParams>, JsonRejection>,
) -> Result<Json<RouteEstimate>, Error> {
    let Json(params) = params?;
    let origin = params.origin.ok_or_else(|| missing_coordinates_error())?;
    let destination = params
        .destination
        .ok_or_else(|| missing_coordinates_error())?;

    let route = api.estimate_city_route(origin, destination).await?;

    Ok(route.into())
}
