use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, Json};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api::DynAPI;
use crate::entities::{Coordinates, Quote, QuoteRequest};
use crate::error::{invalid_input_error, Error};

#[derive(Serialize, Deserialize)]
pub struct CreateParams {
    #[serde(default)]
    origin: Option<Coordinates>,
    #[serde(default)]
    destination: Option<Coordinates>,
    #[serde(default)]
    seat_class: Option<String>,
    #[serde(default)]
    departure_date: Option<NaiveDate>,
}

impl TryFrom<CreateParams> for QuoteRequest {
    type Error = Error;

    fn try_from(params: CreateParams) -> Result<Self, Self::Error> {
        Ok(QuoteRequest {
            origin: Coordinates::required(params.origin)?,
            destination: Coordinates::required(params.destination)?,
            seat_class: params.seat_class,
            departure_date: params.departure_date.ok_or_else(|| invalid_input_error())?,
        })
    }
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    params: Result<Json<CreateParams>, JsonRejection>,
) -> Result<Json<Quote>, Error> {
    let Json(params) = params?;

    let quote = api.create_quote(params.try_into()?).await?;

    Ok(quote.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::TtlCache;
    use crate::engine::Engine;
    use crate::routing::RouteEstimator;
    use chrono::{Duration, Local};
    use std::sync::Arc;

    fn api() -> DynAPI {
        let cache = Arc::new(TtlCache::new(std::time::Duration::from_secs(60)));
        Arc::new(Engine::with_estimator(RouteEstimator::heuristic_only(cache), 15.0))
    }

    fn params(departure_date: Option<NaiveDate>) -> CreateParams {
        CreateParams {
            origin: Some(Coordinates {
                latitude: Some(-25.4284),
                longitude: Some(-49.2733),
            }),
            destination: Some(Coordinates {
                latitude: Some(-25.5302),
                longitude: Some(-49.2064),
            }),
            seat_class: None,
            departure_date,
        }
    }

    #[tokio::test]
    async fn test_create_quote() {
        let date = Local::now().date_naive() + Duration::days(2);

        let Json(quote) = create(Extension(api()), Ok(Json(params(Some(date)))))
            .await
            .unwrap();

        // Curitiba to São José dos Pinhais is a short, conventional-class trip
        assert_eq!(quote.fares.seat_class, "CONVENCIONAL");
        assert_eq!(quote.offers.len(), 5);
        assert!(quote.offers.iter().all(|offer| offer.discount_rate == 0.0));
    }

    #[tokio::test]
    async fn test_missing_departure_date() {
        let err = create(Extension(api()), Ok(Json(params(None))))
            .await
            .unwrap_err();

        assert_eq!(err.code, 101);
    }

    #[tokio::test]
    async fn test_missing_destination() {
        let mut params = params(Some(Local::now().date_naive()));
        params.destination = None;

        let err = create(Extension(api()), Ok(Json(params))).await.unwrap_err();

        assert_eq!(err.code, 102);
    }
}
