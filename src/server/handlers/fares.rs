use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::api::DynAPI;
use crate::entities::FareSpread;
use crate::error::Error;

#[derive(Serialize, Deserialize)]
pub struct CreateParams {
    distance_km: f64,
    #[serde(default)]
    seat_class: Option<String>,
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    params: Result<Json<CreateParams>, JsonRejection>,
) -> Result<Json<FareSpread>, Error> {
    let Json(params) = params?;

    let fares = api
        .quote_fares(params.distance_km, params.seat_class)
        .await?;

    Ok(fares.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::TtlCache;
    use crate::engine::Engine;
    use crate::routing::RouteEstimator;
    use std::sync::Arc;
    use std::time::Duration;

    fn api() -> DynAPI {
        let cache = Arc::new(TtlCache::new(Duration::from_secs(60)));
        Arc::new(Engine::with_estimator(RouteEstimator::heuristic_only(cache), 15.0))
    }

    #[tokio::test]
    async fn test_create_fares() {
        let params = CreateParams {
            distance_km: 250.0,
            seat_class: Some("semi-leito".into()),
        };

        let Json(spread) = create(Extension(api()), Ok(Json(params))).await.unwrap();

        assert_eq!(spread.seat_class, "SEMI_LEITO");
        assert_eq!(spread.base_fare, 87.5);
        assert_eq!(spread.fares.len(), 5);
    }

    #[tokio::test]
    async fn test_negative_distance() {
        let params = CreateParams {
            distance_km: -1.0,
            seat_class: None,
        };

        let err = create(Extension(api()), Ok(Json(params))).await.unwrap_err();

        assert_eq!(err.code, 104);
    }
}
