use super::Engine;

use async_trait::async_trait;

use crate::{
    api::FareAPI,
    entities::FareSpread,
    error::Error,
    estimation::{fare_spread, recommend_seat_class},
};

impl Engine {
    /// Fare spread for `seat_class`, or for the class recommended for the
    /// distance when none (or a blank name) is given.
    pub(crate) fn fares_for(
        &self,
        distance_km: f64,
        seat_class: Option<&str>,
    ) -> Result<FareSpread, Error> {
        match seat_class.map(str::trim).filter(|name| !name.is_empty()) {
            Some(seat_class) => fare_spread(distance_km, seat_class, self.fare_variation_percent),
            None => fare_spread(
                distance_km,
                recommend_seat_class(distance_km).name(),
                self.fare_variation_percent,
            ),
        }
    }
}

#[async_trait]
impl FareAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn quote_fares(
        &self,
        distance_km: f64,
        seat_class: Option<String>,
    ) -> Result<FareSpread, Error> {
        self.fares_for(distance_km, seat_class.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::TtlCache;
    use crate::routing::RouteEstimator;
    use std::sync::Arc;
    use std::time::Duration;

    fn engine(variation: f64) -> Engine {
        let cache = Arc::new(TtlCache::new(Duration::from_secs(60)));
        Engine::with_estimator(RouteEstimator::heuristic_only(cache), variation)
    }

    #[tokio::test]
    async fn test_explicit_class() {
        let spread = engine(15.0)
            .quote_fares(250.0, Some("SEMI_LEITO".into()))
            .await
            .unwrap();

        assert_eq!(spread.seat_class, "SEMI_LEITO");
        assert_eq!(spread.base_fare, 87.5);
    }

    #[tokio::test]
    async fn test_recommended_class_when_missing() {
        let spread = engine(15.0).quote_fares(250.0, None).await.unwrap();

        // 250 km falls in the executive band: 250 * 0.45
        assert_eq!(spread.seat_class, "EXECUTIVO");
        assert_eq!(spread.base_fare, 112.5);
    }

    #[tokio::test]
    async fn test_blank_class_gets_recommendation() {
        for blank in ["", "   "] {
            let spread = engine(15.0)
                .quote_fares(250.0, Some(blank.into()))
                .await
                .unwrap();

            assert_eq!(spread.seat_class, "EXECUTIVO");
            assert_eq!(spread.base_fare, 112.5);
        }
    }

    #[tokio::test]
    async fn test_configured_variation() {
        let spread = engine(0.0).quote_fares(100.0, Some("LEITO".into())).await.unwrap();

        assert_eq!(spread.fares, vec![55.0; 5]);
    }

    #[tokio::test]
    async fn test_negative_distance_is_rejected() {
        let err = engine(15.0).quote_fares(-10.0, None).await.unwrap_err();
        assert_eq!(err.code, 104);
    }
}
