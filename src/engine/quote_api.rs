use super::{Engine, OFFERS_PER_QUOTE};

use async_trait::async_trait;
use chrono::{Local, NaiveDateTime};
use rand::Rng;

use crate::{
    api::QuoteAPI,
    entities::{Quote, QuoteRequest, RouteEstimate, TripOffer},
    error::Error,
    estimation::{advance_purchase_discount, apply_discount, days_before, synthesize_departures},
};

impl Engine {
    pub(crate) fn build_quote<R: Rng + ?Sized>(
        &self,
        request: QuoteRequest,
        route: RouteEstimate,
        now: NaiveDateTime,
        rng: &mut R,
    ) -> Result<Quote, Error> {
        let fares = self.fares_for(route.distance_km, request.seat_class.as_deref())?;
        let departures =
            synthesize_departures(rng, request.departure_date, &route, OFFERS_PER_QUOTE);

        let offers = fares
            .fares
            .iter()
            .zip(departures)
            .map(|(fare, departure)| TripOffer {
                fare: *fare,
                discount_rate: advance_purchase_discount(days_before(departure.departs_at, now)),
                price: apply_discount(*fare, departure.departs_at, now),
                departure,
            })
            .collect();

        Ok(Quote::new(
            request.origin,
            request.destination,
            route,
            fares,
            offers,
        ))
    }
}

#[async_trait]
impl QuoteAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn create_quote(&self, request: QuoteRequest) -> Result<Quote, Error> {
        let route = self
            .estimator
            .estimate(request.origin, request.destination)
            .await;

        let quote = self.build_quote(
            request,
            route,
            Local::now().naive_local(),
            &mut rand::thread_rng(),
        )?;

        tracing::info!(token = %quote.token, offers = quote.offers.len(), "created quote");

        Ok(quote)
    }
}
