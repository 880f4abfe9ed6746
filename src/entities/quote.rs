use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{FareSpread, GeoPoint, RouteEstimate};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Departure {
    pub departs_at: NaiveDateTime,
    pub arrives_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TripOffer {
    pub fare: f64,
    pub departure: Departure,
    pub discount_rate: f64,
    pub price: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub origin: GeoPoint,
    pub destination: GeoPoint,
    #[serde(default)]
    pub seat_class: Option<String>,
    pub departure_date: NaiveDate,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Quote {
    pub token: Uuid,
    pub origin: GeoPoint,
    pub destination: GeoPoint,
    pub route: RouteEstimate,
    pub fares: FareSpread,
    pub offers: Vec<TripOffer>,
}

impl Quote {
    pub fn new(
        origin: GeoPoint,
        destination: GeoPoint,
        route: RouteEstimate,
        fares: FareSpread,
        offers: Vec<TripOffer>,
    ) -> Self {
        Self {
            token: Uuid::new_v4(),
            origin,
            destination,
            route,
            fares,
            offers,
        }
    }
}
