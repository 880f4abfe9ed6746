mod coordinates;
mod fare;
mod quote;
mod route;

pub use coordinates::{City, Coordinates, GeoPoint};
pub use fare::{FareSpread, SeatClass};
pub use quote::{Departure, Quote, QuoteRequest, TripOffer};
pub use route::{RouteEstimate, RouteSource};
