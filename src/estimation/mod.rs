mod departures;
mod distance;
mod fare;

pub use departures::synthesize_departures;
pub use distance::{average_speed_kmh, haversine_km, stop_allowance_minutes, travel_minutes};
pub use fare::{
    advance_purchase_discount, apply_discount, base_fare, days_before, fare_spread,
    fare_variations, rate_per_km, recommend_seat_class, DEFAULT_VARIATION_PERCENT, MIN_FARE,
};

pub(crate) use distance::round_to;
