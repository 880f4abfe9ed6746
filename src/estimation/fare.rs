use chrono::NaiveDateTime;

use crate::entities::{FareSpread, SeatClass};
use crate::error::{invalid_input_error, Error};
use crate::estimation::distance::{check_distance, round_to};

pub const MIN_FARE: f64 = 15.0;
pub const DEFAULT_VARIATION_PERCENT: f64 = 15.0;
pub const DEFAULT_RATE_PER_KM: f64 = 0.30;

pub const ADVANCE_PURCHASE_DAYS: i64 = 10;
pub const ADVANCE_PURCHASE_DISCOUNT: f64 = 0.05;

/// Price per kilometer for a seat class name. Unknown names price at 0.30.
pub fn rate_per_km(seat_class: &str) -> f64 {
    seat_class
        .parse::<SeatClass>()
        .map(|class| class.rate_per_km())
        .unwrap_or(DEFAULT_RATE_PER_KM)
}

pub fn base_fare(distance_km: f64, rate_per_km: f64) -> Result<f64, Error> {
    let distance_km = check_distance(distance_km)?;

    Ok(round_to((distance_km * rate_per_km).max(MIN_FARE), 2))
}

/// Applies offsets of -v, -v/2, 0, +v/2, +v percent to `base`.
pub fn fare_variations(base: f64, variation_percent: f64) -> Result<Vec<f64>, Error> {
    if !base.is_finite() || base < 0.0 {
        return Err(invalid_input_error());
    }

    if !variation_percent.is_finite() || variation_percent < 0.0 {
        return Err(invalid_input_error());
    }

    let half = variation_percent / 2.0;

    Ok([-variation_percent, -half, 0.0, half, variation_percent]
        .iter()
        .map(|offset| round_to(base + base * offset / 100.0, 2))
        .collect())
}

pub fn fare_spread(
    distance_km: f64,
    seat_class: &str,
    variation_percent: f64,
) -> Result<FareSpread, Error> {
    let base = base_fare(distance_km, rate_per_km(seat_class))?;
    let fares = fare_variations(base, variation_percent)?;

    let seat_class = match seat_class.parse::<SeatClass>() {
        Ok(class) => class.name().into(),
        Err(_) => seat_class.into(),
    };

    Ok(FareSpread {
        seat_class,
        base_fare: base,
        fares,
    })
}

pub fn recommend_seat_class(distance_km: f64) -> SeatClass {
    if distance_km < 100.0 {
        SeatClass::Convencional
    } else if distance_km < 300.0 {
        SeatClass::Executivo
    } else if distance_km < 600.0 {
        SeatClass::SemiLeito
    } else {
        SeatClass::Leito
    }
}

/// Whole days between the calendar dates of `now` and `departure`.
pub fn days_before(departure: NaiveDateTime, now: NaiveDateTime) -> i64 {
    (departure.date() - now.date()).num_days()
}

pub fn advance_purchase_discount(days_before: i64) -> f64 {
    if days_before >= ADVANCE_PURCHASE_DAYS {
        ADVANCE_PURCHASE_DISCOUNT
    } else {
        0.0
    }
}

pub fn apply_discount(total: f64, departure: NaiveDateTime, now: NaiveDateTime) -> f64 {
    let rate = advance_purchase_discount(days_before(departure, now));

    round_to(total * (1.0 - rate), 2)
}
