//! Closed-form distance and travel-time model used when no routing provider
//! answers.

use crate::entities::GeoPoint;
use crate::error::{invalid_distance_error, Error};

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

const MIN_STOP_ALLOWANCE_MINUTES: f64 = 5.0;
const MAX_STOP_ALLOWANCE_MINUTES: f64 = 30.0;
const MINUTES_PER_STOP: f64 = 7.0;
const KM_BETWEEN_STOPS: f64 = 100.0;

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

pub(crate) fn check_distance(distance_km: f64) -> Result<f64, Error> {
    if distance_km.is_finite() && distance_km >= 0.0 {
        Ok(distance_km)
    } else {
        Err(invalid_distance_error())
    }
}

/// Great-circle distance in kilometers, rounded to one decimal place.
pub fn haversine_km(from: GeoPoint, to: GeoPoint) -> f64 {
    let lat1_rad = from.latitude().to_radians();
    let lat2_rad = to.latitude().to_radians();
    let delta_lat = (to.latitude() - from.latitude()).to_radians();
    let delta_lng = (to.longitude() - from.longitude()).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    round_to(EARTH_RADIUS_KM * c, 1)
}

/// Average bus speed for a trip of the given length. Short trips are mostly
/// urban driving, long ones mostly highway.
pub fn average_speed_kmh(distance_km: f64) -> f64 {
    if distance_km < 50.0 {
        65.0
    } else if distance_km < 100.0 {
        80.0
    } else if distance_km < 300.0 {
        90.0
    } else {
        95.0
    }
}

/// Minutes spent at intermediate stops, clamped to [5, 30].
pub fn stop_allowance_minutes(distance_km: f64) -> f64 {
    ((distance_km / KM_BETWEEN_STOPS).floor() * MINUTES_PER_STOP)
        .clamp(MIN_STOP_ALLOWANCE_MINUTES, MAX_STOP_ALLOWANCE_MINUTES)
}

/// Total estimated travel minutes for a road distance.
pub fn travel_minutes(distance_km: f64) -> Result<u32, Error> {
    let distance_km = check_distance(distance_km)?;
    let driving = distance_km / average_speed_kmh(distance_km) * 60.0;

    Ok((driving + stop_allowance_minutes(distance_km)).round() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(latitude: f64, longitude: f64) -> GeoPoint {
        GeoPoint::new(latitude, longitude).unwrap()
    }

    #[test]
    fn test_haversine_same_point() {
        let sao_paulo = point(-23.5505, -46.6333);
        assert_eq!(haversine_km(sao_paulo, sao_paulo), 0.0);
    }

    #[test]
    fn test_haversine_known_distance() {
        // Sao Paulo to Rio de Janeiro is ~360 km in a straight line
        let dist = haversine_km(point(-23.5505, -46.6333), point(-22.9068, -43.1729));
        assert!(dist > 350.0 && dist < 365.0, "got {}", dist);
    }

    #[test]
    fn test_haversine_symmetric() {
        let pairs = [
            (point(-23.5505, -46.6333), point(-22.9068, -43.1729)),
            (point(-15.7939, -47.8828), point(-3.7319, -38.5267)),
            (point(89.9, 179.9), point(-89.9, -179.9)),
        ];

        for (a, b) in pairs {
            assert_eq!(haversine_km(a, b), haversine_km(b, a));
        }
    }

    #[test]
    fn test_haversine_rounds_to_one_decimal() {
        let dist = haversine_km(point(-23.5505, -46.6333), point(-22.9068, -43.1729));
        assert_eq!(dist, round_to(dist, 1));
    }

    #[test]
    fn test_speed_bands() {
        assert_eq!(average_speed_kmh(0.0), 65.0);
        assert_eq!(average_speed_kmh(49.9), 65.0);
        assert_eq!(average_speed_kmh(50.0), 80.0);
        assert_eq!(average_speed_kmh(100.0), 90.0);
        assert_eq!(average_speed_kmh(299.9), 90.0);
        assert_eq!(average_speed_kmh(300.0), 95.0);
    }

    #[test]
    fn test_stop_allowance_is_clamped() {
        assert_eq!(stop_allowance_minutes(0.0), 5.0);
        assert_eq!(stop_allowance_minutes(150.0), 7.0);
        assert_eq!(stop_allowance_minutes(250.0), 14.0);
        assert_eq!(stop_allowance_minutes(2000.0), 30.0);
    }

    #[test]
    fn test_zero_distance_takes_minimum_stop_time() {
        assert_eq!(travel_minutes(0.0).unwrap(), 5);
    }

    #[test]
    fn test_travel_minutes_250_km() {
        // 250 / 90 * 60 = 166.67, plus 14 minutes of stops
        assert_eq!(travel_minutes(250.0).unwrap(), 181);
    }

    #[test]
    fn test_rejects_bad_distance() {
        assert_eq!(travel_minutes(-1.0).unwrap_err().code, 104);
        assert!(travel_minutes(f64::NAN).is_err());
        assert!(travel_minutes(f64::INFINITY).is_err());
    }
}
