use geo_types::Point;
use serde::{Deserialize, Serialize};

use crate::error::{invalid_coordinates_error, missing_coordinates_error, Error};

/// A latitude/longitude pair in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGeoPoint")]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

#[derive(Deserialize)]
struct RawGeoPoint {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawGeoPoint> for GeoPoint {
    type Error = Error;

    fn try_from(raw: RawGeoPoint) -> Result<Self, Self::Error> {
        GeoPoint::new(raw.latitude, raw.longitude)
    }
}

impl GeoPoint {
    /// Rejects non-finite values and anything outside [-90, 90] / [-180, 180].
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, Error> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(invalid_coordinates_error());
        }

        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(invalid_coordinates_error());
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl From<GeoPoint> for Point<f64> {
    fn from(point: GeoPoint) -> Self {
        Point::new(point.longitude, point.latitude)
    }
}

impl From<GeoPoint> for String {
    fn from(point: GeoPoint) -> Self {
        format!("{},{}", point.latitude, point.longitude)
    }
}

/// Coordinates as received from a client, before validation.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Coordinates {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl Coordinates {
    pub fn to_point(&self) -> Result<GeoPoint, Error> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => GeoPoint::new(latitude, longitude),
            _ => Err(missing_coordinates_error()),
        }
    }

    /// An absent coordinate pair is reported the same way as a partial one.
    pub fn required(coordinates: Option<Coordinates>) -> Result<GeoPoint, Error> {
        coordinates.unwrap_or_default().to_point()
    }
}

/// A city record that may or may not carry resolved coordinates.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl City {
    pub fn new(name: &str, state: Option<&str>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            state: state.map(Into::into),
            latitude: Some(latitude),
            longitude: Some(longitude),
        }
    }

    pub fn coordinates(&self) -> Result<GeoPoint, Error> {
        Coordinates {
            latitude: self.latitude,
            longitude: self.longitude,
        }
        .to_point()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_out_of_range_latitude() {
        let err = GeoPoint::new(91.0, 0.0).unwrap_err();
        assert_eq!(err.code, 103);
    }

    #[test]
    fn test_rejects_nan() {
        assert!(GeoPoint::new(f64::NAN, 10.0).is_err());
        assert!(GeoPoint::new(10.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_point_is_lon_lat() {
        let point: Point<f64> = GeoPoint::new(-23.55, -46.63).unwrap().into();
        assert_eq!(point.x(), -46.63);
        assert_eq!(point.y(), -23.55);
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Result<GeoPoint, _> =
            serde_json::from_str(r#"{"latitude": -22.9, "longitude": -43.2}"#);
        assert!(ok.is_ok());

        let bad: Result<GeoPoint, _> =
            serde_json::from_str(r#"{"latitude": -122.9, "longitude": -43.2}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_required_coordinates() {
        assert_eq!(Coordinates::required(None).unwrap_err().code, 102);

        let partial = Coordinates {
            latitude: Some(-22.9),
            longitude: None,
        };
        assert_eq!(Coordinates::required(Some(partial)).unwrap_err().code, 102);

        let out_of_range = Coordinates {
            latitude: Some(120.0),
            longitude: Some(-43.2),
        };
        assert_eq!(Coordinates::required(Some(out_of_range)).unwrap_err().code, 103);
    }

    #[test]
    fn test_city_without_coordinates() {
        let city = City {
            name: "Campinas".into(),
            state: Some("SP".into()),
            latitude: Some(-22.9),
            longitude: None,
        };

        assert_eq!(city.coordinates().unwrap_err().code, 102);
    }
}
