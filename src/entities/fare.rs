use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{invalid_input_error, Error};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeatClass {
    Convencional,
    SemiLeito,
    Executivo,
    Leito,
    LeitoCama,
}

impl SeatClass {
    pub const ALL: [SeatClass; 5] = [
        SeatClass::Convencional,
        SeatClass::SemiLeito,
        SeatClass::Executivo,
        SeatClass::Leito,
        SeatClass::LeitoCama,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Convencional => "CONVENCIONAL",
            Self::SemiLeito => "SEMI_LEITO",
            Self::Executivo => "EXECUTIVO",
            Self::Leito => "LEITO",
            Self::LeitoCama => "LEITO_CAMA",
        }
    }

    /// Price per kilometer.
    pub fn rate_per_km(&self) -> f64 {
        match self {
            Self::Convencional => 0.25,
            Self::SemiLeito => 0.35,
            Self::Executivo => 0.45,
            Self::Leito => 0.55,
            Self::LeitoCama => 0.65,
        }
    }
}

impl fmt::Display for SeatClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SeatClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s
            .trim()
            .to_ascii_uppercase()
            .replace(|c: char| c == '-' || c == ' ', "_");

        Self::ALL
            .into_iter()
            .find(|class| class.name() == normalized)
            .ok_or_else(|| invalid_input_error())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FareSpread {
    pub seat_class: String,
    pub base_fare: f64,
    pub fares: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_lenient_on_case_and_separators() {
        assert_eq!("semi-leito".parse::<SeatClass>().unwrap(), SeatClass::SemiLeito);
        assert_eq!(" Leito Cama ".parse::<SeatClass>().unwrap(), SeatClass::LeitoCama);
        assert!("PRIMEIRA".parse::<SeatClass>().is_err());
    }

    #[test]
    fn test_rates_span_table() {
        let rates: Vec<f64> = SeatClass::ALL.iter().map(|c| c.rate_per_km()).collect();
        assert_eq!(rates.first(), Some(&0.25));
        assert_eq!(rates.last(), Some(&0.65));
    }

    #[test]
    fn test_serializes_screaming_snake_case() {
        let json = serde_json::to_string(&SeatClass::SemiLeito).unwrap();
        assert_eq!(json, "\"SEMI_LEITO\"");
    }
}
