use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteSource {
    Remote,
    Fallback,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteEstimate {
    pub distance_km: f64,
    pub hours: u32,
    pub minutes: u32,
    pub total_minutes: u32,
    pub source: RouteSource,
}

impl RouteEstimate {
    pub fn new(distance_km: f64, total_minutes: u32, source: RouteSource) -> Self {
        Self {
            distance_km,
            hours: total_minutes / 60,
            minutes: total_minutes % 60,
            total_minutes,
            source,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == RouteSource::Fallback
    }
}
