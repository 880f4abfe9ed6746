use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{config_error, Error};
use crate::estimation::DEFAULT_VARIATION_PERCENT;

#[derive(Clone, Debug)]
pub struct Config {
    pub bind_addr: SocketAddr,
    /// Base URL of an OSRM-compatible service. Without it only the heuristic
    /// estimate is used.
    pub routing_api_base: Option<String>,
    pub routing_timeout: Duration,
    pub route_cache_ttl: Duration,
    pub fare_variation_percent: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            routing_api_base: None,
            routing_timeout: Duration::from_secs(10),
            route_cache_ttl: Duration::from_secs(60 * 60),
            fare_variation_percent: DEFAULT_VARIATION_PERCENT,
        }
    }
}

fn parse_var<T>(key: &str) -> Result<Option<T>, Error>
where
    T: FromStr,
    T::Err: std::fmt::Debug,
{
    match env::var(key) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|err| config_error(key, err)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

impl Config {
    /// Reads the environment, after loading `.env` if there is one.
    pub fn from_env() -> Result<Self, Error> {
        _ = dotenv::dotenv();

        let defaults = Self::default();

        let fare_variation_percent =
            parse_var("FARE_VARIATION_PERCENT")?.unwrap_or(defaults.fare_variation_percent);
        if !fare_variation_percent.is_finite() || fare_variation_percent < 0.0 {
            return Err(config_error("FARE_VARIATION_PERCENT", fare_variation_percent));
        }

        Ok(Self {
            bind_addr: parse_var("BIND_ADDR")?.unwrap_or(defaults.bind_addr),
            routing_api_base: parse_var("ROUTING_API_BASE")?,
            routing_timeout: parse_var("ROUTING_TIMEOUT_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.routing_timeout),
            route_cache_ttl: parse_var("ROUTE_CACHE_TTL_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.route_cache_ttl),
            fare_variation_percent,
        })
    }
}
