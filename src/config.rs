use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    pub aqicn_token: String,
    pub aqicn_base_url: String,
    pub port: u16,
    pub feed_ttl_secs: u64,
    pub search_ttl_secs: u64,
    pub map_bounds_ttl_secs: u64,
    pub upstream_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Config {
            // AQICN API token - get yours at https://aqicn.org/data-platform/token/
            aqicn_token: env::var("AQICN_TOKEN").unwrap_or_else(|_| "demo".to_string()),
            aqicn_base_url: env::var("AQICN_BASE_URL")
                .unwrap_or_else(|_| "https://api.waqi.info".to_string()),
            port: parse_var("PORT", 4000)?,
            feed_ttl_secs: parse_var("CACHE_TTL_FEED_SECS", 300)?,
            search_ttl_secs: parse_var("CACHE_TTL_SEARCH_SECS", 300)?,
            // The two original deployments disagreed here (300s server-side,
            // 600s at the CDN edge); 300s is the default, the knob decides.
            map_bounds_ttl_secs: parse_var("CACHE_TTL_MAP_BOUNDS_SECS", 300)?,
            upstream_timeout_secs: parse_var("UPSTREAM_TIMEOUT_SECS", 10)?,
        })
    }

    pub fn feed_ttl(&self) -> Duration {
        Duration::from_secs(self.feed_ttl_secs)
    }

    pub fn search_ttl(&self) -> Duration {
        Duration::from_secs(self.search_ttl_secs)
    }

    pub fn map_bounds_ttl(&self) -> Duration {
        Duration::from_secs(self.map_bounds_ttl_secs)
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> anyhow::Result<T> {
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| anyhow::anyhow!("{} is not a valid value for {}", raw, name)),
        Err(_) => Ok(default),
    }
}
