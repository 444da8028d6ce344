use std::time::Duration;

use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::Error;

pub const ENV_PREFIX: &str = "SENSOR_SIM_";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    pub base_url: String,
    pub road_id: String,
    pub timeout_ms: u64,
    pub interval_ms: u64,
    /// Stop after this many sends. Unset means run until killed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iterations: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:4000".to_string(),
            road_id: "road-1".to_string(),
            timeout_ms: 2000,
            interval_ms: 1500,
            iterations: None,
        }
    }
}

impl Config {
    /// Defaults, overridden by `SENSOR_SIM_*` environment variables.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn load() -> Result<Self, Error> {
        Self::from_figment(Self::figment())
    }

    pub fn from_figment(figment: Figment) -> Result<Self, Error> {
        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        let base = Url::parse(&self.base_url)
            .map_err(|e| Error::InvalidConfig(format!("base_url {:?}: {}", self.base_url, e)))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(Error::InvalidConfig(format!(
                "base_url {:?}: unsupported scheme {}",
                self.base_url,
                base.scheme()
            )));
        }
        if self.road_id.trim().is_empty() {
            return Err(Error::InvalidConfig("road_id is empty".to_string()));
        }
        if self.timeout_ms == 0 {
            return Err(Error::InvalidConfig("timeout_ms must be > 0".to_string()));
        }
        Ok(())
    }

    /// `{base_url}/api/sensor/{road_id}`
    pub fn endpoint(&self) -> String {
        format!("{}/api/sensor/{}", self.base_url.trim_end_matches('/'), self.road_id)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}
