use anyhow::Context;
use serde::Deserialize;
use std::{env, fs, path::Path};
use tracing::{debug, warn};

use crate::core::delivery_mode::DeliveryMode;

/// Environment variable that overrides `delivery.default_mode`.
pub const DEFAULT_MODE_ENV: &str = "DELIVERY_MODE_DEFAULT";

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct DeliveryConfig {
    #[serde(default)]
    pub default_mode: DeliveryMode,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub delivery: DeliveryConfig,
}

impl Config {
    pub fn from_toml_str(raw: &str) -> Result<Self, anyhow::Error> {
        let config: Config = toml::from_str(raw)?;
        Ok(config)
    }

    /// Replaces `default_mode` when `value` is present and non-empty.
    pub fn apply_override(&mut self, value: Option<&str>) -> Result<(), anyhow::Error> {
        let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
            return Ok(());
        };
        match raw.parse::<DeliveryMode>() {
            Ok(mode) => {
                debug!(%mode, "default delivery mode overridden from {DEFAULT_MODE_ENV}");
                self.delivery.default_mode = mode;
                Ok(())
            }
            Err(e) => {
                warn!(value = raw, "rejected {DEFAULT_MODE_ENV}: {e}");
                Err(anyhow::Error::new(e).context(format!("invalid {DEFAULT_MODE_ENV}")))
            }
        }
    }
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, anyhow::Error> {
    let path = path.as_ref();
    let raw: String = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let mut config = Config::from_toml_str(&raw)
        .with_context(|| format!("failed to parse config {}", path.display()))?;

    apply_env_override(&mut config)?;

    debug!(
        path = %path.display(),
        default_mode = %config.delivery.default_mode,
        "loaded config"
    );
    Ok(config)
}

/// Loads `path` when given; otherwise built-in defaults. `DELIVERY_MODE_DEFAULT`
/// applies in both cases. An explicit path that cannot be read is an error.
pub fn resolve_config<P: AsRef<Path>>(path: Option<P>) -> Result<Config, anyhow::Error> {
    match path {
        Some(path) => load_config(path),
        None => {
            let mut config = Config::default();
            apply_env_override(&mut config)?;
            debug!(
                default_mode = %config.delivery.default_mode,
                "no config file given, using defaults"
            );
            Ok(config)
        }
    }
}

fn apply_env_override(config: &mut Config) -> Result<(), anyhow::Error> {
    let env_value = env::var(DEFAULT_MODE_ENV).ok();
    config.apply_override(env_value.as_deref())
}
