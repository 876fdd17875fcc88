//! # kundali_config
//!
//! Layered configuration loading for the kundali tools using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`KUNDALI_*` prefix, `__` as separator)
//! 2. An explicit TOML file (the CLI's `--config`)
//! 3. Project-level `kundali.toml` in the working directory
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `KUNDALI_CHART__AYANAMSA` -> `chart.ayanamsa`,
//! `KUNDALI_OUTPUT__FORMAT` -> `output.format`, and
//! `KUNDALI_CHART__REFERENCE_STAR__RA_DEG` -> `chart.reference_star.ra_deg`.
//!
//! # Usage
//!
//! ```no_run
//! use kundali_config::KundaliConfig;
//!
//! let config = KundaliConfig::load().expect("config");
//! println!("ayanamsa: {}", config.chart.ayanamsa.name());
//! ```

mod error;
mod output;

pub use error::ConfigError;
pub use output::{LOG_LEVELS, OutputConfig, OutputFormat};

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use kundali_chart::ChartSettings;
use serde::{Deserialize, Serialize};

/// Project-level configuration file name.
pub const PROJECT_CONFIG_FILE: &str = "kundali.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "KUNDALI_";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct KundaliConfig {
    #[serde(default)]
    pub chart: ChartSettings,
    #[serde(default)]
    pub output: OutputConfig,
}

impl KundaliConfig {
    /// Load from defaults, `kundali.toml`, and the environment, then validate.
    pub fn load() -> Result<Self, ConfigError> {
        Self::extract(Self::figment(None))
    }

    /// Like [`load`](Self::load), with `path` layered above `kundali.toml`.
    ///
    /// Unlike the project file, an explicit path must exist.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ConfigError::invalid(
                "config",
                format!("{} does not exist", path.display()),
            ));
        }
        Self::extract(Self::figment(Some(path)))
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or add providers on top.
    pub fn figment(explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        let project = PathBuf::from(PROJECT_CONFIG_FILE);
        if project.exists() {
            figment = figment.merge(Toml::file(project));
        }

        if let Some(path) = explicit {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    fn extract(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that deserialize but cannot be used.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let star = &self.chart.reference_star;
        if star.name.trim().is_empty() {
            return Err(ConfigError::invalid(
                "chart.reference_star.name",
                "must not be empty",
            ));
        }
        star.validate()
            .map_err(|e| ConfigError::invalid("chart.reference_star", e.to_string()))?;
        if !self.output.log_level_is_known() {
            return Err(ConfigError::invalid(
                "output.log_level",
                format!(
                    "'{}' is not one of {}",
                    self.output.log_level,
                    LOG_LEVELS.join(", ")
                ),
            ));
        }
        Ok(())
    }
}
