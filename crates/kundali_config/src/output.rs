//! Output configuration.

use serde::{Deserialize, Serialize};

/// Levels accepted by `output.log_level`.
pub const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

fn default_log_level() -> String {
    "warn".to_string()
}

/// Rendering of a computed chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// The serialized chart document.
    #[default]
    Json,
    /// Plain-text reading.
    Narrative,
}

impl OutputFormat {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Narrative => "narrative",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Indent JSON output.
    #[serde(default)]
    pub pretty: bool,

    /// Default `tracing` level when `KUNDALI_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            pretty: false,
            log_level: default_log_level(),
        }
    }
}

impl OutputConfig {
    pub fn log_level_is_known(&self) -> bool {
        LOG_LEVELS
            .iter()
            .any(|l| l.eq_ignore_ascii_case(self.log_level.trim()))
    }
}
