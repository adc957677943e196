//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the timer works out of the box.

use serde::{Deserialize, Serialize};

use crate::timer::{DurationError, PhaseDurations};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub timer: TimerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Phase lengths. Fixed once the timer is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerConfig {
    #[serde(default = "default_work_secs")]
    pub work_secs: u64,
    #[serde(default = "default_relax_secs")]
    pub relax_secs: u64,
}

impl TimerConfig {
    pub fn durations(&self) -> Result<PhaseDurations, DurationError> {
        PhaseDurations::from_secs(self.work_secs, self.relax_secs)
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            work_secs: default_work_secs(),
            relax_secs: default_relax_secs(),
        }
    }
}

/// Diagnostic log file settings. The terminal is owned by the UI, so logs
/// only ever go to a file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// `tracing-subscriber` filter directive, e.g. `"debug"` or
    /// `"tomato_timer=trace"`.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_level(),
        }
    }
}

fn default_work_secs() -> u64 {
    10
}
fn default_relax_secs() -> u64 {
    5
}
fn default_log_dir() -> String {
    "~/.local/share/tomato-timer/logs".to_string()
}
fn default_level() -> String {
    "info".to_string()
}
