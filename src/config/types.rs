use crate::ui::app::Page;
use crate::ui::counter::{DEFAULT_INITIAL_VALUE, DEFAULT_STEP};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub counter: CounterConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// Counter page mount values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// Value shown on mount and restored by Reset (default: 0).
    pub initial_value: i64,
    /// Amount added or subtracted per action (default: 1). May be negative.
    pub step: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Page shown at startup (default: home).
    pub start_page: Page,
    /// Redraw interval in milliseconds when idle (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file. Logging is off when unset, since the UI owns the terminal.
    pub file: Option<PathBuf>,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            initial_value: DEFAULT_INITIAL_VALUE,
            step: DEFAULT_STEP,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            start_page: Page::default(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
