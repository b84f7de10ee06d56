//! Configuration file support.
//!
//! A missing file at the default location means "use defaults"; an explicit
//! `--config` path must exist.

pub mod loader;
pub mod types;

pub use loader::ConfigError;
pub use types::{Config, CounterConfig, LoggingConfig, UiConfig};
