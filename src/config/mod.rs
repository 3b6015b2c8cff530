//! Configuration module for dashctl
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (DASHCTL_*)
//! 3. Config file: `DASHCTL_CONFIG`, else project `dashctl.toml`, else
//!    user `~/.config/dashctl/config.toml`
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{PROJECT_CONFIG_FILE, USER_CONFIG_FILE};
pub use types::{AppConfig, ColorMode, Config, OutputConfig, VerifyConfig};
