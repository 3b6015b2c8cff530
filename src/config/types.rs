//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::application::dispatch::DEFAULT_ENTRYPOINT;
use crate::domain::entities::{builtin_profiles, PlatformProfile};
use crate::domain::value_objects::{DeploymentTarget, EnvOverrides};
use crate::error::{DashError, DashResult};

use super::loader::{self, ConfigWarning};

/// The dashboard being deployed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// App name; defaults to the slugified checkout directory name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default = "default_platform")]
    pub platform: String,

    /// Overrides the platform profile's target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<DeploymentTarget>,

    #[serde(default = "default_entrypoint")]
    pub entrypoint: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: None,
            platform: default_platform(),
            target: None,
            entrypoint: default_entrypoint(),
        }
    }
}

fn default_platform() -> String {
    "streamlit".to_string()
}

fn default_entrypoint() -> String {
    DEFAULT_ENTRYPOINT.to_string()
}

/// `--verify` polling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyConfig {
    #[serde(default = "default_attempts")]
    pub attempts: u32,

    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            attempts: default_attempts(),
            interval_secs: default_interval_secs(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_attempts() -> u32 {
    3
}

fn default_interval_secs() -> u64 {
    5
}

fn default_timeout_secs() -> u64 {
    10
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,

    /// Env overrides applied to every `cli` dispatch, before `--env`
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub env: BTreeMap<String, String>,

    #[serde(default)]
    pub verify: VerifyConfig,

    #[serde(default)]
    pub output: OutputConfig,

    /// Extra or overriding platform profiles, keyed by name
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub platforms: BTreeMap<String, PlatformProfile>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> DashResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> DashResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Resolve the config file for `project_root` and apply env overrides.
    ///
    /// A config file that exists but cannot be parsed is an error.
    pub fn discover(project_root: &Path) -> DashResult<(Self, Vec<ConfigWarning>)> {
        loader::discover(project_root)
    }

    /// Apply environment variable overrides (DASHCTL_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Built-in profiles overlaid with configured ones
    pub fn effective_platforms(&self) -> BTreeMap<String, PlatformProfile> {
        let mut platforms = builtin_profiles();
        for (name, profile) in &self.platforms {
            platforms.insert(name.clone(), profile.clone().with_name(name.clone()));
        }
        platforms
    }

    /// Look up a platform profile by name
    pub fn platform(&self, name: &str) -> DashResult<PlatformProfile> {
        let mut platforms = self.effective_platforms();
        platforms
            .remove(name)
            .ok_or_else(|| DashError::UnknownPlatform {
                name: name.to_string(),
                known: platforms.keys().cloned().collect::<Vec<_>>().join(", "),
            })
    }

    /// Configured env overrides
    pub fn env_overrides(&self) -> EnvOverrides {
        self.env
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}
