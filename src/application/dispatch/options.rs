//! Dispatch Options

use std::path::PathBuf;

use crate::domain::entities::PlatformProfile;
use crate::domain::value_objects::{DeploymentTarget, EnvOverrides};

/// Default Streamlit entry point of the dashboard
pub const DEFAULT_ENTRYPOINT: &str = "app/pages/dashboard.py";

/// Options for the dispatch use case
#[derive(Debug, Clone)]
pub struct DispatchOptions {
    /// Checkout root
    pub checkout: PathBuf,
    /// Platform being deployed to
    pub profile: PlatformProfile,
    /// Strategy (defaults to the profile's)
    pub target: DeploymentTarget,
    /// App name, first label of the public URL
    pub app: String,
    /// Dashboard entry point, relative to the checkout
    pub entrypoint: String,
    /// Env passed through to the platform (`cli` target only)
    pub env: EnvOverrides,
    /// Git target: push the tracked branch
    pub push: bool,
    /// Poll the URL before declaring the deployment live
    pub verify: bool,
    /// Validate and plan, trigger nothing
    pub dry_run: bool,
}

impl DispatchOptions {
    pub fn new(
        checkout: impl Into<PathBuf>,
        profile: PlatformProfile,
        app: impl Into<String>,
    ) -> Self {
        Self {
            checkout: checkout.into(),
            target: profile.target,
            profile,
            app: app.into(),
            entrypoint: DEFAULT_ENTRYPOINT.to_string(),
            env: EnvOverrides::new(),
            push: false,
            verify: false,
            dry_run: false,
        }
    }

    pub fn with_target(mut self, target: DeploymentTarget) -> Self {
        self.target = target;
        self
    }

    pub fn with_entrypoint(mut self, entrypoint: impl Into<String>) -> Self {
        self.entrypoint = entrypoint.into();
        self
    }

    pub fn with_env(mut self, env: EnvOverrides) -> Self {
        self.env = env;
        self
    }

    pub fn with_push(mut self, push: bool) -> Self {
        self.push = push;
        self
    }

    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
