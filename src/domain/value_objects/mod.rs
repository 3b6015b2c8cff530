//! Domain Value Objects
//!
//! Immutable value types that represent deployment concepts.

mod config_warning;
mod deploy_url;
mod deployment_state;
mod deployment_target;
mod env_overrides;

pub use config_warning::ConfigWarning;
pub use deploy_url::{validate_app_name, DeployUrl};
pub use deployment_state::DeploymentState;
pub use deployment_target::DeploymentTarget;
pub use env_overrides::EnvOverrides;
