//! dashctl - deploy a Streamlit dashboard to its hosting platform
//!
//! dashctl validates the dependency manifest at the root of a checkout, then
//! either confirms and pushes the branch a git-integrated platform watches,
//! or publishes the checkout through the platform's own CLI. Failures end up
//! in one of three classes: missing manifest, authentication, build.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{CheckUseCase, DispatchOptions, DispatchOutcome, DispatchUseCase};
pub use config::Config;
pub use domain::entities::{Manifest, PlatformProfile};
pub use domain::value_objects::{DeployUrl, DeploymentState, DeploymentTarget, EnvOverrides};
pub use error::{DashError, DashResult, DispatchError};
