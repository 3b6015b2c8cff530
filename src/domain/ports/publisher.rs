//! Publisher Port
//!
//! The hosting platform's build pipeline is an opaque collaborator: it gets a
//! checkout and a manifest and answers with a URL or a failure.

use crate::domain::entities::{Checkout, LogLine, Manifest, PlatformProfile};
use crate::domain::value_objects::{DeployUrl, EnvOverrides};

use super::authenticator::CredentialContext;

/// Everything one publish call needs
#[derive(Debug, Clone, Copy)]
pub struct PublishRequest<'a> {
    pub checkout: &'a Checkout,
    pub manifest: &'a Manifest,
    pub profile: &'a PlatformProfile,
    pub app: &'a str,
    pub entrypoint: &'a str,
    pub env: &'a EnvOverrides,
}

/// Successful publish
#[derive(Debug, Clone)]
pub struct Publication {
    pub url: DeployUrl,
    pub log: Vec<LogLine>,
}

/// Classified publish failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishError {
    /// Platform rejected the credential
    Authentication { reason: String, log: Vec<LogLine> },
    /// Install/launch failed, or the publish program could not run
    Build { reason: String, log: Vec<LogLine> },
}

impl PublishError {
    pub fn reason(&self) -> &str {
        match self {
            Self::Authentication { reason, .. } | Self::Build { reason, .. } => reason,
        }
    }

    pub fn log(&self) -> &[LogLine] {
        match self {
            Self::Authentication { log, .. } | Self::Build { log, .. } => log,
        }
    }
}

impl std::fmt::Display for PublishError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Authentication { reason, .. } => write!(f, "authentication rejected: {}", reason),
            Self::Build { reason, .. } => write!(f, "build failed: {}", reason),
        }
    }
}

impl std::error::Error for PublishError {}

/// Synchronous publish through the platform
pub trait Publisher {
    fn publish(
        &self,
        request: &PublishRequest<'_>,
        credentials: &CredentialContext,
        on_line: &mut dyn FnMut(&LogLine),
    ) -> Result<Publication, PublishError>;
}
