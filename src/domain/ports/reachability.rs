//! Reachability Port
//!
//! Used by `deploy --verify` to poll the public URL after the platform
//! reports success.

use crate::domain::value_objects::DeployUrl;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    /// Server answered with a non-success status
    Status(u16),
    /// No answer (DNS, TLS, timeout, ...)
    Unreachable(String),
}

impl std::fmt::Display for ProbeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Status(code) => write!(f, "HTTP status {}", code),
            Self::Unreachable(msg) => write!(f, "unreachable: {}", msg),
        }
    }
}

impl std::error::Error for ProbeError {}

pub trait ReachabilityProbe {
    /// Returns the HTTP status once the URL answers successfully
    fn probe(&self, url: &DeployUrl) -> Result<u16, ProbeError>;
}
