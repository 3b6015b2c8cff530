//! Deployment target value object.

use serde::{Deserialize, Serialize};

/// How a checkout reaches the hosting platform.
///
/// - `GitIntegration`: the platform watches a branch and rebuilds on push
/// - `DirectCli`: the operator runs the platform's publish command synchronously
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum DeploymentTarget {
    /// Push to a tracked branch; the platform detects the change
    #[serde(rename = "git", alias = "git-integration")]
    #[value(name = "git", alias = "git-integration")]
    GitIntegration,
    /// Invoke the platform CLI directly
    #[serde(rename = "cli", alias = "direct-cli")]
    #[value(name = "cli", alias = "direct-cli")]
    DirectCli,
}

impl DeploymentTarget {
    /// Short identifier used in config files and JSON output
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GitIntegration => "git",
            Self::DirectCli => "cli",
        }
    }

    /// Human readable label
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::GitIntegration => "Git integration",
            Self::DirectCli => "Direct CLI",
        }
    }

    /// Parse from the identifiers accepted in `DASHCTL_TARGET`
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "git" | "git-integration" | "gitintegration" => Some(Self::GitIntegration),
            "cli" | "direct-cli" | "directcli" => Some(Self::DirectCli),
            _ => None,
        }
    }
}

impl std::fmt::Display for DeploymentTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
