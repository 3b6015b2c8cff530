//! Deployment state value object.

use serde::{Deserialize, Serialize};

/// Lifecycle of a single dispatch as observed from this side.
///
/// ```text
/// NotDeployed ──> Deploying ──> Live
///      │                  └──> Failed
///      ├──> UpToDate (git branch already matches its remote)
///      └──> Failed   (rejected before anything was triggered)
/// ```
///
/// The platform drives the real transitions; dashctl only triggers and polls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeploymentState {
    #[default]
    NotDeployed,
    Deploying,
    Live,
    Failed,
    UpToDate,
}

impl DeploymentState {
    pub fn can_transition_to(self, next: DeploymentState) -> bool {
        use DeploymentState::*;
        matches!(
            (self, next),
            (NotDeployed, Deploying)
                | (NotDeployed, UpToDate)
                | (NotDeployed, Failed)
                | (Deploying, Live)
                | (Deploying, Failed)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Live | Self::Failed | Self::UpToDate)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotDeployed => "not_deployed",
            Self::Deploying => "deploying",
            Self::Live => "live",
            Self::Failed => "failed",
            Self::UpToDate => "up_to_date",
        }
    }
}

impl std::fmt::Display for DeploymentState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
