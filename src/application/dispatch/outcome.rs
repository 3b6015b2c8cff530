//! Dispatch Outcome

use crate::domain::entities::DeploymentRecord;
use crate::domain::value_objects::{DeployUrl, DeploymentState};

/// Successful (or planned) dispatch
#[derive(Debug, Clone)]
pub struct DispatchOutcome {
    /// What the platform reported
    pub record: DeploymentRecord,
    /// Human readable plan, set on dry runs
    pub plan: Option<String>,
    /// Non-fatal findings raised during dispatch
    pub warnings: Vec<String>,
}

impl DispatchOutcome {
    pub fn state(&self) -> DeploymentState {
        self.record.state
    }

    pub fn url(&self) -> Option<&DeployUrl> {
        self.record.url.as_ref()
    }

    /// Whether the platform was asked to build something
    pub fn triggered(&self) -> bool {
        matches!(
            self.record.state,
            DeploymentState::Live | DeploymentState::Deploying
        )
    }

    pub fn is_dry_run(&self) -> bool {
        self.plan.is_some()
    }
}
