//! Deployment record
//!
//! An ephemeral view of what the platform reported for one dispatch. It is
//! returned to the caller and rendered, never written anywhere.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::value_objects::{DeployUrl, DeploymentState, DeploymentTarget};

/// One line of platform output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogLine {
    pub stream: &'static str,
    pub text: String,
}

impl LogLine {
    pub fn stdout(text: impl Into<String>) -> Self {
        Self {
            stream: "stdout",
            text: text.into(),
        }
    }

    pub fn stderr(text: impl Into<String>) -> Self {
        Self {
            stream: "stderr",
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DeploymentRecord {
    pub platform: String,
    pub target: DeploymentTarget,
    pub app: String,
    pub state: DeploymentState,
    pub url: Option<DeployUrl>,
    pub manifest_fingerprint: String,
    pub log: Vec<LogLine>,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl DeploymentRecord {
    pub fn begin(
        platform: impl Into<String>,
        target: DeploymentTarget,
        app: impl Into<String>,
        manifest_fingerprint: impl Into<String>,
    ) -> Self {
        Self {
            platform: platform.into(),
            target,
            app: app.into(),
            state: DeploymentState::NotDeployed,
            url: None,
            manifest_fingerprint: manifest_fingerprint.into(),
            log: Vec::new(),
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    /// Move to `next` if the lifecycle allows it; returns whether it moved.
    pub fn advance(&mut self, next: DeploymentState) -> bool {
        if !self.state.can_transition_to(next) {
            return false;
        }
        self.state = next;
        if next.is_terminal() {
            self.finished_at = Some(Utc::now());
        }
        true
    }

    pub fn is_live(&self) -> bool {
        self.state == DeploymentState::Live
    }

    /// Last `n` log lines as plain text
    pub fn log_tail(&self, n: usize) -> Vec<String> {
        let skip = self.log.len().saturating_sub(n);
        self.log.iter().skip(skip).map(|l| l.text.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> DeploymentRecord {
        DeploymentRecord::begin("fly", DeploymentTarget::DirectCli, "painel", "sha256:00")
    }

    #[test]
    fn advance_follows_lifecycle() {
        let mut rec = record();
        assert!(!rec.advance(DeploymentState::Live));
        assert!(rec.advance(DeploymentState::Deploying));
        assert!(rec.finished_at.is_none());
        assert!(rec.advance(DeploymentState::Live));
        assert!(rec.finished_at.is_some());
        assert!(rec.is_live());
        assert!(!rec.advance(DeploymentState::Failed));
    }

    #[test]
    fn log_tail_keeps_last_lines() {
        let mut rec = record();
        for i in 0..5 {
            rec.log.push(LogLine::stdout(format!("line {i}")));
        }
        assert_eq!(rec.log_tail(2), vec!["line 3", "line 4"]);
        assert_eq!(rec.log_tail(10).len(), 5);
    }
}
