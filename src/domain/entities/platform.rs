//! Hosting platform profile
//!
//! A profile tells the dispatcher how one hosting platform expects to be fed:
//! which target it supports, its public domain, and (for CLI-driven platforms)
//! which program publishes the checkout.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::DeploymentTarget;

/// Placeholders accepted in `deploy_args`
pub const PLACEHOLDERS: &[&str] = &["{app}", "{entrypoint}", "{manifest}"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformProfile {
    /// Filled from the table key when loading config
    #[serde(skip)]
    pub name: String,

    /// Default target when `--target` is not given
    pub target: DeploymentTarget,

    /// Public domain, apps live at `https://<app>.<domain>`
    pub domain: String,

    /// Dependency manifest at the checkout root
    #[serde(default = "default_manifest")]
    pub manifest: String,

    /// Git remote the platform tracks
    #[serde(default = "default_remote")]
    pub remote: String,

    /// Branch the platform tracks
    #[serde(default = "default_branch")]
    pub branch: String,

    /// Publish program for `cli` targets (e.g. `flyctl`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,

    /// Arguments for `program`, with `{app}`, `{entrypoint}`, `{manifest}` placeholders
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub deploy_args: Vec<String>,

    /// Env var carrying the credential into `program`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_env: Option<String>,

    /// Command printing a token on stdout when `token_env` is unset
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub auth_command: Vec<String>,

    /// Extra output fragments meaning "credentials rejected"
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub auth_markers: Vec<String>,

    /// Env var that receives `--port`
    #[serde(default = "default_port_env")]
    pub port_env: String,
}

fn default_manifest() -> String {
    "requirements.txt".to_string()
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_branch() -> String {
    "main".to_string()
}

fn default_port_env() -> String {
    "STREAMLIT_SERVER_PORT".to_string()
}

impl PlatformProfile {
    /// Profile for a platform that rebuilds on push
    pub fn git(name: &str, domain: &str) -> Self {
        Self {
            name: name.to_string(),
            target: DeploymentTarget::GitIntegration,
            domain: domain.to_string(),
            manifest: default_manifest(),
            remote: default_remote(),
            branch: default_branch(),
            program: None,
            deploy_args: Vec::new(),
            token_env: None,
            auth_command: Vec::new(),
            auth_markers: Vec::new(),
            port_env: default_port_env(),
        }
    }

    /// Profile for a platform published through its own CLI
    pub fn cli(name: &str, domain: &str, program: &str, deploy_args: &[&str]) -> Self {
        Self {
            target: DeploymentTarget::DirectCli,
            program: Some(program.to_string()),
            deploy_args: deploy_args.iter().map(|s| s.to_string()).collect(),
            ..Self::git(name, domain)
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Render `deploy_args` for one dispatch
    pub fn render_args(&self, app: &str, entrypoint: &str) -> Vec<String> {
        self.deploy_args
            .iter()
            .map(|arg| {
                arg.replace("{app}", app)
                    .replace("{entrypoint}", entrypoint)
                    .replace("{manifest}", &self.manifest)
            })
            .collect()
    }

    /// Why this profile cannot serve `target`, if it cannot
    pub fn unsupported_reason(&self, target: DeploymentTarget) -> Option<String> {
        match target {
            DeploymentTarget::DirectCli if self.program.is_none() => {
                Some("no publish `program` configured".to_string())
            }
            DeploymentTarget::GitIntegration if self.branch.trim().is_empty() => {
                Some("no tracked `branch` configured".to_string())
            }
            _ => None,
        }
    }
}

/// Platforms known without any config file.
///
/// - `streamlit`: Streamlit Community Cloud, redeploys when the tracked branch changes
/// - `fly`: Fly.io, published with `flyctl deploy`
pub fn builtin_profiles() -> BTreeMap<String, PlatformProfile> {
    let streamlit = PlatformProfile::git("streamlit", "streamlit.app");

    let mut fly = PlatformProfile::cli(
        "fly",
        "fly.dev",
        "flyctl",
        &["deploy", "--app", "{app}", "--remote-only", "--yes"],
    );
    fly.token_env = Some("FLY_API_TOKEN".to_string());
    fly.auth_command = vec!["flyctl".to_string(), "auth".to_string(), "token".to_string()];
    fly.auth_markers = vec!["no access token available".to_string()];
    fly.port_env = "PORT".to_string();

    [streamlit, fly]
        .into_iter()
        .map(|p| (p.name.clone(), p))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_cover_both_targets() {
        let profiles = builtin_profiles();
        assert_eq!(
            profiles["streamlit"].target,
            DeploymentTarget::GitIntegration
        );
        assert_eq!(profiles["fly"].target, DeploymentTarget::DirectCli);
        assert_eq!(profiles["fly"].name, "fly");
    }

    #[test]
    fn render_args_substitutes_placeholders() {
        let mut profile = PlatformProfile::cli(
            "demo",
            "demo.dev",
            "demo",
            &["up", "{app}", "--main={entrypoint}", "--deps", "{manifest}"],
        );
        profile.manifest = "reqs.txt".to_string();
        assert_eq!(
            profile.render_args("painel", "app/pages/dashboard.py"),
            vec![
                "up",
                "painel",
                "--main=app/pages/dashboard.py",
                "--deps",
                "reqs.txt"
            ]
        );
    }

    #[test]
    fn git_profile_cannot_publish_directly() {
        let profile = PlatformProfile::git("streamlit", "streamlit.app");
        assert!(profile
            .unsupported_reason(DeploymentTarget::DirectCli)
            .is_some());
        assert!(profile
            .unsupported_reason(DeploymentTarget::GitIntegration)
            .is_none());
    }

    #[test]
    fn toml_profile_fills_defaults() {
        let profile: PlatformProfile = toml::from_str(
            r#"
target = "cli"
domain = "onrender.com"
program = "render"
deploy_args = ["deploy"]
"#,
        )
        .unwrap();
        assert_eq!(profile.manifest, "requirements.txt");
        assert_eq!(profile.branch, "main");
        assert_eq!(profile.port_env, "STREAMLIT_SERVER_PORT");
        assert!(profile.name.is_empty());
    }
}
