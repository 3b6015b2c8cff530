//! Check Use Case
//!
//! Local pre-flight report for a checkout: the manifest, the entry point and
//! the platform profile. Never touches the network or runs the platform CLI.

use std::path::PathBuf;

use crate::domain::entities::{Checkout, Manifest, PlatformProfile, PLACEHOLDERS};
use crate::domain::value_objects::{validate_app_name, ConfigWarning, DeploymentTarget};

/// Options for the check operation
#[derive(Debug, Clone)]
pub struct CheckOptions {
    pub checkout: PathBuf,
    pub profile: PlatformProfile,
    pub target: DeploymentTarget,
    pub app: String,
    pub entrypoint: String,
    /// Warnings collected while loading config
    pub config_warnings: Vec<ConfigWarning>,
}

/// Result of a single check
#[derive(Debug, Clone)]
pub struct CheckItem {
    /// Name of the check
    pub name: String,
    /// Status of the check
    pub status: CheckStatus,
    /// Human-readable message
    pub message: String,
    /// Recommendation for fixing issues
    pub recommendation: Option<String>,
}

/// Status of a check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Warning,
    Error,
}

impl CheckStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// Result of the check operation
#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    pub items: Vec<CheckItem>,
}

impl CheckReport {
    fn push(
        &mut self,
        name: &str,
        status: CheckStatus,
        message: impl Into<String>,
        recommendation: Option<String>,
    ) {
        self.items.push(CheckItem {
            name: name.to_string(),
            status,
            message: message.into(),
            recommendation,
        });
    }

    fn count(&self, status: CheckStatus) -> usize {
        self.items.iter().filter(|i| i.status == status).count()
    }

    pub fn passes(&self) -> usize {
        self.count(CheckStatus::Pass)
    }

    pub fn warnings(&self) -> usize {
        self.count(CheckStatus::Warning)
    }

    pub fn errors(&self) -> usize {
        self.count(CheckStatus::Error)
    }

    /// No errors
    pub fn is_success(&self) -> bool {
        self.errors() == 0
    }

    /// No errors and no warnings
    pub fn is_clean(&self) -> bool {
        self.errors() == 0 && self.warnings() == 0
    }
}

/// Check Use Case
#[derive(Debug, Default)]
pub struct CheckUseCase;

impl CheckUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, options: &CheckOptions) -> CheckReport {
        let mut report = CheckReport::default();
        let checkout = Checkout::new(&options.checkout);

        self.check_manifest(&checkout, options, &mut report);
        self.check_entrypoint(&checkout, options, &mut report);
        self.check_profile(options, &mut report);

        for warning in &options.config_warnings {
            report.push(
                "config",
                CheckStatus::Warning,
                warning.to_string(),
                warning
                    .suggestion
                    .as_ref()
                    .map(|s| format!("Rename '{}' to '{}'", warning.key, s)),
            );
        }

        report
    }

    fn check_manifest(
        &self,
        checkout: &Checkout,
        options: &CheckOptions,
        report: &mut CheckReport,
    ) {
        let manifest = match Manifest::load(checkout, &options.profile.manifest) {
            Ok(manifest) => manifest,
            Err(err) => {
                report.push(
                    "manifest",
                    CheckStatus::Error,
                    err.to_string(),
                    Some(format!(
                        "Create {} at the checkout root listing the dashboard's packages",
                        options.profile.manifest
                    )),
                );
                return;
            }
        };

        if manifest.is_empty() {
            report.push(
                "manifest",
                CheckStatus::Error,
                format!("{} lists no packages", options.profile.manifest),
                Some(
                    "Add at least streamlit and the data libraries the dashboard imports"
                        .to_string(),
                ),
            );
        } else {
            report.push(
                "manifest",
                CheckStatus::Pass,
                format!(
                    "{} lists {} packages ({})",
                    options.profile.manifest,
                    manifest.requirements().len(),
                    manifest.fingerprint()
                ),
                None,
            );
        }

        let unpinned = manifest.unpinned();
        if !unpinned.is_empty() {
            let names: Vec<&str> = unpinned.iter().map(|r| r.name.as_str()).collect();
            report.push(
                "pinning",
                CheckStatus::Warning,
                format!("unpinned packages: {}", names.join(", ")),
                Some("Pin with == so platform rebuilds are reproducible".to_string()),
            );
        }

        let duplicates = manifest.duplicates();
        if !duplicates.is_empty() {
            report.push(
                "duplicates",
                CheckStatus::Warning,
                format!("listed more than once: {}", duplicates.join(", ")),
                None,
            );
        }

        for option in manifest.options() {
            let included = option
                .strip_prefix("-r")
                .or_else(|| option.strip_prefix("--requirement"))
                .map(|rest| rest.trim_start_matches('=').trim());
            if let Some(file) = included.filter(|f| !f.is_empty()) {
                if !checkout.join(file).is_file() {
                    report.push(
                        "includes",
                        CheckStatus::Warning,
                        format!("included file {} does not exist", file),
                        None,
                    );
                }
            }
        }
    }

    fn check_entrypoint(
        &self,
        checkout: &Checkout,
        options: &CheckOptions,
        report: &mut CheckReport,
    ) {
        if checkout.join(&options.entrypoint).is_file() {
            report.push(
                "entrypoint",
                CheckStatus::Pass,
                format!("{} exists", options.entrypoint),
                None,
            );
        } else {
            report.push(
                "entrypoint",
                CheckStatus::Warning,
                format!("{} not found", options.entrypoint),
                Some("Set [app] entrypoint in dashctl.toml".to_string()),
            );
        }
    }

    fn check_profile(&self, options: &CheckOptions, report: &mut CheckReport) {
        let profile = &options.profile;

        match profile.unsupported_reason(options.target) {
            Some(reason) => report.push(
                "platform",
                CheckStatus::Error,
                format!("{} cannot use {} target: {}", profile.name, options.target, reason),
                None,
            ),
            None => report.push(
                "platform",
                CheckStatus::Pass,
                format!("{} via {}", profile.name, options.target.display_name()),
                None,
            ),
        }

        if let Err(reason) = validate_app_name(&options.app) {
            report.push(
                "app",
                CheckStatus::Error,
                format!("app name '{}' is invalid: {}", options.app, reason),
                Some("Use lowercase letters, digits and '-'".to_string()),
            );
        }

        if options.target == DeploymentTarget::DirectCli {
            for arg in &profile.deploy_args {
                if let Some(unknown) = unknown_placeholder(arg) {
                    report.push(
                        "placeholders",
                        CheckStatus::Warning,
                        format!("deploy argument '{}' uses unknown placeholder {}", arg, unknown),
                        Some(format!("Known placeholders: {}", PLACEHOLDERS.join(", "))),
                    );
                }
            }
        }
    }
}

fn unknown_placeholder(arg: &str) -> Option<String> {
    let mut rest = arg;
    while let Some(start) = rest.find('{') {
        let tail = &rest[start..];
        let end = tail.find('}')?;
        let candidate = &tail[..=end];
        if !PLACEHOLDERS.contains(&candidate) {
            return Some(candidate.to_string());
        }
        rest = &tail[end + 1..];
    }
    None
}
