//! Authenticators
//!
//! Credentials come from the environment (`FLY_API_TOKEN`, ...) or from the
//! platform CLI's own token command. Nothing is cached between runs.

use std::process::Command;

use crate::domain::entities::PlatformProfile;
use crate::domain::ports::{AuthError, Authenticator, CredentialContext};
use crate::infrastructure::process::run_captured;

type Lookup = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Reads the profile's `token_env` variable
pub struct EnvAuthenticator {
    lookup: Lookup,
}

impl EnvAuthenticator {
    /// Reads the process environment
    pub fn new() -> Self {
        Self::with_lookup(|key| std::env::var(key).ok())
    }

    /// Reads from `lookup` instead of the process environment
    pub fn with_lookup(lookup: impl Fn(&str) -> Option<String> + Send + Sync + 'static) -> Self {
        Self {
            lookup: Box::new(lookup),
        }
    }
}

impl Default for EnvAuthenticator {
    fn default() -> Self {
        Self::new()
    }
}

impl Authenticator for EnvAuthenticator {
    fn authenticate(&self, profile: &PlatformProfile) -> Result<CredentialContext, AuthError> {
        let var = profile
            .token_env
            .as_deref()
            .ok_or_else(|| AuthError::new("no token_env configured"))?;

        let value =
            (self.lookup)(var).ok_or_else(|| AuthError::new(format!("{} is not set", var)))?;

        CredentialContext::new(&profile.name, Some(var.to_string()), "env", value)
            .ok_or_else(|| AuthError::new(format!("{} is empty", var)))
    }
}

/// Runs the profile's `auth_command` and takes its trimmed stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct CommandAuthenticator;

impl CommandAuthenticator {
    pub fn new() -> Self {
        Self
    }
}

impl Authenticator for CommandAuthenticator {
    fn authenticate(&self, profile: &PlatformProfile) -> Result<CredentialContext, AuthError> {
        let (program, args) = profile
            .auth_command
            .split_first()
            .ok_or_else(|| AuthError::new("no auth_command configured"))?;

        let run = run_captured(Command::new(program).args(args))
            .map_err(|e| AuthError::new(format!("could not run {}: {}", program, e)))?;

        if !run.success {
            let detail = run.last_error_line().unwrap_or("no output");
            return Err(AuthError::new(format!(
                "`{}` failed with {}: {}",
                profile.auth_command.join(" "),
                run.describe_exit(),
                detail
            )));
        }

        CredentialContext::new(
            &profile.name,
            profile.token_env.clone(),
            "command",
            run.stdout(),
        )
        .ok_or_else(|| {
            AuthError::new(format!(
                "`{}` printed no token",
                profile.auth_command.join(" ")
            ))
        })
    }
}

/// Tries each authenticator in order; the first credential wins
pub struct ChainAuthenticator {
    members: Vec<Box<dyn Authenticator>>,
}

impl ChainAuthenticator {
    pub fn new(members: Vec<Box<dyn Authenticator>>) -> Self {
        Self { members }
    }

    /// Environment first, then the platform CLI
    pub fn standard() -> Self {
        Self::new(vec![
            Box::new(EnvAuthenticator::new()),
            Box::new(CommandAuthenticator::new()),
        ])
    }
}

impl Authenticator for ChainAuthenticator {
    fn authenticate(&self, profile: &PlatformProfile) -> Result<CredentialContext, AuthError> {
        let mut reasons = Vec::new();
        for member in &self.members {
            match member.authenticate(profile) {
                Ok(credentials) => return Ok(credentials),
                Err(err) => reasons.push(err.reason),
            }
        }
        if reasons.is_empty() {
            reasons.push("no credential source configured".to_string());
        }
        Err(AuthError::new(format!(
            "no credentials for {} ({})",
            profile.name,
            reasons.join("; ")
        )))
    }
}
