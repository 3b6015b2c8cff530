//! Command Publisher
//!
//! Publishes a checkout by running the platform's CLI (`flyctl deploy`, ...)
//! in the checkout root and reading its verdict from the exit status and output.

use std::process::Command;

use crate::domain::entities::LogLine;
use crate::domain::ports::{CredentialContext, Publication, PublishError, PublishRequest, Publisher};
use crate::domain::services::{classify_failure, FailureClass};
use crate::domain::value_objects::DeployUrl;
use crate::infrastructure::process::run_streaming;

/// Publisher backed by the profile's `program` and `deploy_args`
#[derive(Debug, Default, Clone, Copy)]
pub struct CommandPublisher;

impl CommandPublisher {
    pub fn new() -> Self {
        Self
    }

    fn command(
        &self,
        request: &PublishRequest<'_>,
        program: &str,
        credentials: &CredentialContext,
    ) -> Command {
        let mut cmd = Command::new(program);
        cmd.args(request.profile.render_args(request.app, request.entrypoint))
            .current_dir(request.checkout.root());

        if let Some(var) = credentials.env_var() {
            cmd.env(var, credentials.expose_secret());
        }
        // Overrides go last so an explicit --env wins
        for (key, value) in request.env.iter() {
            cmd.env(key, value);
        }
        cmd
    }
}

impl Publisher for CommandPublisher {
    fn publish(
        &self,
        request: &PublishRequest<'_>,
        credentials: &CredentialContext,
        on_line: &mut dyn FnMut(&LogLine),
    ) -> Result<Publication, PublishError> {
        let profile = request.profile;
        let program = profile.program.as_deref().ok_or_else(|| PublishError::Build {
            reason: format!("platform '{}' has no publish program", profile.name),
            log: Vec::new(),
        })?;

        let run = run_streaming(&mut self.command(request, program, credentials), on_line)
            .map_err(|e| PublishError::Build {
                reason: format!("could not run {}: {}", program, e),
                log: Vec::new(),
            })?;

        if !run.success {
            let detail = run
                .last_error_line()
                .map(|line| format!(": {}", line))
                .unwrap_or_default();
            let reason = format!("{} failed with {}{}", program, run.describe_exit(), detail);
            let class = classify_failure(
                run.log.iter().map(|l| l.text.as_str()),
                &profile.auth_markers,
            );
            return Err(match class {
                FailureClass::Authentication => PublishError::Authentication {
                    reason,
                    log: run.log,
                },
                FailureClass::Build => PublishError::Build {
                    reason,
                    log: run.log,
                },
            });
        }

        let url = run
            .log
            .iter()
            .find_map(|line| DeployUrl::find_in(&line.text, &profile.domain))
            .map(Ok)
            .unwrap_or_else(|| DeployUrl::new(request.app, &profile.domain))
            .map_err(|reason| PublishError::Build {
                reason,
                log: run.log.clone(),
            })?;

        Ok(Publication { url, log: run.log })
    }
}
