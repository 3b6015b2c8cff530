//! Dispatch Use Case
//!
//! Orchestrates one deployment:
//! 1. Validate the manifest at the checkout root (local, no network)
//! 2. Resolve the public URL for the app
//! 3. Run the strategy for the target (git confirmation/push or CLI publish)
//! 4. Optionally poll the URL before declaring the deployment live
//!
//! This use case is pure orchestration; the platform itself sits behind ports.

use std::path::Path;
use std::sync::Arc;

use crate::domain::entities::{Checkout, DeploymentRecord, LogLine, Manifest};
use crate::domain::ports::{
    Authenticator, DeployEvent, DeployEventSink, NoopEventSink, ProbeError, PublishError,
    PublishRequest, Publisher, ReachabilityProbe, ScmError, SourceControl,
};
use crate::domain::services::{classify_failure, FailureClass};
use crate::domain::value_objects::{DeployUrl, DeploymentState, DeploymentTarget};
use crate::error::DispatchError;

use super::options::DispatchOptions;
use super::outcome::DispatchOutcome;

/// Log lines attached to a `BuildFailure`
const FAILURE_LOG_TAIL: usize = 20;

/// Dispatch use case - parameterized by its ports
pub struct DispatchUseCase<P, A, S>
where
    P: Publisher,
    A: Authenticator,
    S: SourceControl,
{
    publisher: P,
    authenticator: A,
    source_control: S,
    probe: Option<Box<dyn ReachabilityProbe>>,
}

/// Per-dispatch mutable state
struct Run<'a> {
    options: &'a DispatchOptions,
    checkout: Checkout,
    manifest: Manifest,
    url: DeployUrl,
    record: DeploymentRecord,
    warnings: Vec<String>,
    sink: Arc<dyn DeployEventSink>,
}

impl Run<'_> {
    fn transition(&mut self, next: DeploymentState) {
        let from = self.record.state;
        if self.record.advance(next) {
            self.sink.on_event(DeployEvent::StateChanged { from, to: next });
        }
    }

    fn warn(&mut self, message: String) {
        self.sink.on_event(DeployEvent::Warning {
            message: message.clone(),
        });
        self.warnings.push(message);
    }

    fn platform(&self) -> String {
        self.options.profile.name.clone()
    }

    fn fail(mut self, err: DispatchError) -> Result<DispatchOutcome, DispatchError> {
        self.transition(DeploymentState::Failed);
        self.sink.on_event(DeployEvent::Completed {
            state: DeploymentState::Failed,
            url: None,
        });
        Err(err)
    }

    fn finish(self, plan: Option<String>) -> Result<DispatchOutcome, DispatchError> {
        self.sink.on_event(DeployEvent::Completed {
            state: self.record.state,
            url: self.record.url.as_ref().map(DeployUrl::to_string),
        });
        Ok(DispatchOutcome {
            record: self.record,
            plan,
            warnings: self.warnings,
        })
    }

    fn build_failure(&self, reason: impl Into<String>) -> DispatchError {
        DispatchError::BuildFailure {
            platform: self.platform(),
            reason: reason.into(),
            log: self.record.log_tail(FAILURE_LOG_TAIL),
        }
    }
}

impl<P, A, S> DispatchUseCase<P, A, S>
where
    P: Publisher,
    A: Authenticator,
    S: SourceControl,
{
    pub fn new(publisher: P, authenticator: A, source_control: S) -> Self {
        Self {
            publisher,
            authenticator,
            source_control,
            probe: None,
        }
    }

    /// Attach the probe used by `verify`
    pub fn with_probe(mut self, probe: Box<dyn ReachabilityProbe>) -> Self {
        self.probe = Some(probe);
        self
    }

    /// Execute the dispatch silently
    pub fn execute(&self, options: &DispatchOptions) -> Result<DispatchOutcome, DispatchError> {
        self.execute_with_events(options, Arc::new(NoopEventSink))
    }

    /// Execute the dispatch with event reporting
    pub fn execute_with_events(
        &self,
        options: &DispatchOptions,
        sink: Arc<dyn DeployEventSink>,
    ) -> Result<DispatchOutcome, DispatchError> {
        let checkout = Checkout::new(&options.checkout);
        let profile = &options.profile;

        sink.on_event(DeployEvent::Started {
            platform: profile.name.clone(),
            target: options.target,
            checkout: checkout.root().to_path_buf(),
            app: options.app.clone(),
        });

        // Step 1: Manifest precondition - nothing else runs if this fails
        let manifest = match Manifest::load(&checkout, &profile.manifest) {
            Ok(manifest) => manifest,
            Err(err) => {
                sink.on_event(DeployEvent::Completed {
                    state: DeploymentState::Failed,
                    url: None,
                });
                return Err(err);
            }
        };
        sink.on_event(DeployEvent::ManifestValidated {
            path: manifest.path().to_path_buf(),
            requirements: manifest.requirements().len(),
            fingerprint: manifest.fingerprint().to_string(),
        });

        let record = DeploymentRecord::begin(
            profile.name.clone(),
            options.target,
            options.app.clone(),
            manifest.fingerprint(),
        );

        // Step 2: URL and profile sanity
        let url = match DeployUrl::new(&options.app, &profile.domain) {
            Ok(url) => url,
            Err(reason) => {
                let err = DispatchError::BuildFailure {
                    platform: profile.name.clone(),
                    reason: format!("cannot form app URL: {}", reason),
                    log: Vec::new(),
                };
                sink.on_event(DeployEvent::Completed {
                    state: DeploymentState::Failed,
                    url: None,
                });
                return Err(err);
            }
        };

        let mut run = Run {
            options,
            checkout,
            manifest,
            url,
            record,
            warnings: Vec::new(),
            sink,
        };

        if run.manifest.is_empty() {
            let path = run.manifest.path().display().to_string();
            run.warn(format!("{} lists no packages", path));
        }

        if let Some(reason) = profile.unsupported_reason(options.target) {
            let err = run.build_failure(format!(
                "platform '{}' cannot use {} target: {}",
                profile.name, options.target, reason
            ));
            return run.fail(err);
        }

        // Step 3: Strategy
        match options.target {
            DeploymentTarget::GitIntegration => self.dispatch_git(run),
            DeploymentTarget::DirectCli => self.dispatch_cli(run),
        }
    }

    fn dispatch_git(&self, mut run: Run<'_>) -> Result<DispatchOutcome, DispatchError> {
        let options = run.options;
        let profile = &options.profile;
        let root = run.checkout.root().to_path_buf();
        let manifest_rel = Path::new(&profile.manifest).to_path_buf();

        if let Err(reason) = self.confirm_manifest_committed(&root, &manifest_rel) {
            let err = DispatchError::MissingManifest {
                path: run.manifest.path().to_path_buf(),
                reason,
            };
            return run.fail(err);
        }

        let remote = profile.remote.clone();
        let branch = profile.branch.clone();

        let local = match self.source_control.local_revision(&root, &branch) {
            Ok(rev) => rev,
            Err(err) => return run.fail(scm_failure(&profile.name, err, &profile.auth_markers)),
        };
        let Some(local) = local else {
            let err = run.build_failure(format!("branch '{}' does not exist locally", branch));
            return run.fail(err);
        };

        // The platform builds from the pushed branch, not from HEAD
        match self.source_control.branch_contains(&root, &branch, &manifest_rel) {
            Ok(true) => {}
            Ok(false) => {
                let err = DispatchError::MissingManifest {
                    path: run.manifest.path().to_path_buf(),
                    reason: format!("not committed on branch '{}'", branch),
                };
                return run.fail(err);
            }
            Err(err) => return run.fail(scm_failure(&profile.name, err, &profile.auth_markers)),
        }

        if !options.env.is_empty() {
            let keys = options.env.keys().join(", ");
            run.warn(format!(
                "environment overrides ({}) are not forwarded on git targets; \
                 set them in the {} dashboard",
                keys, profile.name
            ));
        }

        run.record.url = Some(run.url.clone());

        if options.dry_run {
            let plan = if options.push {
                format!(
                    "push {} to {} and let {} rebuild {}",
                    branch, remote, profile.name, run.url
                )
            } else {
                format!(
                    "confirm {} is committed; {} rebuilds {} on push to {}/{}",
                    profile.manifest, profile.name, run.url, remote, branch
                )
            };
            run.sink.on_event(DeployEvent::Planned {
                description: plan.clone(),
            });
            return run.finish(Some(plan));
        }

        let tracked = match self.source_control.remote_revision(&root, &remote, &branch) {
            Ok(rev) => rev,
            Err(err) => return run.fail(scm_failure(&profile.name, err, &profile.auth_markers)),
        };

        // Platform change detection: same revision means no new deployment
        if tracked.as_deref() == Some(local.as_str()) {
            run.sink.on_event(DeployEvent::UpToDate {
                revision: local.clone(),
            });
            run.transition(DeploymentState::UpToDate);
            return run.finish(None);
        }

        if !options.push {
            run.warn(format!(
                "{} has commits not on {}/{}; push to trigger a rebuild (or pass --push)",
                branch, remote, branch
            ));
            return run.finish(None);
        }

        run.transition(DeploymentState::Deploying);
        run.sink.on_event(DeployEvent::PushStarted {
            remote: remote.clone(),
            branch: branch.clone(),
        });

        match self.source_control.push(&root, &remote, &branch) {
            Ok(log) => {
                emit_log(&run.sink, &log);
                run.record.log.extend(log);
            }
            Err(err) => {
                if let ScmError::CommandFailed { log, .. } = &err {
                    emit_log(&run.sink, log);
                    run.record.log.extend(log.iter().cloned());
                }
                let err = scm_failure(&profile.name, err, &profile.auth_markers);
                return run.fail(err);
            }
        }

        self.finish_live(run)
    }

    fn dispatch_cli(&self, mut run: Run<'_>) -> Result<DispatchOutcome, DispatchError> {
        let options = run.options;
        let profile = &options.profile;
        let program = profile.program.clone().unwrap_or_default();
        let args = profile.render_args(&options.app, &options.entrypoint);

        if options.dry_run {
            let plan = format!(
                "{} {} (in {}) -> {}",
                program,
                args.join(" "),
                run.checkout.root().display(),
                run.url
            );
            run.sink.on_event(DeployEvent::Planned {
                description: plan.clone(),
            });
            run.record.url = Some(run.url.clone());
            return run.finish(Some(plan));
        }

        // Scoped credential: dropped (and zeroed) at the end of this block
        let published = {
            let credentials = match self.authenticator.authenticate(profile) {
                Ok(credentials) => credentials,
                Err(err) => {
                    let err = DispatchError::AuthenticationFailure {
                        platform: profile.name.clone(),
                        reason: err.reason,
                    };
                    return run.fail(err);
                }
            };
            run.sink.on_event(DeployEvent::Authenticated {
                platform: credentials.platform().to_string(),
                source: credentials.source().to_string(),
            });

            run.transition(DeploymentState::Deploying);
            run.sink.on_event(DeployEvent::PublishStarted {
                program: program.clone(),
                args: args.clone(),
            });

            let request = PublishRequest {
                checkout: &run.checkout,
                manifest: &run.manifest,
                profile,
                app: &options.app,
                entrypoint: &options.entrypoint,
                env: &options.env,
            };
            let sink = Arc::clone(&run.sink);
            let stream = sink.wants_log_lines();
            let mut on_line = |line: &LogLine| {
                if stream {
                    sink.on_event(DeployEvent::Log { line: line.clone() });
                }
            };
            self.publisher.publish(&request, &credentials, &mut on_line)
        };

        match published {
            Ok(publication) => {
                run.record.log.extend(publication.log);
                if publication.url != run.url {
                    run.warn(format!(
                        "platform reported {} instead of {}",
                        publication.url, run.url
                    ));
                }
                run.url = publication.url;
                self.finish_live(run)
            }
            Err(err) => {
                run.record.log.extend(err.log().iter().cloned());
                let err = match err {
                    PublishError::Authentication { reason, .. } => {
                        DispatchError::AuthenticationFailure {
                            platform: profile.name.clone(),
                            reason,
                        }
                    }
                    PublishError::Build { reason, .. } => run.build_failure(reason),
                };
                run.fail(err)
            }
        }
    }

    /// Deploying -> Live, passing through the reachability check when asked
    fn finish_live(&self, mut run: Run<'_>) -> Result<DispatchOutcome, DispatchError> {
        run.record.url = Some(run.url.clone());

        if run.options.verify {
            match &self.probe {
                Some(probe) => match probe.probe(&run.url) {
                    Ok(status) => run.sink.on_event(DeployEvent::Verified {
                        url: run.url.to_string(),
                        status: Some(status),
                        ok: true,
                    }),
                    Err(err) => {
                        let status = match err {
                            ProbeError::Status(code) => Some(code),
                            _ => None,
                        };
                        run.sink.on_event(DeployEvent::Verified {
                            url: run.url.to_string(),
                            status,
                            ok: false,
                        });
                        let failure =
                            run.build_failure(format!("{} did not come up: {}", run.url, err));
                        return run.fail(failure);
                    }
                },
                None => run.warn("verification requested but no probe is configured".to_string()),
            }
        }

        run.transition(DeploymentState::Live);
        run.finish(None)
    }

    /// Tracked and clean, or the reason it is not
    fn confirm_manifest_committed(&self, root: &Path, manifest: &Path) -> Result<(), String> {
        match self.source_control.is_work_tree(root) {
            Ok(true) => {}
            Ok(false) => return Err("checkout is not a git work tree".to_string()),
            Err(err) => return Err(err.to_string()),
        }
        match self.source_control.is_tracked(root, manifest) {
            Ok(true) => {}
            Ok(false) => return Err("not tracked by git; the platform cannot see it".to_string()),
            Err(err) => return Err(err.to_string()),
        }
        match self.source_control.is_clean(root, manifest) {
            Ok(true) => Ok(()),
            Ok(false) => Err("has uncommitted changes; commit it before deploying".to_string()),
            Err(err) => Err(err.to_string()),
        }
    }
}

fn emit_log(sink: &Arc<dyn DeployEventSink>, log: &[LogLine]) {
    if !sink.wants_log_lines() {
        return;
    }
    for line in log {
        sink.on_event(DeployEvent::Log { line: line.clone() });
    }
}

fn scm_failure(platform: &str, err: ScmError, markers: &[String]) -> DispatchError {
    match err {
        ScmError::Unavailable(message) => DispatchError::BuildFailure {
            platform: platform.to_string(),
            reason: message,
            log: Vec::new(),
        },
        ScmError::CommandFailed { message, log } => {
            let texts: Vec<String> = log.iter().map(|l| l.text.clone()).collect();
            let class = classify_failure(
                texts.iter().map(String::as_str).chain([message.as_str()]),
                markers,
            );
            match class {
                FailureClass::Authentication => DispatchError::AuthenticationFailure {
                    platform: platform.to_string(),
                    reason: message,
                },
                FailureClass::Build => {
                    let skip = texts.len().saturating_sub(FAILURE_LOG_TAIL);
                    DispatchError::BuildFailure {
                        platform: platform.to_string(),
                        reason: message,
                        log: texts.into_iter().skip(skip).collect(),
                    }
                }
            }
        }
    }
}
