//! Console Event Sink
//!
//! Human-readable progress for `dashctl deploy`. Platform output is only
//! echoed with `-v`; failures print their log tail through the error block.

use std::io::{self, Write};
use std::sync::Mutex;

use crossterm::style::Stylize;
use dashctl::domain::ports::{DeployEvent, DeployEventSink};
use dashctl::DeploymentState;

use crate::ui::context::UiContext;
use crate::ui::icon::{dim, Icon};
use crate::ui::theme;

pub struct ConsoleEventSink {
    ui: UiContext,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    pub fn stdout(ui: UiContext) -> Self {
        Self::with_writer(ui, io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(ui: UiContext, writer: W) -> Self {
        Self {
            ui,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn icon(&self, icon: Icon) -> String {
        icon.colored(self.ui.color, self.ui.unicode)
    }

    fn line(&self, text: String) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", text);
            let _ = writer.flush();
        }
    }

    fn render(&self, event: DeployEvent) -> Option<String> {
        let verbose = self.ui.verbose > 0;
        let text = match event {
            DeployEvent::Started {
                platform,
                target,
                app,
                ..
            } => format!(
                "{} Deploying {} to {} ({})",
                self.icon(Icon::Deploy),
                app,
                platform,
                target.display_name()
            ),
            DeployEvent::ManifestValidated {
                path,
                requirements,
                fingerprint,
            } => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                let mut text = format!(
                    "  {} {}: {} packages",
                    self.icon(Icon::Success),
                    name,
                    requirements
                );
                if verbose {
                    text.push_str(&format!(" {}", dim(&fingerprint, self.ui.color)));
                }
                text
            }
            DeployEvent::Warning { message } => {
                let message = if self.ui.color {
                    format!("{}", message.with(theme::colors::WARNING))
                } else {
                    message
                };
                format!("  {} {}", self.icon(Icon::Warning), message)
            }
            DeployEvent::StateChanged { from, to } if verbose => format!(
                "  {} {}",
                self.icon(Icon::Arrow),
                dim(&format!("{} -> {}", from, to), self.ui.color)
            ),
            DeployEvent::StateChanged { .. } => return None,
            DeployEvent::Authenticated { platform, source } => format!(
                "  {} Authenticated with {} (from {})",
                self.icon(Icon::Success),
                platform,
                source
            ),
            DeployEvent::PublishStarted { program, args } => format!(
                "  {} Running {}",
                self.icon(Icon::Progress),
                command_line(&program, &args, verbose)
            ),
            DeployEvent::PushStarted { remote, branch } => format!(
                "  {} Pushing {} to {}",
                self.icon(Icon::Progress),
                branch,
                remote
            ),
            DeployEvent::Log { line } => format!(
                "    {} {}",
                self.icon(Icon::Log),
                dim(&line.text, self.ui.color)
            ),
            DeployEvent::UpToDate { revision } => format!(
                "  {} Remote already at {}; nothing to deploy",
                self.icon(Icon::Success),
                short_revision(&revision)
            ),
            DeployEvent::Planned { description } => {
                format!("  {} Plan: {}", self.icon(Icon::Arrow), description)
            }
            DeployEvent::Verified { url, status, ok } => {
                let answered = status
                    .map(|s| format!("HTTP {}", s))
                    .unwrap_or_else(|| "no answer".to_string());
                let icon = if ok { Icon::Success } else { Icon::Error };
                format!("  {} {} ({})", self.icon(icon), url, answered)
            }
            DeployEvent::Completed { state, url } => {
                let url = url.unwrap_or_default();
                match state {
                    DeploymentState::Live => {
                        format!("{} Live at {}", self.icon(Icon::Success), url)
                    }
                    DeploymentState::UpToDate => {
                        format!("{} Up to date: {}", self.icon(Icon::Success), url)
                    }
                    DeploymentState::NotDeployed => {
                        format!("{} Nothing triggered {}", self.icon(Icon::Pending), url)
                            .trim_end()
                            .to_string()
                    }
                    DeploymentState::Deploying => {
                        format!("{} Deploying: {}", self.icon(Icon::Progress), url)
                    }
                    // The error block carries the reason
                    DeploymentState::Failed => return None,
                }
            }
        };
        Some(text)
    }
}

/// Program and first argument; the full argument list only with `-v`
fn command_line(program: &str, args: &[String], verbose: bool) -> String {
    match args {
        [] => program.to_string(),
        _ if verbose => format!("{} {}", program, args.join(" ")),
        [first] => format!("{} {}", program, first),
        [first, rest @ ..] => format!("{} {} (+{} args)", program, first, rest.len()),
    }
}

fn short_revision(revision: &str) -> &str {
    revision.get(..12).unwrap_or(revision)
}

impl DeployEventSink for ConsoleEventSink {
    fn on_event(&self, event: DeployEvent) {
        if let Some(text) = self.render(event) {
            self.line(text);
        }
    }

    fn wants_log_lines(&self) -> bool {
        self.ui.verbose > 0
    }
}
