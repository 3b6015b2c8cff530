//! JSON Event Sink
//!
//! Outputs dispatch events as NDJSON for CI/automation consumption.

use crate::domain::ports::{DeployEvent, DeployEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// JSON object for one event; every object carries `"command": "deploy"`
pub fn event_to_json(event: &DeployEvent) -> serde_json::Value {
    match event {
        DeployEvent::Started {
            platform,
            target,
            checkout,
            app,
        } => serde_json::json!({
            "event": "start",
            "command": "deploy",
            "platform": platform,
            "target": target.as_str(),
            "checkout": checkout.display().to_string(),
            "app": app,
        }),

        DeployEvent::ManifestValidated {
            path,
            requirements,
            fingerprint,
        } => serde_json::json!({
            "event": "manifest",
            "command": "deploy",
            "path": path.display().to_string(),
            "requirements": requirements,
            "fingerprint": fingerprint,
        }),

        DeployEvent::Warning { message } => serde_json::json!({
            "event": "warning",
            "command": "deploy",
            "message": message,
        }),

        DeployEvent::StateChanged { from, to } => serde_json::json!({
            "event": "state",
            "command": "deploy",
            "from": from.as_str(),
            "to": to.as_str(),
        }),

        DeployEvent::Authenticated { platform, source } => serde_json::json!({
            "event": "authenticated",
            "command": "deploy",
            "platform": platform,
            "source": source,
        }),

        DeployEvent::PublishStarted { program, args } => serde_json::json!({
            "event": "publish",
            "command": "deploy",
            "program": program,
            "args": args,
        }),

        DeployEvent::PushStarted { remote, branch } => serde_json::json!({
            "event": "push",
            "command": "deploy",
            "remote": remote,
            "branch": branch,
        }),

        DeployEvent::Log { line } => serde_json::json!({
            "event": "log",
            "command": "deploy",
            "stream": line.stream,
            "line": line.text,
        }),

        DeployEvent::UpToDate { revision } => serde_json::json!({
            "event": "up_to_date",
            "command": "deploy",
            "revision": revision,
        }),

        DeployEvent::Planned { description } => serde_json::json!({
            "event": "plan",
            "command": "deploy",
            "plan": description,
        }),

        DeployEvent::Verified { url, status, ok } => serde_json::json!({
            "event": "verified",
            "command": "deploy",
            "url": url,
            "status": status,
            "ok": ok,
        }),

        DeployEvent::Completed { state, url } => serde_json::json!({
            "event": "complete",
            "command": "deploy",
            "state": state.as_str(),
            "url": url,
        }),
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        self.write_event(event_to_json(&event));
    }
}
