//! Deploy Event Port
//!
//! Provides an observable interface for dispatch operations.
//! Drives console progress, NDJSON event streams, and verbose log echo.

use std::path::PathBuf;

use crate::domain::entities::LogLine;
use crate::domain::value_objects::{DeploymentState, DeploymentTarget};

/// Event emitted during a dispatch
#[derive(Debug, Clone)]
pub enum DeployEvent {
    /// Dispatch started
    Started {
        platform: String,
        target: DeploymentTarget,
        checkout: PathBuf,
        app: String,
    },

    /// Manifest found and parsed
    ManifestValidated {
        path: PathBuf,
        requirements: usize,
        fingerprint: String,
    },

    /// Non-fatal finding
    Warning { message: String },

    /// Lifecycle moved
    StateChanged {
        from: DeploymentState,
        to: DeploymentState,
    },

    /// Credential acquired (never carries the secret)
    Authenticated { platform: String, source: String },

    /// Platform publish command launched
    PublishStarted { program: String, args: Vec<String> },

    /// Git push launched
    PushStarted { remote: String, branch: String },

    /// Output line from the platform tool
    Log { line: LogLine },

    /// Branch already matches the remote; nothing to trigger
    UpToDate { revision: String },

    /// Dry run: plan resolved, nothing triggered
    Planned { description: String },

    /// Reachability check finished
    Verified { url: String, status: Option<u16>, ok: bool },

    /// Dispatch finished
    Completed {
        state: DeploymentState,
        url: Option<String>,
    },
}

/// Trait for receiving deploy events
///
/// Implementations:
/// - ConsoleEventSink: progress lines in the terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: silent operation
pub trait DeployEventSink: Send + Sync {
    /// Handle a deploy event
    fn on_event(&self, event: DeployEvent);

    /// Whether per-line platform output should be delivered
    fn wants_log_lines(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {}

    fn wants_log_lines(&self) -> bool {
        false
    }
}

/// Collects events in memory (used in tests)
#[derive(Default)]
pub struct CollectingEventSink {
    events: std::sync::Mutex<Vec<DeployEvent>>,
}

impl CollectingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<DeployEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

impl DeployEventSink for CollectingEventSink {
    fn on_event(&self, event: DeployEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}
