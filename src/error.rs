//! Error types for dashctl
//!
//! Uses `thiserror` for library errors. `DispatchError` is the classified
//! taxonomy every deploy failure ends up in; `DashError` covers everything
//! else (config, arguments, I/O).

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for dashctl operations
pub type DashResult<T> = Result<T, DashError>;

/// Classified deployment failure.
///
/// All variants are terminal: nothing is retried automatically.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// Manifest absent (or not visible to the platform) at the checkout root
    #[error("manifest {} not usable: {reason}", path.display())]
    MissingManifest { path: PathBuf, reason: String },

    /// Credential missing or rejected by the platform
    #[error("authentication failed for {platform}: {reason}")]
    AuthenticationFailure { platform: String, reason: String },

    /// Platform-side install/launch failure, or the trigger itself failed
    #[error("build failed on {platform}: {reason}")]
    BuildFailure {
        platform: String,
        reason: String,
        log: Vec<String>,
    },
}

impl DispatchError {
    /// Stable identifier used in JSON output
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingManifest { .. } => "missing_manifest",
            Self::AuthenticationFailure { .. } => "authentication_failure",
            Self::BuildFailure { .. } => "build_failure",
        }
    }

    /// Process exit code for this failure class
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingManifest { .. } => 2,
            Self::AuthenticationFailure { .. } => 3,
            Self::BuildFailure { .. } => 4,
        }
    }

    /// Log lines captured from the platform, if any
    pub fn log(&self) -> &[String] {
        match self {
            Self::BuildFailure { log, .. } => log,
            _ => &[],
        }
    }
}

/// Main error type for dashctl operations
#[derive(Error, Debug)]
pub enum DashError {
    /// Classified deployment failure
    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed
    #[error("invalid config in {}: {message}", file.display())]
    InvalidConfig { file: PathBuf, message: String },

    /// Platform name not present in config or built-ins
    #[error("unknown platform '{name}' (known: {known})")]
    UnknownPlatform { name: String, known: String },

    /// App name cannot form a hostname label
    #[error("invalid app name '{name}': {reason}")]
    InvalidAppName { name: String, reason: String },

    /// Malformed `KEY=VALUE` override
    #[error("invalid environment override '{raw}': expected KEY=VALUE")]
    InvalidOverride { raw: String },

    /// Platform profile lacks a field the chosen target needs
    #[error("platform '{platform}' cannot use {target}: {reason}")]
    IncompleteProfile {
        platform: String,
        target: String,
        reason: String,
    },
}

impl DashError {
    /// Exit code: classified failures keep theirs, everything else is 1
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Dispatch(err) => err.exit_code(),
            _ => 1,
        }
    }
}
