//! Source Control Port
//!
//! Git-integrated platforms only see what is committed and pushed. This port
//! answers the questions the dispatcher asks before and while triggering a
//! rebuild.

use std::path::Path;

use crate::domain::entities::LogLine;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScmError {
    /// Tool missing or the checkout is not a repository
    Unavailable(String),
    /// Command ran and failed
    CommandFailed { message: String, log: Vec<LogLine> },
}

impl std::fmt::Display for ScmError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(msg) => write!(f, "source control unavailable: {}", msg),
            Self::CommandFailed { message, .. } => write!(f, "command failed: {}", message),
        }
    }
}

impl std::error::Error for ScmError {}

pub trait SourceControl {
    fn is_work_tree(&self, root: &Path) -> Result<bool, ScmError>;

    /// File is known to the index
    fn is_tracked(&self, root: &Path, file: &Path) -> Result<bool, ScmError>;

    /// File has no staged or unstaged changes
    fn is_clean(&self, root: &Path, file: &Path) -> Result<bool, ScmError>;

    /// File exists in the tip commit of the local branch
    fn branch_contains(&self, root: &Path, branch: &str, file: &Path) -> Result<bool, ScmError>;

    /// Commit id of the local branch
    fn local_revision(&self, root: &Path, branch: &str) -> Result<Option<String>, ScmError>;

    /// Commit id of the remote-tracking branch
    fn remote_revision(
        &self,
        root: &Path,
        remote: &str,
        branch: &str,
    ) -> Result<Option<String>, ScmError>;

    fn push(&self, root: &Path, remote: &str, branch: &str) -> Result<Vec<LogLine>, ScmError>;
}
