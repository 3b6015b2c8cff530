//! Git CLI adapter

use std::io;
use std::path::Path;
use std::process::Command;

use crate::domain::entities::LogLine;
use crate::domain::ports::{ScmError, SourceControl};
use crate::infrastructure::process::{run_captured, CapturedRun};

/// `SourceControl` backed by the `git` executable
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
}

impl GitCli {
    pub fn new() -> Self {
        Self {
            program: "git".to_string(),
        }
    }

    fn git(&self, root: &Path, args: &[&str]) -> Result<CapturedRun, ScmError> {
        let mut cmd = Command::new(&self.program);
        cmd.arg("-C").arg(root).args(args);
        run_captured(&mut cmd).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => {
                ScmError::Unavailable(format!("{} is not installed", self.program))
            }
            _ => ScmError::Unavailable(e.to_string()),
        })
    }

    fn revision(&self, root: &Path, reference: &str) -> Result<Option<String>, ScmError> {
        let run = self.git(root, &["rev-parse", "--verify", "--quiet", reference])?;
        let rev = run.stdout().trim().to_string();
        Ok((run.success && !rev.is_empty()).then_some(rev))
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

fn path_arg(file: &Path) -> String {
    file.to_string_lossy().into_owned()
}

impl SourceControl for GitCli {
    fn is_work_tree(&self, root: &Path) -> Result<bool, ScmError> {
        let run = self.git(root, &["rev-parse", "--is-inside-work-tree"])?;
        Ok(run.success && run.stdout().trim() == "true")
    }

    fn is_tracked(&self, root: &Path, file: &Path) -> Result<bool, ScmError> {
        let file = path_arg(file);
        let run = self.git(root, &["ls-files", "--error-unmatch", "--", &file])?;
        Ok(run.success)
    }

    fn is_clean(&self, root: &Path, file: &Path) -> Result<bool, ScmError> {
        let file = path_arg(file);
        let run = self.git(root, &["status", "--porcelain", "--", &file])?;
        if !run.success {
            return Err(ScmError::CommandFailed {
                message: format!("git status failed with {}", run.describe_exit()),
                log: run.log,
            });
        }
        Ok(run.stdout().trim().is_empty())
    }

    fn branch_contains(&self, root: &Path, branch: &str, file: &Path) -> Result<bool, ScmError> {
        let object = format!("refs/heads/{}:{}", branch, path_arg(file).replace('\\', "/"));
        let run = self.git(root, &["cat-file", "-e", &object])?;
        Ok(run.success)
    }

    fn local_revision(&self, root: &Path, branch: &str) -> Result<Option<String>, ScmError> {
        self.revision(root, &format!("refs/heads/{}", branch))
    }

    fn remote_revision(
        &self,
        root: &Path,
        remote: &str,
        branch: &str,
    ) -> Result<Option<String>, ScmError> {
        self.revision(root, &format!("refs/remotes/{}/{}", remote, branch))
    }

    fn push(&self, root: &Path, remote: &str, branch: &str) -> Result<Vec<LogLine>, ScmError> {
        let run = self.git(root, &["push", remote, branch])?;
        if !run.success {
            let detail = run.last_error_line().unwrap_or("no output").to_string();
            return Err(ScmError::CommandFailed {
                message: format!("git push {} {} failed: {}", remote, branch, detail),
                log: run.log,
            });
        }
        Ok(run.log)
    }
}
