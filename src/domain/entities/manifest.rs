//! Dependency manifest entity
//!
//! The manifest is a pip-style requirements file at the checkout root. Its
//! presence is the one precondition checked locally before any dispatch.

use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};

use sha2::{Digest, Sha256};

use super::checkout::Checkout;
use crate::error::DispatchError;

/// One package line of the manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    /// Package name as written
    pub name: String,
    /// Version specifier / marker remainder (e.g. `==1.1.0`, `>=2; python_version>"3.8"`)
    pub spec: Option<String>,
    /// 1-indexed source line
    pub line: usize,
}

impl Requirement {
    /// Pinned means an exact `==` or `===` version
    pub fn is_pinned(&self) -> bool {
        self.spec
            .as_deref()
            .map(|s| s.trim_start().starts_with("=="))
            .unwrap_or(false)
    }

    /// Name normalised for comparison (`Python_BCB` == `python-bcb`)
    pub fn normalized_name(&self) -> String {
        self.name
            .to_ascii_lowercase()
            .replace(['_', '.'], "-")
    }
}

/// Parsed dependency manifest
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    requirements: Vec<Requirement>,
    options: Vec<String>,
    fingerprint: String,
}

impl Manifest {
    /// Load `file_name` from the checkout root.
    ///
    /// Fails with `MissingManifest` if the name is not a bare file name, the
    /// file is absent, or it cannot be read.
    pub fn load(checkout: &Checkout, file_name: &str) -> Result<Self, DispatchError> {
        let relative = Path::new(file_name);
        let path = checkout.join(relative);

        let mut components = relative.components();
        let is_bare = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );
        if !is_bare {
            return Err(DispatchError::MissingManifest {
                path,
                reason: "manifest must be a file at the checkout root".to_string(),
            });
        }

        if !path.is_file() {
            return Err(DispatchError::MissingManifest {
                path,
                reason: "file not found at checkout root".to_string(),
            });
        }

        let bytes = std::fs::read(&path).map_err(|e| DispatchError::MissingManifest {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        let content = String::from_utf8_lossy(&bytes);
        let mut manifest = Self::parse(path, &content);
        manifest.fingerprint = fingerprint(&bytes);
        Ok(manifest)
    }

    /// Parse manifest content. Never fails: unknown lines are kept as options.
    pub fn parse(path: impl Into<PathBuf>, content: &str) -> Self {
        let mut requirements = Vec::new();
        let mut options = Vec::new();

        for (idx, raw) in content.lines().enumerate() {
            let line = strip_comment(raw).trim();
            if line.is_empty() {
                continue;
            }
            if line.starts_with('-') {
                options.push(line.to_string());
                continue;
            }

            let split_at = line
                .find(|c: char| matches!(c, '=' | '<' | '>' | '!' | '~' | ';' | '[' | ' ' | '@'))
                .unwrap_or(line.len());
            let name = line[..split_at].trim();
            if name.is_empty() {
                options.push(line.to_string());
                continue;
            }
            let spec = line[split_at..].trim();

            requirements.push(Requirement {
                name: name.to_string(),
                spec: (!spec.is_empty()).then(|| spec.to_string()),
                line: idx + 1,
            });
        }

        Self {
            path: path.into(),
            requirements,
            options,
            fingerprint: fingerprint(content.as_bytes()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn requirements(&self) -> &[Requirement] {
        &self.requirements
    }

    /// Pip option lines (`-r base.txt`, `--index-url ...`)
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// `sha256:<hex>` of the raw file bytes
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }

    pub fn unpinned(&self) -> Vec<&Requirement> {
        self.requirements.iter().filter(|r| !r.is_pinned()).collect()
    }

    /// Package names listed more than once (normalised), in first-seen order
    pub fn duplicates(&self) -> Vec<String> {
        let mut seen: BTreeMap<String, usize> = BTreeMap::new();
        let mut order = Vec::new();
        for req in &self.requirements {
            let key = req.normalized_name();
            let count = seen.entry(key.clone()).or_insert(0);
            *count += 1;
            if *count == 2 {
                order.push(key);
            }
        }
        order
    }
}

fn strip_comment(line: &str) -> &str {
    if line.trim_start().starts_with('#') {
        return "";
    }
    match line.find(" #") {
        Some(idx) => &line[..idx],
        None => line,
    }
}

fn fingerprint(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("sha256:{:x}", hasher.finalize())
}
