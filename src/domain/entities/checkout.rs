//! Source checkout entity

use std::path::{Path, PathBuf};

/// A source tree that should end up on the hosting platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkout {
    root: PathBuf,
}

impl Checkout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of a file directly under the checkout root
    pub fn join(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }

    /// App name derived from the checkout directory, if it can be made hostname-safe.
    ///
    /// `Painel_Indicadores` becomes `painel-indicadores`.
    pub fn app_name_hint(&self) -> Option<String> {
        let dir_name = match self.root.file_name() {
            Some(name) => name.to_string_lossy().to_string(),
            None => std::fs::canonicalize(&self.root)
                .ok()?
                .file_name()?
                .to_string_lossy()
                .to_string(),
        };
        slugify(&dir_name)
    }
}

fn slugify(raw: &str) -> Option<String> {
    let mut slug = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug: String = slug.trim_matches('-').chars().take(63).collect();
    let slug = slug.trim_end_matches('-').to_string();
    if slug.is_empty() {
        None
    } else {
        Some(slug)
    }
}
