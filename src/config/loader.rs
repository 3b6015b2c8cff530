//! Configuration discovery and loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::DeploymentTarget;
use crate::error::{DashError, DashResult};

use super::types::Config;

pub use crate::domain::value_objects::ConfigWarning;

/// Project config, looked up at the checkout root
pub const PROJECT_CONFIG_FILE: &str = "dashctl.toml";

/// User config, relative to the config directory
pub const USER_CONFIG_FILE: &str = "dashctl/config.toml";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> DashResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| DashError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Pick the config file for `project_root`, load it, and apply env overrides.
pub fn discover(project_root: &Path) -> DashResult<(Config, Vec<ConfigWarning>)> {
    let explicit = std::env::var("DASHCTL_CONFIG").ok();
    let (config, warnings) = match config_path(project_root, explicit, user_config_dir()) {
        Some(path) => load_with_warnings(&path)?,
        None => (Config::default(), Vec::new()),
    };
    Ok((with_env_overrides(config), warnings))
}

/// First existing file of: explicit path, project config, user config.
///
/// An explicit path is returned even when missing so the read fails loudly.
pub(super) fn config_path(
    project_root: &Path,
    explicit: Option<String>,
    user_dir: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(explicit) = explicit.filter(|p| !p.trim().is_empty()) {
        return Some(PathBuf::from(explicit));
    }

    let project = project_root.join(PROJECT_CONFIG_FILE);
    if project.is_file() {
        return Some(project);
    }

    user_dir
        .map(|dir| dir.join(USER_CONFIG_FILE))
        .filter(|path| path.is_file())
}

/// Apply environment variable overrides (DASHCTL_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

pub(super) fn apply_overrides(mut config: Config, var: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(platform) = var("DASHCTL_PLATFORM") {
        let platform = platform.trim();
        if !platform.is_empty() {
            config.app.platform = platform.to_string();
        }
    }

    if let Some(app) = var("DASHCTL_APP") {
        let app = app.trim();
        if !app.is_empty() {
            config.app.name = Some(app.to_string());
        }
    }

    // Unrecognised values are ignored, same as an unset variable
    if let Some(target) = var("DASHCTL_TARGET").as_deref().and_then(DeploymentTarget::parse) {
        config.app.target = Some(target);
    }

    config
}

/// XDG config directory, falling back to `~/.config`
fn user_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "app",
        "name",
        "platform",
        "target",
        "entrypoint",
        "env",
        "verify",
        "attempts",
        "interval_secs",
        "timeout_secs",
        "output",
        "color",
        "unicode",
        "platforms",
        "domain",
        "manifest",
        "remote",
        "branch",
        "program",
        "deploy_args",
        "token_env",
        "auth_command",
        "auth_markers",
        "port_env",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
