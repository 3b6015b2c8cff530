//! Command handlers for the dashctl binary

pub mod check;
pub mod config;
pub mod deploy;
pub mod login;
pub mod version;

use std::path::{Path, PathBuf};

use anyhow::Result;
use dashctl::config::{Config, ConfigWarning};
use dashctl::domain::entities::Checkout;
use dashctl::domain::value_objects::validate_app_name;
use dashctl::DashError;

use crate::ui::context::UiContext;
use crate::ui::icon::Icon;

/// Absolute checkout root, so `.` still yields a directory name
pub(crate) fn resolve_root(source: &Path) -> Result<PathBuf> {
    if !source.is_dir() {
        anyhow::bail!("checkout {} is not a directory", source.display());
    }
    Ok(std::fs::canonicalize(source).unwrap_or_else(|_| source.to_path_buf()))
}

/// Discover config for `root`; unknown keys are reported, not fatal
pub(crate) fn load_config(root: &Path) -> Result<(Config, Vec<ConfigWarning>)> {
    Ok(Config::discover(root)?)
}

pub(crate) fn report_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) {
    for warning in warnings {
        if ui.json {
            let _ = crate::ui::json::emit(serde_json::json!({
                "event": "warning",
                "command": "config",
                "message": warning.to_string(),
                "key": warning.key,
                "line": warning.line,
                "suggestion": warning.suggestion,
            }));
        } else {
            eprintln!("{} {}", Icon::Warning.colored(ui.color, ui.unicode), warning);
        }
    }
}

/// `--app`, then `[app] name` / `DASHCTL_APP`, then the checkout directory name
pub(crate) fn resolve_app(cli_app: Option<&str>, config: &Config, root: &Path) -> Result<String> {
    let app = cli_app
        .map(str::to_string)
        .or_else(|| config.app.name.clone())
        .or_else(|| Checkout::new(root).app_name_hint())
        .ok_or_else(|| DashError::InvalidAppName {
            name: root.display().to_string(),
            reason: "cannot derive an app name from the checkout directory".to_string(),
        })?;
    validate_app_name(&app).map_err(|reason| DashError::InvalidAppName {
        name: app.clone(),
        reason,
    })?;
    Ok(app)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_name_precedence() {
        let mut config = Config::default();
        let root = Path::new("/srv/Painel Indicadores");

        assert_eq!(resolve_app(None, &config, root).unwrap(), "painel-indicadores");

        config.app.name = Some("from-config".to_string());
        assert_eq!(resolve_app(None, &config, root).unwrap(), "from-config");
        assert_eq!(resolve_app(Some("cli"), &config, root).unwrap(), "cli");
    }

    #[test]
    fn invalid_app_name_is_rejected() {
        let err =
            resolve_app(Some("Bad_Name"), &Config::default(), Path::new("/srv/x")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DashError>(),
            Some(DashError::InvalidAppName { .. })
        ));
    }

    #[test]
    fn resolve_root_requires_directory() {
        assert!(resolve_root(Path::new("/definitely/not/here")).is_err());
    }
}
