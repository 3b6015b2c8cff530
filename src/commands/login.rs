//! Login command: acquire a credential, report its source, discard it

use std::path::Path;

use anyhow::Result;
use dashctl::domain::ports::Authenticator;
use dashctl::presentation::factory::create_authenticator;
use dashctl::presentation::ColorWhen;
use dashctl::{DeploymentTarget, DispatchError};

use super::{load_config, report_config_warnings, resolve_root};
use crate::ui::context::UiContext;
use crate::ui::icon::Icon;

pub fn cmd_login(
    source: &Path,
    platform: Option<&str>,
    json: bool,
    verbose: u8,
    color: Option<ColorWhen>,
) -> Result<()> {
    let root = resolve_root(source)?;
    let (config, warnings) = load_config(&root)?;
    let ui = UiContext::new(json, verbose, color, &config);
    report_config_warnings(&warnings, &ui);

    let platform = platform.unwrap_or(config.app.platform.as_str());
    let profile = config.platform(platform)?;

    let target = config.app.target.unwrap_or(profile.target);
    if target == DeploymentTarget::GitIntegration
        && profile.token_env.is_none()
        && profile.auth_command.is_empty()
    {
        // The push itself authenticates through git's credential helpers
        if json {
            crate::ui::json::emit(serde_json::json!({
                "event": "authenticated",
                "command": "login",
                "platform": profile.name,
                "source": "git",
                "env_var": null,
            }))?;
        } else {
            println!(
                "{} {} deploys through git; pushes use your git credentials",
                Icon::Success.colored(ui.color, ui.unicode),
                profile.name
            );
        }
        return Ok(());
    }

    // Dropping the context zeroes the secret; it is never printed
    let credential = create_authenticator()
        .authenticate(&profile)
        .map_err(|err| DispatchError::AuthenticationFailure {
            platform: profile.name.clone(),
            reason: err.reason,
        })?;

    if json {
        crate::ui::json::emit(serde_json::json!({
            "event": "authenticated",
            "command": "login",
            "platform": credential.platform(),
            "source": credential.source(),
            "env_var": credential.env_var(),
        }))?;
    } else {
        let via = match credential.env_var() {
            Some(var) => format!("{} ({})", credential.source(), var),
            None => credential.source().to_string(),
        };
        println!(
            "{} Credentials for {} found via {}",
            Icon::Success.colored(ui.color, ui.unicode),
            credential.platform(),
            via
        );
    }

    Ok(())
}
