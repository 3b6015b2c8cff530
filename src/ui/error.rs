use dashctl::{DashError, DispatchError};

use crate::ui::icon::{dim, Icon};
use crate::ui::terminal::detect_capabilities;

/// Log lines shown under a build failure
const LOG_TAIL: usize = 10;

/// Process exit code for an error returned by a command
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(dispatch) = err.downcast_ref::<DispatchError>() {
        return dispatch.exit_code();
    }
    if let Some(dash) = err.downcast_ref::<DashError>() {
        return dash.exit_code();
    }
    1
}

fn dispatch_error(err: &anyhow::Error) -> Option<&DispatchError> {
    err.downcast_ref::<DispatchError>().or_else(|| match err.downcast_ref::<DashError>() {
        Some(DashError::Dispatch(inner)) => Some(inner),
        _ => None,
    })
}

fn fix_for(err: &anyhow::Error) -> Option<String> {
    if let Some(dispatch) = dispatch_error(err) {
        return Some(match dispatch {
            DispatchError::MissingManifest { path, .. } => format!(
                "Add {} at the checkout root; git-integrated platforms also need it committed.",
                path.file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string())
            ),
            DispatchError::AuthenticationFailure { platform, .. } => format!(
                "Run `dashctl login --platform {}` to see which credential sources are tried.",
                platform
            ),
            DispatchError::BuildFailure { .. } => {
                "Fix the error in the platform log and deploy again; -v shows the full output."
                    .to_string()
            }
        });
    }

    match err.downcast_ref::<DashError>()? {
        DashError::UnknownPlatform { name, .. } => Some(format!(
            "Define [platforms.{}] in dashctl.toml or pick a known platform.",
            name
        )),
        DashError::InvalidConfig { .. } => Some("Fix the TOML syntax and try again.".to_string()),
        DashError::InvalidAppName { .. } => {
            Some("Pass --app with lowercase letters, digits and '-'.".to_string())
        }
        _ => None,
    }
}

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        err
    );

    if let Some(dispatch) = dispatch_error(err) {
        let log = dispatch.log();
        let skip = log.len().saturating_sub(LOG_TAIL);
        if !log.is_empty() {
            out.push('\n');
        }
        for line in log.iter().skip(skip) {
            out.push_str(&format!(
                "    {} {}\n",
                Icon::Log.colored(supports_color, supports_unicode),
                dim(line, supports_color)
            ));
        }
    }

    if let Some(fix) = fix_for(err) {
        out.push_str(&format!(
            "\n  {} {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            fix
        ));
    }

    out
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let dispatch = dispatch_error(err);
        let output = serde_json::json!({
            "event": "error",
            "kind": dispatch.map(DispatchError::kind).unwrap_or("error"),
            "message": err.to_string(),
            "exit_code": exit_code(err),
            "log": dispatch.map(DispatchError::log).unwrap_or(&[]),
        });
        let _ = crate::ui::json::emit(output);
        return;
    }

    let caps = detect_capabilities();
    eprint!(
        "{}",
        format_error(err, caps.supports_color, caps.supports_unicode)
    );
}
