use std::path::Path;

use anyhow::Result;
use dashctl::application::CheckOptions;
use dashctl::presentation::factory::create_check_use_case;
use dashctl::presentation::ColorWhen;

use super::{load_config, resolve_root};
use crate::ui::context::UiContext;
use crate::ui::views::check::{
    check_item_json, render_check_header, render_check_report, render_check_summary,
};

pub fn cmd_check(
    source: &Path,
    platform: Option<&str>,
    strict_warnings: bool,
    json: bool,
    verbose: u8,
    color: Option<ColorWhen>,
) -> Result<()> {
    let root = resolve_root(source)?;
    let (config, config_warnings) = load_config(&root)?;
    let ui = UiContext::new(json, verbose, color, &config);

    let platform = platform.unwrap_or(config.app.platform.as_str());
    let profile = config.platform(platform)?;
    let target = config.app.target.unwrap_or(profile.target);

    // Name problems are reported as a check item rather than aborting
    let app = config
        .app
        .name
        .clone()
        .or_else(|| dashctl::domain::entities::Checkout::new(&root).app_name_hint())
        .unwrap_or_default();

    if json {
        crate::ui::json::emit(serde_json::json!({
            "event": "start",
            "command": "check",
            "platform": profile.name,
            "target": target.as_str(),
            "strict_warnings": strict_warnings,
        }))?;
    } else {
        print!(
            "{}",
            render_check_header(
                &profile.name,
                target.display_name(),
                strict_warnings,
                ui.color,
                ui.unicode
            )
        );
    }

    let options = CheckOptions {
        checkout: root,
        profile,
        target,
        app,
        entrypoint: config.app.entrypoint.clone(),
        config_warnings,
    };
    let report = create_check_use_case().execute(&options);

    let failed = !report.is_success() || (strict_warnings && report.warnings() > 0);

    if json {
        for item in &report.items {
            crate::ui::json::emit(check_item_json(item))?;
        }
        crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "check",
            "passes": report.passes(),
            "warnings": report.warnings(),
            "errors": report.errors(),
            "success": !failed,
        }))?;
    } else {
        print!("{}", render_check_report(&report, verbose, ui.color, ui.unicode));
        print!("{}", render_check_summary(&report, failed, ui.color, ui.unicode));
    }

    if failed {
        if report.is_success() {
            anyhow::bail!("check failed: warnings present with --strict-warnings");
        }
        anyhow::bail!("check failed: {} error(s)", report.errors());
    }

    Ok(())
}
