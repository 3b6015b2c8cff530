//! `config show`: print the effective configuration

use std::path::Path;

use anyhow::Result;
use dashctl::presentation::ColorWhen;
use dashctl::Config;

use super::{load_config, report_config_warnings, resolve_root};
use crate::ui::context::UiContext;

pub fn cmd_config_show(
    source: &Path,
    json: bool,
    verbose: u8,
    color: Option<ColorWhen>,
) -> Result<()> {
    let root = resolve_root(source)?;
    let (config, warnings) = load_config(&root)?;
    let ui = UiContext::new(json, verbose, color, &config);
    report_config_warnings(&warnings, &ui);

    let effective = effective_config(config);

    if json {
        crate::ui::json::emit(serde_json::json!({
            "event": "config",
            "command": "config",
            "config": serde_json::to_value(&effective)?,
        }))?;
    } else {
        print!("{}", toml::to_string_pretty(&effective)?);
    }

    Ok(())
}

/// Config with built-in platforms filled in, as a dispatch would see it
fn effective_config(mut config: Config) -> Config {
    config.platforms = config.effective_platforms();
    config
}
