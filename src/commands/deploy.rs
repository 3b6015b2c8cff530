//! Deploy command entry point

use std::sync::Arc;

use anyhow::Result;
use dashctl::domain::ports::DeployEventSink;
use dashctl::infrastructure::JsonEventSink;
use dashctl::presentation::{create_dispatch_use_case, ColorWhen, DeployArgs};
use dashctl::{Config, DispatchOptions, EnvOverrides};

use super::{load_config, report_config_warnings, resolve_app, resolve_root};
use crate::ui::console::ConsoleEventSink;
use crate::ui::context::UiContext;

/// Deploy command entry point
pub fn cmd_deploy(
    args: &DeployArgs,
    json: bool,
    verbose: u8,
    color: Option<ColorWhen>,
) -> Result<()> {
    let root = resolve_root(&args.source)?;
    let (config, warnings) = load_config(&root)?;
    let ui = UiContext::new(json, verbose, color, &config);
    report_config_warnings(&warnings, &ui);

    let options = build_options(args, &config, &root)?;

    let sink: Arc<dyn DeployEventSink> = if json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(ConsoleEventSink::stdout(ui))
    };

    create_dispatch_use_case(&config.verify).execute_with_events(&options, sink)?;
    Ok(())
}

/// Resolve flags against config into one dispatch request
fn build_options(
    args: &DeployArgs,
    config: &Config,
    root: &std::path::Path,
) -> Result<DispatchOptions> {
    let platform = args
        .platform
        .clone()
        .unwrap_or_else(|| config.app.platform.clone());
    let profile = config.platform(&platform)?;

    let target = args.target.or(config.app.target).unwrap_or(profile.target);
    let app = resolve_app(args.app.as_deref(), config, root)?;
    let entrypoint = args
        .entrypoint
        .clone()
        .unwrap_or_else(|| config.app.entrypoint.clone());

    // config [env], then --env, then --port
    let mut env = config
        .env_overrides()
        .merge(&args.env.iter().cloned().collect::<EnvOverrides>());
    if let Some(port) = &args.port {
        env.set(profile.port_env.clone(), port.clone());
    }

    Ok(DispatchOptions::new(root, profile, app)
        .with_target(target)
        .with_entrypoint(entrypoint)
        .with_env(env)
        .with_push(args.push)
        .with_verify(args.verify)
        .with_dry_run(args.dry_run))
}
