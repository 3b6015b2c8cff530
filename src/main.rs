//! dashctl CLI - deploy a Streamlit dashboard to its hosting platform
//!
//! Usage: dashctl <COMMAND>
//!
//! Commands:
//!   deploy   Validate the manifest and trigger the platform
//!   login    Check which credential a platform would use
//!   config   Print the effective configuration
//!   check    Pre-flight report without contacting the platform
//!   version  Print version information

mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use dashctl::presentation::{Cli, Commands, ConfigCommand};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Help and --version go to stdout and succeed; usage errors exit 1
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    let json = cli.json;
    if let Err(err) = run(cli) {
        ui::error::print_error(&err, json);
        std::process::exit(ui::error::exit_code(&err));
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        json,
        color,
        verbose,
        command,
    } = cli;

    match command {
        Commands::Deploy(args) => commands::deploy::cmd_deploy(&args, json, verbose, color),
        Commands::Login { platform, source } => {
            commands::login::cmd_login(&source, platform.as_deref(), json, verbose, color)
        }
        Commands::Config { action } => match action {
            ConfigCommand::Show { source } => {
                commands::config::cmd_config_show(&source, json, verbose, color)
            }
        },
        Commands::Check {
            source,
            platform,
            strict_warnings,
        } => commands::check::cmd_check(
            &source,
            platform.as_deref(),
            strict_warnings,
            json,
            verbose,
            color,
        ),
        Commands::Version => commands::version::cmd_version(json),
    }
}
