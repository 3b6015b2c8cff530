//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose) are inherited by all subcommands
//! - `DASHCTL_*` variables are read by the config layer, not by clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::value_objects::{DeploymentTarget, EnvOverrides};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// dashctl - deploy a Streamlit dashboard to its hosting platform
#[derive(Parser, Debug)]
#[command(name = "dashctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events on stdout
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v echoes platform output)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deploy the checkout to a hosting platform
    #[command(visible_alias = "run")]
    Deploy(DeployArgs),

    /// Acquire platform credentials and report where they came from
    Login {
        /// Platform profile name
        #[arg(short, long)]
        platform: Option<String>,

        /// Checkout root (for dashctl.toml)
        #[arg(short, long, default_value = ".")]
        source: PathBuf,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommand,
    },

    /// Validate the checkout without contacting the platform
    Check {
        /// Checkout root
        #[arg(short, long, default_value = ".")]
        source: PathBuf,

        /// Platform profile name
        #[arg(short, long)]
        platform: Option<String>,

        /// Fail on warnings too
        #[arg(long)]
        strict_warnings: bool,
    },

    /// Print version information
    Version,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show {
        /// Checkout root
        #[arg(short, long, default_value = ".")]
        source: PathBuf,
    },
}

#[derive(Args, Debug, Clone)]
pub struct DeployArgs {
    /// Platform profile name (default: [app] platform, else streamlit)
    #[arg(short, long)]
    pub platform: Option<String>,

    /// Deployment strategy, overriding the profile's
    #[arg(short, long, value_enum)]
    pub target: Option<DeploymentTarget>,

    /// Checkout root
    #[arg(short, long, default_value = ".")]
    pub source: PathBuf,

    /// App name (default: checkout directory name)
    #[arg(long)]
    pub app: Option<String>,

    /// Dashboard entry point relative to the checkout
    #[arg(long)]
    pub entrypoint: Option<String>,

    /// Environment override passed to the platform (repeatable)
    #[arg(short, long = "env", value_name = "KEY=VALUE", value_parser = parse_env_pair)]
    pub env: Vec<(String, String)>,

    /// Port for the dashboard, exported as-is under the profile's port variable
    #[arg(long)]
    pub port: Option<String>,

    /// Git target: push the tracked branch
    #[arg(long)]
    pub push: bool,

    /// Poll the public URL before reporting success
    #[arg(long)]
    pub verify: bool,

    /// Validate and print the plan without triggering anything
    #[arg(long)]
    pub dry_run: bool,
}

fn parse_env_pair(raw: &str) -> Result<(String, String), String> {
    EnvOverrides::parse_pair(raw)
        .ok_or_else(|| format!("invalid override '{}': expected KEY=VALUE", raw))
}
