//! Reusable checkout content and platform profiles.

#![allow(dead_code)]

pub const PINNED_MANIFEST: &str = "\
# dashboard dependencies
streamlit==1.32.0
pandas==2.2.1
plotly==5.20.0
";

pub const DASHBOARD_PY: &str = "import streamlit as st\n\nst.title(\"Indicadores\")\n";

/// CLI platform whose publish program is `sh`, printing the app URL
pub const FAKE_CLI_PLATFORM: &str = r#"
[app]
platform = "fake"

[platforms.fake]
target = "cli"
domain = "fake.dev"
program = "sh"
deploy_args = ["-c", "echo installing requirements; echo deployed to https://{app}.fake.dev"]
token_env = "FAKE_TOKEN"
"#;

/// Same platform, but the publish step is rejected for bad credentials
pub const FAKE_CLI_UNAUTHORIZED: &str = r#"
[app]
platform = "fake"

[platforms.fake]
target = "cli"
domain = "fake.dev"
program = "sh"
deploy_args = ["-c", "echo 'Error: unauthorized' >&2; exit 1"]
token_env = "FAKE_TOKEN"
"#;

/// Same platform, but the build breaks on a bad requirement
pub const FAKE_CLI_BUILD_FAILURE: &str = r#"
[app]
platform = "fake"

[platforms.fake]
target = "cli"
domain = "fake.dev"
program = "sh"
deploy_args = ["-c", "echo 'Collecting bcb'; echo 'ERROR: No matching distribution found for bcb==9' >&2; exit 1"]
token_env = "FAKE_TOKEN"
"#;

/// Publish program that echoes an env override
pub const FAKE_CLI_ECHO_ENV: &str = r#"
[app]
platform = "fake"

[env]
MODE = "config"

[platforms.fake]
target = "cli"
domain = "fake.dev"
program = "sh"
deploy_args = ["-c", "echo mode=$MODE port=$PORT; echo https://{app}.fake.dev"]
token_env = "FAKE_TOKEN"
port_env = "PORT"
"#;
