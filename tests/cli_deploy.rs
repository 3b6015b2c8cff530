//! End-to-end tests for `dashctl deploy`.
//!
//! CLI platforms are faked with `sh -c` so no hosting account is needed.

mod common;

use common::*;

#[test]
fn missing_manifest_exits_2_and_triggers_nothing() {
    let env = TestEnv::new();
    env.write_config(FAKE_CLI_PLATFORM);

    let result = env.run_with_env(&["deploy"], &[("FAKE_TOKEN", "secret")]);

    assert_eq!(result.exit_code, 2, "{}", result.combined_output());
    assert!(result.stderr.contains("requirements.txt"), "{}", result.stderr);
    assert!(!result.stdout.contains("Running sh"), "{}", result.stdout);
}

#[cfg(unix)]
#[test]
fn cli_target_reports_live_url() {
    let env = TestEnv::with_dashboard();
    env.write_config(FAKE_CLI_PLATFORM);

    let result = env.run_with_env(&["deploy"], &[("FAKE_TOKEN", "secret")]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("Authenticated with fake (from env)"), "{}", result.stdout);
    assert!(
        result.stdout.contains("[OK] Live at https://painel-indicadores.fake.dev"),
        "{}",
        result.stdout
    );
    assert!(result.stdout.contains("Running sh -c (+1 args)"), "{}", result.stdout);
    // Platform output stays hidden without -v
    assert!(!result.stdout.contains("installing requirements"), "{}", result.stdout);
}

#[cfg(unix)]
#[test]
fn verbose_echoes_platform_output() {
    let env = TestEnv::with_dashboard();
    env.write_config(FAKE_CLI_PLATFORM);

    let result = env.run_with_env(&["deploy", "-v"], &[("FAKE_TOKEN", "secret")]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("installing requirements"), "{}", result.stdout);
}

#[cfg(unix)]
#[test]
fn missing_token_exits_3_without_running_the_platform() {
    let env = TestEnv::with_dashboard();
    env.write_config(FAKE_CLI_PLATFORM);

    let result = env.run(&["deploy"]);

    assert_eq!(result.exit_code, 3, "{}", result.combined_output());
    assert!(result.stderr.contains("FAKE_TOKEN is not set"), "{}", result.stderr);
    assert!(!result.stdout.contains("Running sh"), "{}", result.stdout);
}

#[cfg(unix)]
#[test]
fn rejected_credentials_exit_3() {
    let env = TestEnv::with_dashboard();
    env.write_config(FAKE_CLI_UNAUTHORIZED);

    let result = env.run_with_env(&["deploy"], &[("FAKE_TOKEN", "expired")]);

    assert_eq!(result.exit_code, 3, "{}", result.combined_output());
    assert!(result.stderr.contains("authentication failed for fake"), "{}", result.stderr);
}

#[cfg(unix)]
#[test]
fn build_failure_exits_4_with_log_tail() {
    let env = TestEnv::with_dashboard();
    env.write_config(FAKE_CLI_BUILD_FAILURE);

    let result = env.run_with_env(&["deploy"], &[("FAKE_TOKEN", "secret")]);

    assert_eq!(result.exit_code, 4, "{}", result.combined_output());
    assert!(result.stderr.contains("build failed on fake"), "{}", result.stderr);
    assert!(
        result.stderr.contains("No matching distribution found for bcb==9"),
        "{}",
        result.stderr
    );
}

#[cfg(unix)]
#[test]
fn env_flag_and_port_reach_the_platform() {
    let env = TestEnv::with_dashboard();
    env.write_config(FAKE_CLI_ECHO_ENV);

    let result = env.run_with_env(
        &["deploy", "-v", "-e", "MODE=cli", "--port", "8502"],
        &[("FAKE_TOKEN", "secret")],
    );

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("mode=cli port=8502"), "{}", result.stdout);
}

#[test]
fn dry_run_prints_plan_and_runs_nothing() {
    let env = TestEnv::with_dashboard();
    env.write_config(FAKE_CLI_PLATFORM);

    let result = env.run(&["deploy", "--dry-run"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("Plan: sh -c"), "{}", result.stdout);
    assert!(result.stdout.contains("https://painel-indicadores.fake.dev"), "{}", result.stdout);
    assert!(!result.stdout.contains("Authenticated"), "{}", result.stdout);
}

#[test]
fn invalid_app_name_exits_1() {
    let env = TestEnv::with_dashboard();

    let result = env.run(&["deploy", "--app", "Painel_Indicadores", "--dry-run"]);

    assert_eq!(result.exit_code, 1, "{}", result.combined_output());
    assert!(result.stderr.contains("invalid app name"), "{}", result.stderr);
}

#[test]
fn unknown_platform_exits_1_and_lists_known() {
    let env = TestEnv::with_dashboard();

    let result = env.run(&["deploy", "--platform", "heroku"]);

    assert_eq!(result.exit_code, 1, "{}", result.combined_output());
    assert!(result.stderr.contains("known: fly, streamlit"), "{}", result.stderr);
}

#[test]
fn malformed_env_flag_is_a_usage_error() {
    let env = TestEnv::with_dashboard();

    let result = env.run(&["deploy", "-e", "NOEQUALS"]);

    assert_eq!(result.exit_code, 1, "{}", result.combined_output());
    assert!(result.stderr.contains("expected KEY=VALUE"), "{}", result.stderr);
}

#[test]
fn git_target_in_sync_is_up_to_date() {
    let env = TestEnv::with_dashboard();
    env.init_git_with_remote();

    let result = env.run(&["deploy"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(
        result.stdout.contains("Up to date: https://painel-indicadores.streamlit.app"),
        "{}",
        result.stdout
    );
}

#[test]
fn git_target_with_uncommitted_manifest_exits_2() {
    let env = TestEnv::new();
    env.write_file("app/pages/dashboard.py", DASHBOARD_PY);
    env.init_git_with_remote();
    env.write_file("requirements.txt", PINNED_MANIFEST);

    let result = env.run(&["deploy"]);

    assert_eq!(result.exit_code, 2, "{}", result.combined_output());
}

#[test]
fn git_target_push_updates_remote() {
    let env = TestEnv::with_dashboard();
    let remote = env.init_git_with_remote();
    env.write_file("app/pages/dashboard.py", "import streamlit as st\nst.title(\"v2\")\n");
    env.git(&["commit", "-q", "-am", "v2"]);
    let head = env.git(&["rev-parse", "HEAD"]);

    let without_push = env.run(&["deploy"]);
    assert!(without_push.success, "{}", without_push.combined_output());
    assert!(without_push.stdout.contains("--push"), "{}", without_push.stdout);

    let result = env.run(&["deploy", "--push"]);
    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("Pushing main to origin"), "{}", result.stdout);
    assert!(
        result.stdout.contains("Live at https://painel-indicadores.streamlit.app"),
        "{}",
        result.stdout
    );

    let remote_head = std::process::Command::new("git")
        .args(["--git-dir", remote.to_str().unwrap(), "rev-parse", "refs/heads/main"])
        .output()
        .unwrap();
    assert_eq!(String::from_utf8_lossy(&remote_head.stdout).trim(), head);
}

#[test]
fn git_target_push_refuses_branch_without_manifest() {
    let env = TestEnv::new();
    env.write_file("README.md", "# painel\n");
    let remote = env.init_git_with_remote();
    env.git(&["checkout", "-q", "-b", "feature"]);
    env.write_file("requirements.txt", PINNED_MANIFEST);
    env.write_file("app/pages/dashboard.py", DASHBOARD_PY);
    env.git(&["add", "-A"]);
    env.git(&["commit", "-q", "-m", "dashboard"]);
    let remote_main = || {
        let output = std::process::Command::new("git")
            .args(["--git-dir", remote.to_str().unwrap(), "rev-parse", "refs/heads/main"])
            .output()
            .unwrap();
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    };
    let before = remote_main();

    let result = env.run(&["deploy", "--push"]);

    assert_eq!(result.exit_code, 2, "{}", result.combined_output());
    assert!(result.stderr.contains("branch 'main'"), "{}", result.stderr);
    assert!(!result.stdout.contains("Live at"), "{}", result.stdout);
    assert_eq!(remote_main(), before);
}

#[cfg(unix)]
#[test]
fn json_deploy_emits_ndjson_ending_in_complete() {
    let env = TestEnv::with_dashboard();
    env.write_config(FAKE_CLI_PLATFORM);

    let result = env.run_with_env(&["--json", "deploy"], &[("FAKE_TOKEN", "secret")]);

    assert!(result.success, "{}", result.combined_output());
    let events = result.json_events();
    assert_eq!(events[0]["event"], "start");
    assert_eq!(events[0]["platform"], "fake");
    assert!(events.iter().all(|e| e["command"] == "deploy"));

    let last = events.last().unwrap();
    assert_eq!(last["event"], "complete");
    assert_eq!(last["state"], "live");
    assert_eq!(last["url"], "https://painel-indicadores.fake.dev");
    assert!(!result.stdout.contains("secret"));
}

#[test]
fn json_failure_emits_error_event() {
    let env = TestEnv::new();

    let result = env.run(&["--json", "deploy"]);

    assert_eq!(result.exit_code, 2);
    let events = result.json_events();
    let error = events.last().unwrap();
    assert_eq!(error["event"], "error");
    assert_eq!(error["kind"], "missing_manifest");
    assert_eq!(error["exit_code"], 2);
}
