mod common;

use common::*;

#[test]
fn git_platform_needs_no_token() {
    let env = TestEnv::new();

    let result = env.run(&["login"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("pushes use your git credentials"), "{}", result.stdout);
}

#[test]
fn token_source_is_reported_but_never_printed() {
    let env = TestEnv::new();
    env.write_config(FAKE_CLI_PLATFORM);

    let result = env.run_with_env(&["login"], &[("FAKE_TOKEN", "fo1_very_secret")]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("found via env (FAKE_TOKEN)"), "{}", result.stdout);
    assert!(!result.combined_output().contains("fo1_very_secret"));
}

#[test]
fn missing_token_exits_3() {
    let env = TestEnv::new();

    let result = env.run(&["login", "--platform", "fly"]);

    assert_eq!(result.exit_code, 3, "{}", result.combined_output());
    assert!(result.stderr.contains("FLY_API_TOKEN is not set"), "{}", result.stderr);
}

#[test]
fn json_login_reports_source() {
    let env = TestEnv::new();

    let result = env.run_with_env(
        &["--json", "login", "--platform", "fly"],
        &[("FLY_API_TOKEN", "fo1_token")],
    );

    assert!(result.success, "{}", result.combined_output());
    let events = result.json_events();
    assert_eq!(events[0]["event"], "authenticated");
    assert_eq!(events[0]["source"], "env");
    assert_eq!(events[0]["env_var"], "FLY_API_TOKEN");
}
