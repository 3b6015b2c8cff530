mod common;

use common::*;

#[test]
fn show_defaults_include_builtin_platforms() {
    let env = TestEnv::new();

    let result = env.run(&["config", "show"]);

    assert!(result.success, "{}", result.combined_output());
    let parsed: toml::Value = toml::from_str(&result.stdout).unwrap();
    assert_eq!(parsed["app"]["platform"].as_str(), Some("streamlit"));
    assert_eq!(parsed["platforms"]["fly"]["target"].as_str(), Some("cli"));
    assert_eq!(
        parsed["platforms"]["streamlit"]["domain"].as_str(),
        Some("streamlit.app")
    );
    assert_eq!(parsed["verify"]["attempts"].as_integer(), Some(3));
}

#[test]
fn project_config_beats_user_config() {
    let env = TestEnv::new();
    env.write_user_config("[app]\nplatform = \"fly\"\nname = \"from-user\"\n");

    let user_only = env.run(&["--json", "config", "show"]);
    let events = user_only.json_events();
    assert_eq!(events[0]["config"]["app"]["name"], "from-user");

    env.write_config("[app]\nname = \"from-project\"\n");
    let result = env.run(&["--json", "config", "show"]);
    let events = result.json_events();
    assert_eq!(events[0]["config"]["app"]["name"], "from-project");
    // Project file replaces the user file entirely
    assert_eq!(events[0]["config"]["app"]["platform"], "streamlit");
}

#[test]
fn environment_overrides_config_file() {
    let env = TestEnv::new();
    env.write_config("[app]\nplatform = \"fly\"\n");

    let result = env.run_with_env(
        &["--json", "config", "show"],
        &[("DASHCTL_PLATFORM", "streamlit"), ("DASHCTL_TARGET", "cli")],
    );

    let events = result.json_events();
    assert_eq!(events[0]["config"]["app"]["platform"], "streamlit");
    assert_eq!(events[0]["config"]["app"]["target"], "cli");
}

#[test]
fn explicit_config_path_must_exist() {
    let env = TestEnv::new();

    let result = env.run_with_env(
        &["config", "show"],
        &[("DASHCTL_CONFIG", "/nonexistent/dashctl.toml")],
    );

    assert_eq!(result.exit_code, 1, "{}", result.combined_output());
}

#[test]
fn invalid_toml_exits_1() {
    let env = TestEnv::new();
    env.write_config("[app\nplatform = ");

    let result = env.run(&["config", "show"]);

    assert_eq!(result.exit_code, 1, "{}", result.combined_output());
    assert!(result.stderr.contains("invalid config"), "{}", result.stderr);
}

#[test]
fn custom_platform_is_listed_next_to_builtins() {
    let env = TestEnv::new();
    env.write_config(FAKE_CLI_PLATFORM);

    let result = env.run(&["config", "show"]);

    assert!(result.success, "{}", result.combined_output());
    let parsed: toml::Value = toml::from_str(&result.stdout).unwrap();
    let platforms = parsed["platforms"].as_table().unwrap();
    let names: Vec<&str> = platforms.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["fake", "fly", "streamlit"]);

    let fake = &platforms["fake"];
    assert_eq!(fake["program"].as_str(), Some("sh"));
    assert_eq!(fake["manifest"].as_str(), Some("requirements.txt"));
    assert_eq!(fake["port_env"].as_str(), Some("STREAMLIT_SERVER_PORT"));
    assert!(fake.get("auth_command").is_none());
}
