mod common;

use common::*;

#[test]
fn version_subcommand_prints_package_version() {
    let env = TestEnv::new();

    let result = env.run(&["version"]);

    assert!(result.success);
    assert_eq!(result.stdout.trim(), format!("dashctl {}", env!("CARGO_PKG_VERSION")));
}

#[test]
fn help_exits_0_and_usage_errors_exit_1() {
    let env = TestEnv::new();

    let help = env.run(&["--help"]);
    assert_eq!(help.exit_code, 0);
    assert!(help.stdout.contains("deploy"), "{}", help.stdout);

    let unknown = env.run(&["frobnicate"]);
    assert_eq!(unknown.exit_code, 1, "{}", unknown.combined_output());

    let bad_target = env.run(&["deploy", "--target", "ftp"]);
    assert_eq!(bad_target.exit_code, 1, "{}", bad_target.combined_output());
}
