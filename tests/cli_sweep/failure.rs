//! Failure isolation and the exit-code policy.
//!
//! These tests only need some entry to fail, even when running as root: a
//! file name longer than the filesystem limit fails its kind check with an
//! error other than "not found". Refused removals are covered where they
//! can be injected, by the mock file system and the read-only directory
//! tests in `application::sweep::use_case`.

use crate::common::*;

fn failing_manifest() -> String {
    let long_name = format!("{}.txt", "x".repeat(300));
    format!(
        r#"
[[manifest]]
path = "first.txt"
kind = "file"

[[manifest]]
path = "{long_name}"
kind = "file"

[[manifest]]
path = "last.txt"
kind = "file"
"#
    )
}

fn failing_env() -> TestEnv {
    let env = TestEnv::new();
    env.write_file("first.txt", "1");
    env.write_file("last.txt", "3");
    env.write_config(&failing_manifest());
    env
}

#[test]
fn failure_does_not_stop_later_entries() {
    let env = failing_env();

    let result = env.run(&[]);

    assert!(!env.exists("first.txt"));
    assert!(!env.exists("last.txt"), "{}", result.combined_output());
    assert!(result.stdout.contains("2 deleted"));
    assert!(result.stdout.contains("1 failed"));
    assert!(result.stdout.contains("Failed:"));
    assert!(result.stdout.contains("Next:"));
}

#[test]
fn exit_nonzero_is_default() {
    let env = failing_env();
    let result = env.run(&[]);
    assert_eq!(result.exit_code, 1, "{}", result.combined_output());
}

#[test]
fn exit_zero_flag_ignores_failures() {
    let env = failing_env();
    let result = env.run(&["--on-failure", "exit-zero"]);
    assert_eq!(result.exit_code, 0, "{}", result.combined_output());
    assert!(result.stdout.contains("1 failed"));
}

#[test]
fn exit_zero_from_config_and_env() {
    let env = failing_env();
    let config = format!("[run]\non_failure = \"exit_zero\"\n{}", failing_manifest());
    env.write_config(&config);

    let result = env.run(&[]);
    assert_eq!(result.exit_code, 0, "{}", result.combined_output());

    env.write_file("first.txt", "1");
    let result = env.run_with_env(&[], &[("SWEEP_ON_FAILURE", "exit_nonzero")]);
    assert_eq!(result.exit_code, 1, "{}", result.combined_output());
}

#[test]
fn cli_policy_overrides_config() {
    let env = failing_env();
    let config = format!("[run]\non_failure = \"exit_zero\"\n{}", failing_manifest());
    env.write_config(&config);

    let result = env.run(&["--on-failure", "exit-nonzero"]);
    assert_eq!(result.exit_code, 1, "{}", result.combined_output());
}
