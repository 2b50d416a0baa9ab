use crate::common::*;

#[test]
fn help_lists_subcommands() {
    let env = TestEnv::new();
    let result = env.run(&["--help"]);

    assert!(result.success, "{}", result.combined_output());
    for word in ["run", "show", "init", "--on-failure", "--root"] {
        assert!(result.stdout.contains(word), "missing {word} in help");
    }
}

#[test]
fn builtin_manifest_deletes_present_entries() {
    let env = TestEnv::new();
    env.write_file("build-log.txt", "log");
    env.write_file("src/data/news.ts", "export {}");
    env.write_file("src/components/chat/ChatPanel.tsx", "x");
    env.write_file("src/components/ui/button.tsx", "keep me");

    let result = env.run(&[]);

    assert_eq!(result.exit_code, 0, "{}", result.combined_output());
    assert!(!env.exists("build-log.txt"));
    assert!(!env.exists("src/data/news.ts"));
    assert!(!env.exists("src/components/chat"));
    assert!(env.exists("src/components/ui/button.tsx"));

    assert!(result.stdout.contains("Deleted: build-log.txt"));
    assert!(result
        .stdout
        .contains("Deleted (with contents): src/components/chat/"));
    assert!(result.stdout.contains("Not found: patch.diff"));
    assert!(result.stdout.contains("Temporary and log files"));
    assert!(result.stdout.contains("3 deleted"));
    assert!(result.stdout.contains("20 not found"));
    assert!(result.stdout.contains("0 failed"));
}

#[test]
fn run_subcommand_matches_default() {
    let env = TestEnv::new();
    env.write_file("a.txt", "a");
    env.write_config(ABC_MANIFEST);

    let result = env.run(&["run"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(!env.exists("a.txt"));
}

#[test]
fn abc_scenario_counts() {
    let env = TestEnv::new();
    env.write_file("a.txt", "a");
    env.write_file("c/inner.txt", "inner");
    env.write_config(ABC_MANIFEST);

    let result = env.run(&[]);

    assert_eq!(result.exit_code, 0, "{}", result.combined_output());
    assert!(result.stdout.contains("2 deleted"));
    assert!(result.stdout.contains("1 not found"));
    assert!(result.stdout.contains("0 failed"));
    assert!(!env.exists("a.txt"));
    assert!(!env.exists("c"));
}

#[test]
fn second_run_is_idempotent() {
    let env = TestEnv::new();
    env.write_file("a.txt", "a");
    env.write_file("c/inner.txt", "inner");
    env.write_config(ABC_MANIFEST);

    let first = env.run(&[]);
    assert!(first.success, "{}", first.combined_output());

    let second = env.run(&[]);
    assert_eq!(second.exit_code, 0, "{}", second.combined_output());
    assert!(second.stdout.contains("0 deleted"));
    assert!(second.stdout.contains("3 not found"));
}

#[test]
fn root_flag_targets_other_directory() {
    let env = TestEnv::new();
    let elsewhere = tempfile::tempdir().unwrap();
    std::fs::write(elsewhere.path().join("build-log.txt"), "log").unwrap();

    let root = elsewhere.path().to_string_lossy().to_string();
    let result = env.run(&["--root", &root]);

    assert!(result.success, "{}", result.combined_output());
    assert!(!elsewhere.path().join("build-log.txt").exists());
}

#[test]
fn missing_root_skips_everything() {
    let env = TestEnv::new();
    let missing = env.path("does-not-exist");
    let missing = missing.to_string_lossy().to_string();

    let result = env.run(&["--root", &missing]);

    assert_eq!(result.exit_code, 0, "{}", result.combined_output());
    assert!(result.stdout.contains("0 deleted"));
    assert!(result.stdout.contains("23 not found"));
}
