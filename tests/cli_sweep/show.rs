use crate::common::*;

#[test]
fn show_lists_builtin_manifest_without_deleting() {
    let env = TestEnv::new();
    env.write_file("build-log.txt", "log");

    let result = env.run(&["show"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(env.exists("build-log.txt"));
    assert!(result.stdout.contains("Manifest    built-in"));
    assert!(result.stdout.contains("23 (22 files, 1 directories)"));
    assert!(result.stdout.contains("Dead code pages"));
    assert!(result.stdout.contains("  src/components/chat/"));
}

#[test]
fn show_json_reports_resolved_settings() {
    let env = TestEnv::new();
    env.write_config(&format!("[run]\non_failure = \"exit_zero\"\n{}", ABC_MANIFEST));

    let result = env.run(&["show", "--json"]);

    assert!(result.success, "{}", result.combined_output());
    let events = result.json_events();
    assert_eq!(events.len(), 1);

    let manifest = &events[0];
    assert_eq!(manifest["event"], "manifest");
    assert_eq!(manifest["on_failure"], "exit_zero");
    assert!(manifest["source"]
        .as_str()
        .unwrap()
        .ends_with("sweep.toml"));

    let entries = manifest["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[2]["path"], "c");
    assert_eq!(entries[2]["kind"], "directory");
}
