use crate::common::*;

#[test]
fn json_run_emits_ndjson_events() {
    let env = TestEnv::new();
    env.write_file("a.txt", "a");
    env.write_file("c/inner.txt", "inner");
    env.write_config(ABC_MANIFEST);

    let result = env.run(&["--json"]);
    assert!(result.success, "{}", result.combined_output());

    let events = result.json_events();
    assert_eq!(events.len(), 5, "start + 3 entries + complete");

    assert_eq!(events[0]["event"], "start");
    assert_eq!(events[0]["entry_count"], 3);

    assert_eq!(events[1]["event"], "entry");
    assert_eq!(events[1]["path"], "a.txt");
    assert_eq!(events[1]["status"], "deleted");
    assert_eq!(events[1]["removal"], "file");

    assert_eq!(events[2]["path"], "b.txt");
    assert_eq!(events[2]["status"], "skipped_missing");

    assert_eq!(events[3]["path"], "c");
    assert_eq!(events[3]["kind"], "directory");
    assert_eq!(events[3]["removal"], "recursive");

    let complete = &events[4];
    assert_eq!(complete["event"], "complete");
    assert_eq!(complete["success"], true);
    assert_eq!(complete["deleted"], 2);
    assert_eq!(complete["skipped_missing"], 1);
    assert_eq!(complete["failed"], 0);
}

#[test]
fn json_output_has_no_human_text() {
    let env = TestEnv::new();
    let result = env.run(&["--json"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(!result.stdout.contains("Sweep Complete"));
    assert!(result
        .json_events()
        .iter()
        .any(|e| e["event"] == "group" && e["label"] == "Unused folders"));
}

#[test]
fn json_reports_config_errors_as_event() {
    let env = TestEnv::new();
    env.write_config("[run\n");

    let result = env.run(&["--json"]);

    assert_eq!(result.exit_code, 1);
    let events = result.json_events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["event"], "error");
    assert_eq!(events[0]["command"], "run");
}
