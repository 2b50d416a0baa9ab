use crate::common::*;

#[test]
fn init_writes_builtin_manifest() {
    let env = TestEnv::new();

    let result = env.run(&["init"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("Wrote"));
    assert!(result.stdout.contains("23 entries"));

    let content = std::fs::read_to_string(env.path("sweep.toml")).unwrap();
    assert!(content.contains("[[manifest]]"));
    assert!(content.contains("src/components/chat"));
    assert!(content.contains("on_failure = \"exit_nonzero\""));
}

#[test]
fn init_refuses_to_overwrite() {
    let env = TestEnv::new();
    env.write_config("# mine\n");

    let result = env.run(&["init"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("already exists"));
    assert!(result.stderr.contains("--force"));
    assert_eq!(
        std::fs::read_to_string(env.path("sweep.toml")).unwrap(),
        "# mine\n"
    );
}

#[test]
fn init_force_replaces_broken_config() {
    let env = TestEnv::new();
    env.write_config("[run\n");

    let result = env.run(&["init", "--force"]);
    assert!(result.success, "{}", result.combined_output());

    let show = env.run(&["show", "--json"]);
    assert!(show.success, "{}", show.combined_output());
    let events = show.json_events();
    assert_eq!(events[0]["entries"].as_array().unwrap().len(), 23);
}

#[test]
fn init_then_run_uses_written_manifest() {
    let env = TestEnv::new();
    env.write_file("dev-server.pid", "42");

    assert!(env.run(&["init"]).success);
    let result = env.run(&[]);

    assert!(result.success, "{}", result.combined_output());
    assert!(!env.exists("dev-server.pid"));
    assert!(env.exists("sweep.toml"));
}
