//! Config-driven behavior: rule overrides flow through to the pipeline.

use std::io::Write;

use crate::prelude::*;

fn config_file(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    (dir, path)
}

#[tokio::test]
async fn file_rules_replace_the_builtin_table() {
    let (_dir, path) = config_file(
        r#"
[safety]
timeout_secs = 5

[[safety.dangerous_patterns]]
name = "shutdown"
pattern = "shutdown|poweroff"

[safety.heuristics]
flag_sudo = false
"#,
    );
    let config = Config::from_file(&path).unwrap();

    // The replaced table no longer knows the builtins, and the sudo
    // heuristic is off.
    let classifier = config.classifier().unwrap();
    assert!(!classifier.classify("rm -rf /").dangerous);
    assert!(!classifier.classify("sudo ls").dangerous);
    assert!(classifier.classify("shutdown -h now").dangerous);

    let provider = Arc::new(FakeProvider::new());
    let confirmer = Arc::new(FakeConfirmer::denying());
    let executor = Executor::from_config(&config, provider, confirmer.clone()).unwrap();

    // A command the builtin table would flag now runs unprompted.
    let outcome = executor.execute("echo mkfs", ExecOptions::default()).await;
    assert!(outcome.success);
    assert!(!outcome.dangerous);
    assert_eq!(confirmer.ask_count(), 0);

    // The file's own rule is enforced end to end.
    let outcome = executor.execute("echo shutdown", ExecOptions::default()).await;
    assert_eq!(outcome.failure, Some(FailureKind::ConfirmationDenied));
    assert_eq!(confirmer.ask_count(), 1);
}

#[test]
fn outcomes_serialize_for_json_rendering() {
    let outcome = ExecutionOutcome::completed(
        Command::new("echo hi"),
        &shai_core::RiskVerdict::safe(),
        0,
        "hi\n".to_string(),
        String::new(),
    );

    let value = serde_json::to_value(&outcome).unwrap();
    assert_eq!(value["command"], "echo hi");
    assert_eq!(value["exit_code"], 0);
    assert_eq!(value["success"], true);
    // No failure key on success.
    assert!(value.get("failure").is_none());
}
