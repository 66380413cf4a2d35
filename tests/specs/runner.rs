//! Process execution details: capture, exit codes, and the deadline.

use crate::prelude::*;

#[tokio::test]
async fn captures_both_streams_and_the_exit_code() {
    let h = Harness::approving();

    let outcome =
        h.executor.execute("echo out; echo err 1>&2; exit 3", ExecOptions::default()).await;
    assert!(!outcome.success);
    assert_eq!(outcome.exit_code, 3);
    assert_eq!(outcome.stdout, "out\n");
    assert_eq!(outcome.stderr, "err\n");
    assert_eq!(outcome.failure, Some(FailureKind::NonZeroExit));
}

#[tokio::test]
async fn unknown_program_fails_with_a_shell_error() {
    let h = Harness::approving();

    let outcome =
        h.executor.execute("definitely_not_a_command_xyz", ExecOptions::default()).await;
    assert!(!outcome.success);
    assert_ne!(outcome.exit_code, 0);
    assert!(outcome.stderr.to_lowercase().contains("not found"));
    // A shell-level failure is still a real program failure.
    assert!(outcome.is_repair_candidate());
}

#[tokio::test]
async fn deadline_kills_the_process_and_yields_the_sentinel() {
    let h = Harness::with_timeout(Duration::from_millis(200));

    let started = std::time::Instant::now();
    let outcome = h.executor.execute("sleep 60", ExecOptions::default()).await;
    assert!(started.elapsed() < Duration::from_secs(5));

    assert_eq!(outcome.failure, Some(FailureKind::Timeout));
    assert_eq!(outcome.exit_code, EXIT_NOT_RUN);
    assert!(outcome.stderr.contains("timed out"));
    assert!(!outcome.is_repair_candidate());
}

#[tokio::test]
async fn timeouts_are_recorded_in_the_log() {
    let h = Harness::with_timeout(Duration::from_millis(200));

    h.executor.execute("sleep 60", ExecOptions::default()).await;
    let last = h.executor.runner().last_failure().unwrap();
    assert_eq!(last.failure, Some(FailureKind::Timeout));
}
