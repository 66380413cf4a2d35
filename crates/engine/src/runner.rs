// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process runner: shell-interpreted execution under a deadline.
//!
//! The runner owns the append-only execution log. Each non-dry-run
//! attempt produces exactly one [`ExecutionOutcome`], appended in arrival
//! order; the log exists to answer "most recent failure" queries and
//! lives as long as the runner does.

use parking_lot::Mutex;
use shai_adapters::subprocess::{run_with_timeout, SubprocessError};
use shai_core::{Command, ExecutionOutcome, RiskVerdict, EXIT_NOT_RUN};
use std::process::Stdio;
use std::time::{Duration, Instant};

pub struct Runner {
    timeout: Duration,
    log: Mutex<Vec<ExecutionOutcome>>,
}

impl Runner {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout, log: Mutex::new(Vec::new()) }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Execute `command` as a single shell-interpreted invocation in the
    /// caller's working directory.
    ///
    /// Dry runs return a synthetic success and never spawn a process (and
    /// are not logged). A timeout force-kills the process and yields the
    /// `-1` sentinel; the runner itself never retries.
    pub async fn run(
        &self,
        command: &Command,
        verdict: &RiskVerdict,
        dry_run: bool,
    ) -> ExecutionOutcome {
        if dry_run {
            return ExecutionOutcome::dry_run(command.clone(), verdict);
        }

        let cmd_span = tracing::info_span!(
            "shai.cmd",
            cmd = %command,
            exit_code = tracing::field::Empty,
            duration_ms = tracing::field::Empty,
        );

        let start = Instant::now();
        let mut process = tokio::process::Command::new("sh");
        process.arg("-c").arg(command.as_str());
        process.stdout(Stdio::piped());
        process.stderr(Stdio::piped());

        let outcome = match run_with_timeout(process, self.timeout, "command").await {
            Ok(output) => {
                let exit_code = output.status.code().unwrap_or(EXIT_NOT_RUN);
                ExecutionOutcome::completed(
                    command.clone(),
                    verdict,
                    exit_code,
                    String::from_utf8_lossy(&output.stdout).into_owned(),
                    String::from_utf8_lossy(&output.stderr).into_owned(),
                )
            }
            Err(SubprocessError::Timeout { .. }) => {
                ExecutionOutcome::timed_out(command.clone(), verdict, self.timeout.as_secs())
            }
            Err(SubprocessError::Io(source)) => ExecutionOutcome::spawn_failed(
                command.clone(),
                verdict,
                format!("failed to spawn shell: {source}"),
            ),
        };

        cmd_span.record("exit_code", outcome.exit_code);
        cmd_span.record("duration_ms", start.elapsed().as_millis() as u64);

        self.log.lock().push(outcome.clone());
        outcome
    }

    /// Most recent failed outcome, if any.
    pub fn last_failure(&self) -> Option<ExecutionOutcome> {
        self.log.lock().iter().rev().find(|o| !o.success).cloned()
    }

    /// Snapshot of the execution log in arrival order.
    pub fn history(&self) -> Vec<ExecutionOutcome> {
        self.log.lock().clone()
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
