// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution outcomes: the single value every pipeline attempt produces.
//!
//! The engine's public contract always returns an [`ExecutionOutcome`],
//! never an uncaught fault. Failures are data, tagged with a
//! [`FailureKind`] so callers can distinguish "ran and failed" from
//! "never ran".

use crate::command::Command;
use crate::risk::RiskVerdict;
use serde::{Deserialize, Serialize};

/// Sentinel exit code for attempts where no process produced a status:
/// validation failures, gate denials, timeouts, and spawn failures.
pub const EXIT_NOT_RUN: i32 = -1;

/// Why an attempt failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Rejected before execution (empty or injection-marked input).
    ValidationRejected,
    /// The confirmation gate refused the command.
    ConfirmationDenied,
    /// The process was forcibly killed at the deadline.
    Timeout,
    /// The interpreter could not be started.
    SpawnFailure,
    /// The process ran and returned a non-zero status.
    NonZeroExit,
}

/// Record of a single execution attempt. Created exactly once per attempt
/// and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionOutcome {
    pub command: Command,
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    pub dangerous: bool,
    pub risks: Vec<String>,
    pub dry_run: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<FailureKind>,
}

impl ExecutionOutcome {
    /// Synthetic success for a dry run. No process is spawned.
    pub fn dry_run(command: Command, verdict: &RiskVerdict) -> Self {
        let stdout = format!("[dry run] would execute: {command}");
        Self {
            command,
            success: true,
            stdout,
            stderr: String::new(),
            exit_code: 0,
            dangerous: verdict.dangerous,
            risks: verdict.reasons.clone(),
            dry_run: true,
            failure: None,
        }
    }

    /// Outcome of a process that ran to completion.
    pub fn completed(
        command: Command,
        verdict: &RiskVerdict,
        exit_code: i32,
        stdout: String,
        stderr: String,
    ) -> Self {
        let success = exit_code == 0;
        Self {
            command,
            success,
            stdout,
            stderr,
            exit_code,
            dangerous: verdict.dangerous,
            risks: verdict.reasons.clone(),
            dry_run: false,
            failure: (!success).then_some(FailureKind::NonZeroExit),
        }
    }

    /// Rejected by the validator; never reached the classifier or runner.
    pub fn rejected(command: Command, reason: String) -> Self {
        Self::not_run(command, &RiskVerdict::safe(), FailureKind::ValidationRejected, reason)
    }

    /// Refused by the confirmation gate.
    pub fn denied(command: Command, verdict: &RiskVerdict) -> Self {
        Self::not_run(
            command,
            verdict,
            FailureKind::ConfirmationDenied,
            "execution cancelled by user".to_string(),
        )
    }

    /// Forcibly terminated at the deadline. Terminal for this attempt.
    ///
    /// Sub-second deadlines round up to one so the message never claims
    /// a zero-second timeout.
    pub fn timed_out(command: Command, verdict: &RiskVerdict, timeout_secs: u64) -> Self {
        let stderr = format!("command timed out after {} seconds", timeout_secs.max(1));
        Self::not_run(command, verdict, FailureKind::Timeout, stderr)
    }

    /// The shell interpreter could not be started.
    pub fn spawn_failed(command: Command, verdict: &RiskVerdict, error: String) -> Self {
        Self::not_run(command, verdict, FailureKind::SpawnFailure, error)
    }

    fn not_run(
        command: Command,
        verdict: &RiskVerdict,
        failure: FailureKind,
        stderr: String,
    ) -> Self {
        Self {
            command,
            success: false,
            stdout: String::new(),
            stderr,
            exit_code: EXIT_NOT_RUN,
            dangerous: verdict.dangerous,
            risks: verdict.reasons.clone(),
            dry_run: false,
            failure: Some(failure),
        }
    }

    /// Whether the repair orchestrator may act on this outcome.
    ///
    /// Only real program failures qualify; sentinel failures (validation,
    /// denial, timeout, spawn) are terminal for the attempt.
    pub fn is_repair_candidate(&self) -> bool {
        !self.success && self.exit_code != EXIT_NOT_RUN
    }
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod tests;
