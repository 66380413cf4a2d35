// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The guarded execution pipeline and its bounded repair loop.
//!
//! Ordering is an invariant: a command is never executed without passing
//! the validator and then the classifier, and a dangerous verdict always
//! goes through the confirmation gate before the runner. The repair loop
//! is bounded to exactly one hop per top-level call, so a failing fix can
//! never trigger a chain of further provider calls.

use crate::gate::{ConfirmationGate, GateState};
use crate::query::build_fix_query;
use crate::runner::Runner;
use shai_adapters::{ConfirmationCapability, SuggestionProvider};
use shai_core::{
    validate, Command, Config, ExecutionOutcome, RiskClassifier, RuleError, Suggestion,
};
use std::time::Duration;

/// Per-call execution options.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExecOptions {
    /// Preview only: never spawn a process.
    pub dry_run: bool,
    /// Approve dangerous commands without prompting.
    pub auto_confirm: bool,
}

/// Executes commands through the full validate → classify → gate → run
/// pipeline, using the configured capabilities.
///
/// This is the only component that may call the suggestion provider.
pub struct Executor<P, C> {
    classifier: RiskClassifier,
    runner: Runner,
    provider: P,
    confirmer: C,
}

impl<P, C> Executor<P, C>
where
    P: SuggestionProvider,
    C: ConfirmationCapability,
{
    pub fn new(classifier: RiskClassifier, runner: Runner, provider: P, confirmer: C) -> Self {
        Self { classifier, runner, provider, confirmer }
    }

    /// Build an executor from an immutable configuration value.
    pub fn from_config(config: &Config, provider: P, confirmer: C) -> Result<Self, RuleError> {
        Ok(Self::new(
            config.classifier()?,
            Runner::new(Duration::from_secs(config.safety.timeout_secs)),
            provider,
            confirmer,
        ))
    }

    pub fn runner(&self) -> &Runner {
        &self.runner
    }

    /// Run one command through the pipeline. Always returns an outcome,
    /// never faults.
    pub async fn execute(&self, text: &str, opts: ExecOptions) -> ExecutionOutcome {
        let command = Command::new(text);

        if let Err(reason) = validate(command.as_str()) {
            return ExecutionOutcome::rejected(command, format!("invalid command: {reason}"));
        }

        let verdict = self.classifier.classify(command.as_str());
        let gate = ConfirmationGate::new();
        match gate.resolve(&command, &verdict, opts.auto_confirm, &self.confirmer).await {
            GateState::Approved => self.runner.run(&command, &verdict, opts.dry_run).await,
            _ => ExecutionOutcome::denied(command, &verdict),
        }
    }

    /// Run the pipeline, and on a real program failure make exactly one
    /// repair hop: ask the provider for a fix and re-run the full
    /// pipeline on it. The second outcome is final either way.
    ///
    /// Sentinel failures (validation, denial, timeout, spawn) are never
    /// repaired, and the provider is called at most once per invocation.
    pub async fn attempt_with_repair(&self, text: &str, auto_confirm: bool) -> ExecutionOutcome {
        let opts = ExecOptions { dry_run: false, auto_confirm };
        let first = self.execute(text, opts).await;
        if !first.is_repair_candidate() {
            return first;
        }

        tracing::info!(
            cmd = %first.command,
            exit_code = first.exit_code,
            "requesting repair suggestion"
        );
        let suggestion = self.suggest(&build_fix_query(&first)).await;

        // The provider's safety flag is advisory only: the fix re-enters
        // the pipeline and gets its own verdict and gate.
        self.execute(suggestion.command.as_str(), opts).await
    }

    /// Request a suggestion, degrading to the safe fallback when the
    /// provider is unreachable or answers garbage.
    pub async fn suggest(&self, query: &str) -> Suggestion {
        match self.provider.suggest(query).await {
            Ok(suggestion) => suggestion,
            Err(error) => {
                tracing::warn!(%error, "suggestion provider failed");
                Suggestion::fallback(error.to_string())
            }
        }
    }
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
