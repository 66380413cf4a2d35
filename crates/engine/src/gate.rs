// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Confirmation gate for dangerous commands.
//!
//! A small state machine constructed fresh for every execution attempt.
//! Every command passes through the gate; a safe verdict or an explicit
//! auto-confirm approves immediately, a dangerous verdict suspends on the
//! human confirmation capability. The default is deny: anything except an
//! explicit affirmative (including interrupts) resolves to `Denied`.

use shai_adapters::ConfirmationCapability;
use shai_core::{Command, RiskVerdict};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Idle,
    AwaitingConfirmation,
    Approved,
    Denied,
}

/// Single-use gate; terminal states are never reused.
#[derive(Debug)]
pub struct ConfirmationGate {
    state: GateState,
}

impl Default for ConfirmationGate {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfirmationGate {
    pub fn new() -> Self {
        Self { state: GateState::Idle }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    /// Drive the gate to a terminal state for one command.
    ///
    /// Consumes the gate: a fresh one is constructed per attempt.
    pub async fn resolve<C: ConfirmationCapability>(
        mut self,
        command: &Command,
        verdict: &RiskVerdict,
        auto_confirm: bool,
        confirmer: &C,
    ) -> GateState {
        if !verdict.dangerous || auto_confirm {
            self.state = GateState::Approved;
            return self.state;
        }

        self.state = GateState::AwaitingConfirmation;
        let approved = confirmer.ask(command.as_str(), &verdict.reasons).await;

        self.state = if approved {
            GateState::Approved
        } else {
            tracing::warn!(cmd = %command, "dangerous command denied");
            GateState::Denied
        };
        self.state
    }
}

#[cfg(test)]
#[path = "gate_tests.rs"]
mod tests;
