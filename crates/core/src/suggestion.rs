// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Suggestions produced by the external provider.
//!
//! A [`Suggestion`] is untrusted input. The engine re-validates and
//! re-classifies the suggested command before acting on it; the
//! `safe_to_auto_execute` flag is advisory only and never substitutes for
//! the local risk verdict.

use crate::command::Command;
use serde::{Deserialize, Serialize};

/// A command suggestion from the model, parsed from its JSON reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub command: Command,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub risks: Vec<String>,
    #[serde(default)]
    pub alternatives: Vec<Command>,
    #[serde(default)]
    pub safe_to_auto_execute: bool,
}

impl Suggestion {
    /// Safe fallback used when the provider is unreachable or its reply
    /// cannot be parsed. The command is a harmless diagnostic echo.
    pub fn fallback(reason: impl Into<String>) -> Self {
        Self {
            command: Command::new("echo 'shai: no suggestion available'"),
            explanation: reason.into(),
            risks: vec!["suggestion provider failed".to_string()],
            alternatives: Vec::new(),
            safe_to_auto_execute: false,
        }
    }
}

#[cfg(test)]
#[path = "suggestion_tests.rs"]
mod tests;
