// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! shai-core: pure domain types and decision logic for the guarded
//! command execution engine.
//!
//! Everything in this crate is synchronous and side-effect free (the one
//! exception is [`config::Config::from_file`], which reads the config
//! file).
//! Process spawning, confirmation prompts, and suggestion providers live
//! in `shai-engine` and `shai-adapters`.

pub mod command;
pub mod config;
pub mod fixes;
pub mod outcome;
pub mod risk;
pub mod suggestion;
pub mod validate;

pub use command::Command;
pub use config::{Config, ConfigError, ProviderConfig, ProviderKind, SafetyConfig};
pub use fixes::suggest_fixes;
pub use outcome::{ExecutionOutcome, FailureKind, EXIT_NOT_RUN};
pub use risk::{HeuristicConfig, RiskClassifier, RiskVerdict, RuleError, SignatureRule};
pub use suggestion::Suggestion;
pub use validate::{validate, ValidationError};
