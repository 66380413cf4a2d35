// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! shai-engine: the stateful guarded execution pipeline.
//!
//! Wires the pure decision logic from `shai-core` to the capabilities in
//! `shai-adapters`: validate, classify, gate, run, and — on a real program
//! failure — one bounded repair hop through the suggestion provider.

pub mod executor;
pub mod gate;
pub mod query;
pub mod runner;

pub use executor::{ExecOptions, Executor};
pub use gate::{ConfirmationGate, GateState};
pub use query::build_fix_query;
pub use runner::Runner;
