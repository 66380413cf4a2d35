// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! shai-adapters: boundary capabilities for the guarded execution engine.
//!
//! Everything that talks to the outside world lives here: the suggestion
//! provider clients, the human confirmation capability, and the bounded
//! subprocess helper. The engine consumes these through traits so tests
//! can substitute fakes.

pub mod confirm;
pub mod provider;
pub mod subprocess;

#[cfg(any(test, feature = "test-support"))]
pub mod fake;

pub use confirm::ConfirmationCapability;
pub use provider::{
    OllamaProvider, OpenAiProvider, Provider, ProviderError, SuggestionProvider,
};
pub use subprocess::{run_with_timeout, SubprocessError};

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeConfirmer, FakeProvider};
