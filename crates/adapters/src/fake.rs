// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Test doubles for the provider and confirmation capabilities.

use crate::confirm::ConfirmationCapability;
use crate::provider::{ProviderError, SuggestionProvider};
use async_trait::async_trait;
use parking_lot::Mutex;
use shai_core::{Command, Suggestion};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Scripted suggestion provider that counts how often it is called.
#[derive(Default)]
pub struct FakeProvider {
    responses: Mutex<VecDeque<Result<Suggestion, ProviderError>>>,
    calls: AtomicUsize,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a suggestion wrapping the given command text.
    pub fn push_command(&self, command: &str) {
        self.push_suggestion(Suggestion {
            command: Command::new(command),
            explanation: String::new(),
            risks: Vec::new(),
            alternatives: Vec::new(),
            safe_to_auto_execute: false,
        });
    }

    pub fn push_suggestion(&self, suggestion: Suggestion) {
        self.responses.lock().push_back(Ok(suggestion));
    }

    pub fn push_error(&self, error: ProviderError) {
        self.responses.lock().push_back(Err(error));
    }

    /// Number of `suggest` calls observed so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SuggestionProvider for FakeProvider {
    async fn suggest(&self, _query: &str) -> Result<Suggestion, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(ProviderError::Unavailable("no scripted response".to_string())))
    }
}

/// Confirmation capability answering from a fixed script, recording every
/// question it was asked.
pub struct FakeConfirmer {
    answer: bool,
    asked: Mutex<Vec<(String, Vec<String>)>>,
}

impl FakeConfirmer {
    pub fn new(answer: bool) -> Self {
        Self { answer, asked: Mutex::new(Vec::new()) }
    }

    pub fn approving() -> Self {
        Self::new(true)
    }

    pub fn denying() -> Self {
        Self::new(false)
    }

    pub fn ask_count(&self) -> usize {
        self.asked.lock().len()
    }

    /// Every `(command, risks)` pair presented so far.
    pub fn asked(&self) -> Vec<(String, Vec<String>)> {
        self.asked.lock().clone()
    }
}

#[async_trait]
impl ConfirmationCapability for FakeConfirmer {
    async fn ask(&self, command: &str, risks: &[String]) -> bool {
        self.asked.lock().push((command.to_string(), risks.to_vec()));
        self.answer
    }
}
