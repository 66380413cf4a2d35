// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Suggestion provider capability and its concrete clients.
//!
//! The pipeline only ever sees the [`SuggestionProvider`] trait. Which
//! client backs it is decided once at construction from the configured
//! [`ProviderKind`]; there is no string dispatch anywhere downstream.

mod ollama;
mod openai;
mod parse;

pub use ollama::OllamaProvider;
pub use openai::OpenAiProvider;
pub use parse::parse_suggestion;

use async_trait::async_trait;
use shai_core::config::{ProviderConfig, ProviderKind};
use shai_core::Suggestion;
use std::sync::Arc;
use thiserror::Error;

/// Instructions sent ahead of every query. The reply must be a single
/// JSON object matching the [`Suggestion`] schema.
pub(crate) const SYSTEM_PROMPT: &str = "\
You are a shell command assistant. Translate the user's request into a \
single POSIX shell command. Respond with exactly one JSON object and \
nothing else, using this schema:
{\"command\": \"<shell command>\", \"explanation\": \"<one sentence>\", \
\"risks\": [\"<risk>\"], \"alternatives\": [\"<command>\"], \
\"safe_to_auto_execute\": <bool>}
Set safe_to_auto_execute to true only for read-only commands.";

#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    /// The provider could not be reached or refused the request.
    #[error("suggestion provider unavailable: {0}")]
    Unavailable(String),

    /// The provider answered, but its output is not a usable suggestion.
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),
}

/// Maps a text query to a command [`Suggestion`].
///
/// Suggestions are untrusted: callers re-validate and re-classify the
/// suggested command before acting on it.
#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    async fn suggest(&self, query: &str) -> Result<Suggestion, ProviderError>;
}

#[async_trait]
impl<P: SuggestionProvider + ?Sized> SuggestionProvider for Arc<P> {
    async fn suggest(&self, query: &str) -> Result<Suggestion, ProviderError> {
        (**self).suggest(query).await
    }
}

/// The closed set of concrete providers.
pub enum Provider {
    Openai(OpenAiProvider),
    Ollama(OllamaProvider),
}

impl Provider {
    /// Construct the configured provider. The OpenAI key is taken from the
    /// environment only; it is never read from or written to config files.
    pub fn from_config(config: &ProviderConfig) -> Result<Self, ProviderError> {
        match config.kind {
            ProviderKind::Openai => {
                let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
                    ProviderError::Unavailable("OPENAI_API_KEY is not set".to_string())
                })?;
                Ok(Self::Openai(OpenAiProvider::new(config.host(), config.model(), api_key)?))
            }
            ProviderKind::Ollama => {
                Ok(Self::Ollama(OllamaProvider::new(config.host(), config.model())?))
            }
        }
    }
}

#[async_trait]
impl SuggestionProvider for Provider {
    async fn suggest(&self, query: &str) -> Result<Suggestion, ProviderError> {
        match self {
            Self::Openai(p) => p.suggest(query).await,
            Self::Ollama(p) => p.suggest(query).await,
        }
    }
}
