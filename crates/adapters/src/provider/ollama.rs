// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ollama client (non-streaming `/api/generate`).

use super::{parse::parse_suggestion, ProviderError, SuggestionProvider, SYSTEM_PROMPT};
use async_trait::async_trait;
use serde::Deserialize;
use shai_core::Suggestion;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

pub struct OllamaProvider {
    host: String,
    model: String,
    client: reqwest::Client,
}

impl OllamaProvider {
    pub fn new(host: &str, model: &str) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ProviderError::Unavailable(e.to_string()))?;
        Ok(Self {
            host: host.trim_end_matches('/').to_string(),
            model: model.to_string(),
            client,
        })
    }
}

#[derive(Deserialize)]
struct GenerateReply {
    #[serde(default)]
    response: String,
}

#[async_trait]
impl SuggestionProvider for OllamaProvider {
    async fn suggest(&self, query: &str) -> Result<Suggestion, ProviderError> {
        let url = format!("{}/api/generate", self.host);
        let prompt =
            format!("{SYSTEM_PROMPT}\n\nUSER REQUEST: {query}\n\nASSISTANT RESPONSE (JSON only):");
        let payload = serde_json::json!({
            "model": self.model,
            "prompt": prompt,
            "stream": false,
            "options": { "temperature": 0.1 },
        });

        let response = self.client.post(&url).json(&payload).send().await.map_err(|e| {
            ProviderError::Unavailable(format!(
                "cannot reach ollama at {} (is `ollama serve` running?): {e}",
                self.host
            ))
        })?;

        if !response.status().is_success() {
            return Err(ProviderError::Unavailable(format!(
                "ollama returned HTTP {}",
                response.status()
            )));
        }

        let reply: GenerateReply = response
            .json()
            .await
            .map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;
        tracing::debug!(model = %self.model, bytes = reply.response.len(), "ollama reply");
        parse_suggestion(&reply.response)
    }
}
