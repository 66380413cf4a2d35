// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Human confirmation capability.

use async_trait::async_trait;
use std::sync::Arc;

/// Asks a human whether a dangerous command may run.
///
/// Implementations must default to "no": only an explicit affirmative
/// answer returns `true`. Interrupts, EOF, and unparseable input all
/// resolve to `false`. The wait is unbounded by design; callers needing
/// liveness impose their own timeout around the call.
#[async_trait]
pub trait ConfirmationCapability: Send + Sync {
    async fn ask(&self, command: &str, risks: &[String]) -> bool;
}

#[async_trait]
impl<C: ConfirmationCapability + ?Sized> ConfirmationCapability for Arc<C> {
    async fn ask(&self, command: &str, risks: &[String]) -> bool {
        (**self).ask(command, risks).await
    }
}
