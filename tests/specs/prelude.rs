//! Shared harness: an executor wired to fake capabilities.

pub use std::sync::Arc;
pub use std::time::Duration;

pub use shai_adapters::{FakeConfirmer, FakeProvider, ProviderError};
pub use shai_core::{
    Command, Config, ExecutionOutcome, FailureKind, RiskClassifier, Suggestion, EXIT_NOT_RUN,
};
pub use shai_engine::{ExecOptions, Executor, Runner};

pub struct Harness {
    pub provider: Arc<FakeProvider>,
    pub confirmer: Arc<FakeConfirmer>,
    pub executor: Executor<Arc<FakeProvider>, Arc<FakeConfirmer>>,
}

impl Harness {
    /// Default config, approving confirmer.
    pub fn approving() -> Self {
        Self::build(FakeConfirmer::approving(), None)
    }

    /// Default config, denying confirmer.
    pub fn denying() -> Self {
        Self::build(FakeConfirmer::denying(), None)
    }

    /// Approving confirmer with a short execution deadline.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::build(FakeConfirmer::approving(), Some(timeout))
    }

    fn build(confirmer: FakeConfirmer, timeout: Option<Duration>) -> Self {
        let provider = Arc::new(FakeProvider::new());
        let confirmer = Arc::new(confirmer);
        let executor = match timeout {
            None => {
                Executor::from_config(&Config::default(), provider.clone(), confirmer.clone())
                    .unwrap()
            }
            Some(timeout) => Executor::new(
                RiskClassifier::with_builtin_rules().unwrap(),
                Runner::new(timeout),
                provider.clone(),
                confirmer.clone(),
            ),
        };
        Self { provider, confirmer, executor }
    }
}
