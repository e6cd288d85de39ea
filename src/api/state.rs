//! Application state for shared services

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{DomainError, EvaluationOutcome};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub evaluation_service: Arc<dyn EvaluationServiceTrait>,
}

/// Trait for evaluation service operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EvaluationServiceTrait: Send + Sync {
    /// Load the model at `model_path`, score it against the labeled dataset
    /// at `dataset_path`, and return the exact-match outcome.
    async fn evaluate(
        &self,
        model_path: String,
        dataset_path: String,
    ) -> Result<EvaluationOutcome, DomainError>;
}
