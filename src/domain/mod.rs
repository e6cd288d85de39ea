//! Core domain types and seams

pub mod dataset;
pub mod error;
pub mod evaluation;
pub mod model;

pub use dataset::{Dataset, DatasetLoader};
pub use error::DomainError;
pub use evaluation::EvaluationOutcome;
pub use model::{ModelLoader, PredictiveModel};
