//! Predictive model seam
//!
//! The model artifact is opaque: its on-disk format and prediction contract
//! are owned by the ML runtime behind these traits.

use std::path::Path;

use ndarray::ArrayView2;

use crate::domain::DomainError;

/// A loaded model that can score a batch of feature rows.
///
/// `predict` must return exactly one value per input row; anything else is a
/// prediction error surfaced by the evaluator.
pub trait PredictiveModel: Send + Sync {
    fn predict(&self, features: ArrayView2<'_, f32>) -> Result<Vec<f32>, DomainError>;
}

/// Deserializes a model artifact from a filesystem path
pub trait ModelLoader: Send + Sync {
    fn load(&self, path: &Path) -> Result<Box<dyn PredictiveModel>, DomainError>;
}
