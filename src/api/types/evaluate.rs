//! Evaluation request and response types

use serde::{Deserialize, Serialize};

/// Request body for `POST /evaluate`
#[derive(Debug, Clone, Deserialize)]
pub struct EvaluateRequest {
    /// Filesystem path of the trained model artifact
    pub model_path: String,
    /// Filesystem path of the labeled CSV dataset
    pub dataset_path: String,
}

/// Response body for `POST /evaluate`
#[derive(Debug, Clone, Serialize)]
pub struct EvaluateResponse {
    /// Fraction of predictions exactly equal to their labels
    pub accuracy: f64,
}
