//! Model Evaluation Service
//!
//! An HTTP service that loads a pre-trained ONNX model from a filesystem path,
//! runs it against a labeled CSV dataset, and returns an accuracy score: the
//! fraction of predictions exactly equal to their corresponding labels.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::dataset::CsvDatasetLoader;
use infrastructure::model::OnnxModelLoader;
use infrastructure::services::EvaluationService;

/// Create the application state with all services initialized
pub fn create_app_state() -> AppState {
    let evaluation_service = EvaluationService::new(
        Arc::new(OnnxModelLoader::new()),
        Arc::new(CsvDatasetLoader::new()),
    );

    AppState {
        evaluation_service: Arc::new(evaluation_service),
    }
}
