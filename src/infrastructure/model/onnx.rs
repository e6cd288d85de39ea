//! ONNX model loading and batch inference via tract

use std::path::Path;

use ndarray::ArrayView2;
use tract_onnx::prelude::*;

use crate::domain::{DomainError, ModelLoader, PredictiveModel};

/// Loads ONNX model artifacts from the filesystem
#[derive(Debug, Default)]
pub struct OnnxModelLoader;

impl OnnxModelLoader {
    pub fn new() -> Self {
        Self
    }
}

impl ModelLoader for OnnxModelLoader {
    fn load(&self, path: &Path) -> Result<Box<dyn PredictiveModel>, DomainError> {
        if !path.exists() {
            return Err(DomainError::not_found(format!(
                "Model file '{}' not found",
                path.display()
            )));
        }

        let graph = tract_onnx::onnx().model_for_path(path).map_err(|e| {
            DomainError::model_load(format!("failed to load model '{}': {}", path.display(), e))
        })?;

        Ok(Box::new(OnnxModel { graph }))
    }
}

/// A parsed ONNX graph, optimized per batch at prediction time.
///
/// The input fact is pinned to the batch shape when `predict` runs, so models
/// exported with a dynamic batch dimension still score a whole dataset in one
/// call.
pub struct OnnxModel {
    graph: InferenceModel,
}

impl PredictiveModel for OnnxModel {
    fn predict(&self, features: ArrayView2<'_, f32>) -> Result<Vec<f32>, DomainError> {
        let (rows, cols) = features.dim();

        let plan = self
            .graph
            .clone()
            .with_input_fact(
                0,
                InferenceFact::dt_shape(f32::datum_type(), tvec!(rows, cols)),
            )
            .map_err(prediction_error)?
            .into_optimized()
            .map_err(prediction_error)?
            .into_runnable()
            .map_err(prediction_error)?;

        let flat: Vec<f32> = features.iter().copied().collect();
        let input = Tensor::from_shape(&[rows, cols], &flat).map_err(prediction_error)?;

        let outputs = plan.run(tvec!(input.into())).map_err(prediction_error)?;
        let values = flatten_first_output(&outputs)?;

        // The evaluator needs exactly one prediction per dataset row
        if values.len() != rows {
            return Err(DomainError::prediction(format!(
                "model produced {} output values for {} rows",
                values.len(),
                rows
            )));
        }

        Ok(values)
    }
}

fn prediction_error(e: impl std::fmt::Display) -> DomainError {
    DomainError::prediction(e.to_string())
}

fn flatten_first_output(outputs: &[TValue]) -> Result<Vec<f32>, DomainError> {
    let output = outputs
        .first()
        .ok_or_else(|| DomainError::prediction("model produced no outputs"))?;

    Ok(output
        .to_array_view::<f32>()
        .map_err(prediction_error)?
        .iter()
        .copied()
        .collect())
}
