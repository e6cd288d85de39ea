//! Evaluation service - loads a model and a dataset, scores the predictions

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::api::state::EvaluationServiceTrait;
use crate::domain::{evaluation, DatasetLoader, DomainError, EvaluationOutcome, ModelLoader};

/// Orchestrates a single evaluation: load model, load dataset, predict, score.
///
/// Every call loads its own model and dataset; nothing is cached or shared
/// across requests.
pub struct EvaluationService {
    model_loader: Arc<dyn ModelLoader>,
    dataset_loader: Arc<dyn DatasetLoader>,
}

impl EvaluationService {
    pub fn new(model_loader: Arc<dyn ModelLoader>, dataset_loader: Arc<dyn DatasetLoader>) -> Self {
        Self {
            model_loader,
            dataset_loader,
        }
    }
}

#[async_trait::async_trait]
impl EvaluationServiceTrait for EvaluationService {
    async fn evaluate(
        &self,
        model_path: String,
        dataset_path: String,
    ) -> Result<EvaluationOutcome, DomainError> {
        if model_path.trim().is_empty() {
            return Err(DomainError::validation("model_path must not be empty"));
        }
        if dataset_path.trim().is_empty() {
            return Err(DomainError::validation("dataset_path must not be empty"));
        }

        let model_loader = self.model_loader.clone();
        let dataset_loader = self.dataset_loader.clone();

        // Model deserialization and inference are blocking work
        let outcome = tokio::task::spawn_blocking(move || {
            let model = model_loader.load(Path::new(&model_path))?;
            let dataset = dataset_loader.load(Path::new(&dataset_path))?;
            if dataset.is_empty() {
                return Err(DomainError::validation("dataset contains no rows"));
            }
            let predictions = model.predict(dataset.features())?;
            evaluation::score(&predictions, dataset.labels())
        })
        .await
        .map_err(|e| DomainError::internal(format!("evaluation task failed: {}", e)))??;

        info!(
            correct = outcome.correct,
            total = outcome.total,
            "Evaluation complete"
        );

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use ndarray::ArrayView2;

    use crate::domain::dataset::Dataset;
    use crate::domain::PredictiveModel;

    mock! {
        TestModelLoader {}

        impl ModelLoader for TestModelLoader {
            fn load(&self, path: &Path) -> Result<Box<dyn PredictiveModel>, DomainError>;
        }
    }

    mock! {
        TestDatasetLoader {}

        impl DatasetLoader for TestDatasetLoader {
            fn load(&self, path: &Path) -> Result<Dataset, DomainError>;
        }
    }

    struct FixedModel {
        predictions: Vec<f32>,
    }

    impl PredictiveModel for FixedModel {
        fn predict(&self, _features: ArrayView2<'_, f32>) -> Result<Vec<f32>, DomainError> {
            Ok(self.predictions.clone())
        }
    }

    fn two_row_dataset(labels: Vec<f32>) -> Dataset {
        Dataset::new(
            vec!["x1".to_string()],
            ndarray::array![[1.0], [2.0]],
            labels,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_evaluate_perfect_predictions() {
        let mut model_loader = MockTestModelLoader::new();
        model_loader.expect_load().returning(|_| {
            Ok(Box::new(FixedModel {
                predictions: vec![0.0, 1.0],
            }))
        });

        let mut dataset_loader = MockTestDatasetLoader::new();
        dataset_loader
            .expect_load()
            .returning(|_| Ok(two_row_dataset(vec![0.0, 1.0])));

        let service = EvaluationService::new(Arc::new(model_loader), Arc::new(dataset_loader));
        let outcome = service
            .evaluate("model.onnx".to_string(), "data.csv".to_string())
            .await
            .unwrap();

        assert_eq!(outcome.correct, 2);
        assert_eq!(outcome.accuracy(), 1.0);
    }

    #[tokio::test]
    async fn test_evaluate_no_matches() {
        let mut model_loader = MockTestModelLoader::new();
        model_loader.expect_load().returning(|_| {
            Ok(Box::new(FixedModel {
                predictions: vec![1.0, 0.0],
            }))
        });

        let mut dataset_loader = MockTestDatasetLoader::new();
        dataset_loader
            .expect_load()
            .returning(|_| Ok(two_row_dataset(vec![0.0, 1.0])));

        let service = EvaluationService::new(Arc::new(model_loader), Arc::new(dataset_loader));
        let outcome = service
            .evaluate("model.onnx".to_string(), "data.csv".to_string())
            .await
            .unwrap();

        assert_eq!(outcome.correct, 0);
        assert_eq!(outcome.accuracy(), 0.0);
    }

    #[tokio::test]
    async fn test_evaluate_empty_model_path() {
        let service = EvaluationService::new(
            Arc::new(MockTestModelLoader::new()),
            Arc::new(MockTestDatasetLoader::new()),
        );

        let result = service
            .evaluate("".to_string(), "data.csv".to_string())
            .await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_evaluate_model_load_failure_propagates() {
        let mut model_loader = MockTestModelLoader::new();
        model_loader
            .expect_load()
            .returning(|_| Err(DomainError::not_found("Model file 'x' not found")));

        let service = EvaluationService::new(
            Arc::new(model_loader),
            Arc::new(MockTestDatasetLoader::new()),
        );

        let result = service
            .evaluate("x".to_string(), "data.csv".to_string())
            .await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_evaluate_empty_dataset_is_validation_error() {
        let mut model_loader = MockTestModelLoader::new();
        model_loader.expect_load().returning(|_| {
            Ok(Box::new(FixedModel {
                predictions: vec![],
            }))
        });

        let mut dataset_loader = MockTestDatasetLoader::new();
        dataset_loader.expect_load().returning(|_| {
            Dataset::new(
                vec!["x1".to_string()],
                ndarray::Array2::zeros((0, 1)),
                vec![],
            )
        });

        let service = EvaluationService::new(Arc::new(model_loader), Arc::new(dataset_loader));
        let result = service
            .evaluate("model.onnx".to_string(), "data.csv".to_string())
            .await;

        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }
}
